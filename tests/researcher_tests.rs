//! Integration tests for the research pipeline.
//!
//! These run the full orchestrator against mock collaborators: no network,
//! no LLM process. The depth-to-source-budget contract is the load-bearing
//! property here.

mod common;

use common::mocks::{MockExtractor, MockLLMClient, MockSearch};
use rstest::rstest;
use sage::research::{AgenticResearcher, MultiTopicResearcher};
use sage::types::{AppError, BudgetOverrides, Depth, ResearchState};
use std::sync::Arc;

fn researcher_with(search: MockSearch, extractor: MockExtractor) -> AgenticResearcher {
    AgenticResearcher::builder()
        .search_provider(Arc::new(search))
        .extractor(Arc::new(extractor))
        .build()
}

#[rstest]
#[case(Depth::Shallow, 3)]
#[case(Depth::Medium, 5)]
#[case(Depth::Deep, 10)]
#[tokio::test]
async fn depth_bounds_source_count(#[case] depth: Depth, #[case] budget: usize) {
    // Plenty of hits available per query; the budget must still cap sources.
    let researcher = researcher_with(MockSearch::new(20), MockExtractor::new());

    let report = researcher
        .research("rust async runtimes", depth)
        .await
        .unwrap();

    assert_eq!(depth.source_budget(), budget);
    assert!(report.sources.len() <= budget);
    assert_eq!(report.sources.len(), budget);
}

#[rstest]
#[case(Depth::Shallow)]
#[case(Depth::Medium)]
#[case(Depth::Deep)]
#[tokio::test]
async fn report_topic_echoes_input(#[case] depth: Depth) {
    let researcher = researcher_with(MockSearch::new(2), MockExtractor::new());

    let topic = "observability for distributed systems";
    let report = researcher.research(topic, depth).await.unwrap();

    assert_eq!(report.topic, topic);
}

#[tokio::test]
async fn budget_overrides_shrink_sources_consulted() {
    let researcher = AgenticResearcher::builder()
        .search_provider(Arc::new(MockSearch::new(20)))
        .extractor(Arc::new(MockExtractor::new()))
        .source_budgets(BudgetOverrides {
            shallow: Some(1),
            medium: None,
            deep: Some(50),
        })
        .build();

    let report = researcher.research("topic", Depth::Shallow).await.unwrap();
    assert_eq!(report.sources.len(), 1);

    // Un-overridden depths keep the built-in budget
    let report = researcher.research("topic", Depth::Medium).await.unwrap();
    assert_eq!(report.sources.len(), 5);

    // Oversized caps clamp down to the built-in budget
    let report = researcher.research("topic", Depth::Deep).await.unwrap();
    assert_eq!(report.sources.len(), 10);
}

#[tokio::test]
async fn scarce_results_yield_fewer_sources_than_budget() {
    // One hit per query and five queries planned: at most 5 distinct URLs,
    // so a deep run cannot fill its budget of 10.
    let researcher = researcher_with(MockSearch::new(1), MockExtractor::new());

    let report = researcher.research("niche topic", Depth::Deep).await.unwrap();
    assert!(report.sources.len() <= 5);
    assert!(!report.sources.is_empty());
}

#[tokio::test]
async fn duplicate_urls_across_queries_are_collapsed() {
    let researcher = researcher_with(MockSearch::duplicating(3), MockExtractor::new());

    let report = researcher.research("topic", Depth::Deep).await.unwrap();

    let mut urls: Vec<&str> = report.sources.iter().map(|s| s.url.as_str()).collect();
    urls.sort_unstable();
    urls.dedup();
    assert_eq!(urls.len(), report.sources.len());
    assert_eq!(report.sources.len(), 3);
}

#[tokio::test]
async fn unreachable_sources_are_skipped_not_fatal() {
    // The first query's first two URLs fail extraction.
    let researcher = researcher_with(
        MockSearch::new(20),
        MockExtractor::failing_for(&[
            "https://example.com/rust-memory-safety/0",
            "https://example.com/rust-memory-safety/1",
        ]),
    );

    let report = researcher
        .research("rust memory safety", Depth::Medium)
        .await
        .unwrap();

    // All five sources are still listed; findings only exist for the three
    // reachable ones.
    assert_eq!(report.sources.len(), 5);
    assert_eq!(report.findings.len(), 3);
    assert_eq!(researcher.status().state, ResearchState::Complete);
}

#[tokio::test]
async fn findings_carry_key_points_and_insights() {
    let researcher = researcher_with(MockSearch::new(3), MockExtractor::new());

    let report = researcher.research("topic", Depth::Shallow).await.unwrap();

    assert!(!report.findings.is_empty());
    for finding in &report.findings {
        assert!(!finding.key_points.is_empty());
        assert!(!finding.source.is_empty());
    }
    assert!(!report.key_insights.is_empty());
    assert!(report.key_insights.len() <= 5);
}

#[tokio::test]
async fn llm_summary_is_used_when_configured() {
    let researcher = AgenticResearcher::builder()
        .search_provider(Arc::new(MockSearch::new(3)))
        .extractor(Arc::new(MockExtractor::new()))
        .llm(Arc::new(MockLLMClient::new("Model-written summary.")))
        .build();

    let report = researcher.research("topic", Depth::Shallow).await.unwrap();
    assert_eq!(report.summary, "Model-written summary.");
}

#[tokio::test]
async fn heuristic_summary_without_llm() {
    let researcher = researcher_with(MockSearch::new(3), MockExtractor::new());

    let report = researcher.research("graph databases", Depth::Shallow).await.unwrap();
    assert!(report.summary.contains("graph databases"));
    assert!(report.summary.contains("3 source(s)"));
}

#[tokio::test]
async fn llm_failure_during_synthesis_propagates() {
    let researcher = AgenticResearcher::builder()
        .search_provider(Arc::new(MockSearch::new(3)))
        .extractor(Arc::new(MockExtractor::new()))
        .llm(Arc::new(MockLLMClient::failing()))
        .build();

    let result = researcher.research("topic", Depth::Shallow).await;
    assert!(matches!(result, Err(AppError::LLM(_))));
    assert_eq!(researcher.status().state, ResearchState::Error);
}

#[tokio::test]
async fn empty_topic_is_invalid_input() {
    let researcher = researcher_with(MockSearch::new(3), MockExtractor::new());

    let result = researcher.research("", Depth::Medium).await;
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn status_and_history_track_progress() {
    let researcher = researcher_with(MockSearch::new(5), MockExtractor::new());

    let before = researcher.status();
    assert_eq!(before.state, ResearchState::Idle);
    assert_eq!(before.actions_taken, 0);

    researcher.research("topic", Depth::Medium).await.unwrap();

    let after = researcher.status();
    assert_eq!(after.state, ResearchState::Complete);
    assert_eq!(after.sources_count, 5);
    assert_eq!(after.findings_count, 5);

    let history = researcher.action_history();
    assert_eq!(history.len(), after.actions_taken);
    assert_eq!(history[0].action, "research_started");
    assert_eq!(history.last().unwrap().action, "research_complete");
}

#[tokio::test]
async fn multi_topic_research_keys_reports_by_topic() {
    let researcher = researcher_with(MockSearch::new(3), MockExtractor::new());
    let multi = MultiTopicResearcher::with_researcher(researcher);

    let topics = vec![
        "rust borrow checker".to_string(),
        "tokio task scheduling".to_string(),
    ];

    let results = multi.research_topics(&topics, Depth::Shallow).await.unwrap();

    assert_eq!(results.len(), 2);
    for topic in &topics {
        let report = &results[topic];
        assert_eq!(&report.topic, topic);
        assert!(report.sources.len() <= 3);
    }
}

#[tokio::test]
async fn report_serializes_to_json() {
    let researcher = researcher_with(MockSearch::new(3), MockExtractor::new());
    let report = researcher.research("topic", Depth::Shallow).await.unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["topic"], "topic");
    assert!(json["sources"].as_array().unwrap().len() <= 3);
    assert!(json["summary"].as_str().is_some());
}
