//! Source discovery: query planning and web search.
//!
//! A topic is expanded into a handful of related queries, each query is sent
//! to the search backend (DuckDuckGo via the daedra crate), and the hits are
//! accumulated into deduplicated [`Source`] records until the depth's source
//! budget is reached.

use crate::types::{AppError, BudgetOverrides, Depth, Result, Source};
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Maximum number of queries planned per topic.
pub const MAX_QUERIES: usize = 5;

/// A single hit returned by a search backend.
#[derive(Debug, Clone)]
pub struct SearchHit {
    /// Result title
    pub title: String,
    /// Result URL
    pub url: String,
    /// Short description shown by the search engine
    pub snippet: String,
}

/// Search backend abstraction.
///
/// The production implementation is [`WebSearchProvider`]; tests swap in
/// in-memory fakes.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run one query, returning at most `limit` hits.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>>;
}

#[async_trait]
impl<T: SearchProvider + ?Sized> SearchProvider for std::sync::Arc<T> {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        (**self).search(query, limit).await
    }
}

/// Web search provider powered by daedra (DuckDuckGo backend).
pub struct WebSearchProvider;

impl WebSearchProvider {
    /// Create a new provider.
    pub fn new() -> Self {
        Self
    }
}

impl Default for WebSearchProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchProvider for WebSearchProvider {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        let search_args = daedra::SearchArgs {
            query: query.to_string(),
            options: Some(daedra::SearchOptions {
                num_results: limit,
                ..Default::default()
            }),
        };

        match daedra::tools::search::perform_search(&search_args).await {
            Ok(response) => Ok(response
                .data
                .iter()
                .map(|r| SearchHit {
                    title: r.title.clone(),
                    url: r.url.clone(),
                    snippet: r.description.clone(),
                })
                .collect()),
            Err(e) => Err(AppError::Search(format!("Search failed: {}", e))),
        }
    }
}

/// Expand a topic into related search queries.
///
/// The base topic comes first so the most direct query always runs; the
/// remaining variants broaden coverage for definitional, practical, and
/// tutorial-style material.
pub fn plan_queries(topic: &str) -> Vec<String> {
    let base = topic.trim().to_lowercase();

    vec![
        base.clone(),
        format!("what is {}", base),
        format!("{} guide", base),
        format!("best practices {}", base),
        format!("{} tutorial", base),
    ]
    .into_iter()
    .take(MAX_QUERIES)
    .collect()
}

/// Discovers sources for a topic, bounded by a depth's source budget.
pub struct SourceFinder<S: SearchProvider> {
    provider: S,
    budgets: BudgetOverrides,
}

impl<S: SearchProvider> SourceFinder<S> {
    /// Wrap a search provider with the built-in per-depth budgets.
    pub fn new(provider: S) -> Self {
        Self::with_budgets(provider, BudgetOverrides::default())
    }

    /// Wrap a search provider with per-depth budget overrides. Overrides
    /// can only shrink a depth's budget, never grow it.
    pub fn with_budgets(provider: S, budgets: BudgetOverrides) -> Self {
        Self { provider, budgets }
    }

    /// Find up to `depth.source_budget()` sources for `topic` (fewer when
    /// a budget override shrinks the cap).
    ///
    /// Queries run in planned order; duplicate URLs are skipped. A failing
    /// query is logged and skipped, but if every query fails the whole
    /// discovery fails.
    pub async fn find_sources(&self, topic: &str, depth: Depth) -> Result<Vec<Source>> {
        let budget = self.budgets.budget_for(depth);
        let queries = plan_queries(topic);

        let mut sources: Vec<Source> = Vec::with_capacity(budget);
        let mut seen_urls: HashSet<String> = HashSet::new();
        let mut failures = 0usize;

        for query in &queries {
            if sources.len() >= budget {
                break;
            }

            debug!(query = %query, "searching");

            let hits = match self.provider.search(query, budget).await {
                Ok(hits) => hits,
                Err(e) => {
                    warn!(query = %query, error = %e, "search query failed, skipping");
                    failures += 1;
                    continue;
                }
            };

            for (rank, hit) in hits.into_iter().enumerate() {
                if sources.len() >= budget {
                    break;
                }
                if !seen_urls.insert(hit.url.clone()) {
                    continue;
                }
                sources.push(Source {
                    url: hit.url,
                    title: hit.title,
                    content: String::new(),
                    relevance: rank_relevance(rank),
                    extracted_at: None,
                });
            }
        }

        if sources.is_empty() && failures == queries.len() {
            return Err(AppError::Search(format!(
                "All {} search queries failed for topic '{}'",
                failures, topic
            )));
        }

        Ok(sources)
    }
}

/// Map a zero-based search rank to a relevance score in `[0.1, 1.0]`.
///
/// The first hit of a query scores 1.0 and each subsequent rank loses 0.1,
/// flooring at 0.1 so late hits still carry some weight.
fn rank_relevance(rank: usize) -> f32 {
    (1.0 - rank as f32 * 0.1).max(0.1)
}
