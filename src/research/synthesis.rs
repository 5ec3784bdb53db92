//! Summary synthesis.
//!
//! With an LLM configured, the strongest findings are handed to the model
//! with a structured prompt. Without one, a deterministic summary is built
//! from the report's own statistics so the pipeline stays useful offline.

use crate::llm::LLMClient;
use crate::types::{Finding, Result};

/// Findings included in the synthesis prompt.
const PROMPT_FINDINGS: usize = 5;

/// Synthesize a summary with the given LLM.
pub async fn llm_summary(
    llm: &dyn LLMClient,
    topic: &str,
    findings: &[Finding],
) -> Result<String> {
    let material = findings
        .iter()
        .take(PROMPT_FINDINGS)
        .map(|f| format!("[{}] {}", f.source, f.content))
        .collect::<Vec<_>>()
        .join("\n\n");

    let prompt = format!(
        r#"Research topic: {}

Research findings:
{}

Synthesize these findings into a comprehensive, well-structured summary. Include:
1. Direct answer to the topic
2. Key insights
3. Supporting evidence
4. Caveats or limitations if any

Provide a clear, professional response."#,
        topic, material
    );

    llm.generate(&prompt).await
}

/// Deterministic fallback summary built from pipeline statistics.
pub fn heuristic_summary(topic: &str, findings_count: usize, sources_count: usize) -> String {
    format!(
        "Research on '{}' completed.\n\n\
         This report contains {} finding(s) gathered from {} source(s). \
         The findings are ordered by confidence; see the key insights for \
         the most important takeaways and the source list for attribution.",
        topic, findings_count, sources_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heuristic_summary_mentions_topic_and_counts() {
        let summary = heuristic_summary("rust async runtimes", 4, 5);
        assert!(summary.contains("rust async runtimes"));
        assert!(summary.contains("4 finding(s)"));
        assert!(summary.contains("5 source(s)"));
    }
}
