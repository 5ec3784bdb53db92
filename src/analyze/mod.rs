//! Finding analysis: confidence scoring and insight selection.
//!
//! Scoring is keyword-based: the fraction of topic terms that appear in a
//! finding's content, clamped to `[0, 1]`. Findings are then ordered by
//! descending confidence so synthesis sees the strongest material first.

use crate::types::Finding;

/// Maximum key insights surfaced in a report.
pub const MAX_INSIGHTS: usize = 5;

/// Score a single finding's confidence against the topic.
///
/// Returns the fraction of distinct topic terms present in the content.
/// An empty topic scores 0.
pub fn confidence(topic: &str, content: &str) -> f32 {
    let topic_words: Vec<String> = topic
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    if topic_words.is_empty() {
        return 0.0;
    }

    let content_lower = content.to_lowercase();
    let matches = topic_words
        .iter()
        .filter(|word| content_lower.contains(word.as_str()))
        .count();

    (matches as f32 / topic_words.len() as f32).min(1.0)
}

/// Score all findings in place and sort them by descending confidence.
pub fn score_findings(topic: &str, findings: &mut [Finding]) {
    for finding in findings.iter_mut() {
        finding.confidence = confidence(topic, &finding.content);
    }

    // total_cmp keeps the sort stable in the presence of equal scores
    findings.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
}

/// Select key insights: deduplicated key points across findings, in
/// confidence order, capped at [`MAX_INSIGHTS`].
pub fn select_insights(findings: &[Finding]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut insights = Vec::new();

    for finding in findings {
        for point in &finding.key_points {
            if insights.len() >= MAX_INSIGHTS {
                return insights;
            }
            if seen.insert(point.clone()) {
                insights.push(point.clone());
            }
        }
    }

    insights
}
