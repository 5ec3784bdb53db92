//! Core types for the research pipeline: depth tiers, sources, findings,
//! reports, agent status, and error handling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============= Depth Tiers =============

/// Research thoroughness tier controlling how many sources are consulted.
///
/// | Depth | Source budget |
/// |---------|---------------|
/// | Shallow | 3 |
/// | Medium | 5 |
/// | Deep | 10 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    /// Quick pass over a handful of sources
    Shallow,
    /// Balanced coverage (default)
    #[default]
    Medium,
    /// Thorough sweep across many sources
    Deep,
}

impl Depth {
    /// Maximum number of sources consulted at this depth.
    pub fn source_budget(&self) -> usize {
        match self {
            Depth::Shallow => 3,
            Depth::Medium => 5,
            Depth::Deep => 10,
        }
    }

    /// All depth tiers, shallowest first.
    pub fn all() -> [Depth; 3] {
        [Depth::Shallow, Depth::Medium, Depth::Deep]
    }
}

/// Optional per-depth caps on the number of sources consulted.
///
/// Overrides only shrink a depth's budget: a value above the built-in
/// budget is clamped down to it, so shallow/medium/deep never consult
/// more than 3/5/10 sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BudgetOverrides {
    /// Cap for [`Depth::Shallow`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shallow: Option<usize>,
    /// Cap for [`Depth::Medium`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<usize>,
    /// Cap for [`Depth::Deep`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep: Option<usize>,
}

impl BudgetOverrides {
    /// Effective source budget for `depth`: the override clamped into
    /// `[1, depth.source_budget()]`, or the built-in budget when unset.
    pub fn budget_for(&self, depth: Depth) -> usize {
        let default = depth.source_budget();
        let cap = match depth {
            Depth::Shallow => self.shallow,
            Depth::Medium => self.medium,
            Depth::Deep => self.deep,
        };
        match cap {
            Some(n) => n.clamp(1, default),
            None => default,
        }
    }
}

impl FromStr for Depth {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "shallow" => Ok(Depth::Shallow),
            "medium" => Ok(Depth::Medium),
            "deep" => Ok(Depth::Deep),
            other => Err(AppError::InvalidInput(format!(
                "Unknown depth '{}'. Expected one of: shallow, medium, deep",
                other
            ))),
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Depth::Shallow => "shallow",
            Depth::Medium => "medium",
            Depth::Deep => "deep",
        };
        write!(f, "{}", name)
    }
}

// ============= Agent State =============

/// Pipeline phase the agent is currently in.
///
/// Transitions follow the pipeline order:
/// `Idle -> Searching -> Extracting -> Analyzing -> Synthesizing -> Complete`,
/// with `Error` reachable from any phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResearchState {
    /// No research in progress
    Idle,
    /// Discovering sources
    Searching,
    /// Extracting content from sources
    Extracting,
    /// Scoring and ordering findings
    Analyzing,
    /// Producing summary and insights
    Synthesizing,
    /// Report assembled
    Complete,
    /// Pipeline aborted with an error
    Error,
}

impl fmt::Display for ResearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResearchState::Idle => "idle",
            ResearchState::Searching => "searching",
            ResearchState::Extracting => "extracting",
            ResearchState::Analyzing => "analyzing",
            ResearchState::Synthesizing => "synthesizing",
            ResearchState::Complete => "complete",
            ResearchState::Error => "error",
        };
        write!(f, "{}", name)
    }
}

// ============= Report Types =============

/// A discovered web source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    /// Page URL
    pub url: String,
    /// Page title as reported by the search backend
    pub title: String,
    /// Extracted page content (empty until extraction runs)
    #[serde(default)]
    pub content: String,
    /// Search-rank derived relevance in `[0, 1]`
    pub relevance: f32,
    /// When content extraction completed for this source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_at: Option<DateTime<Utc>>,
}

/// An extracted piece of information attributed to a source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Topic this finding belongs to
    pub topic: String,
    /// Snippet of extracted content
    pub content: String,
    /// URL of the source this finding came from
    pub source: String,
    /// Keyword-overlap confidence in `[0, 1]`
    pub confidence: f32,
    /// Bullet/numbered points pulled from the content
    #[serde(default)]
    pub key_points: Vec<String>,
}

/// Complete research report.
///
/// Constructed once per [`research`](crate::research::AgenticResearcher::research)
/// call, immutable thereafter, owned by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchReport {
    /// The topic that was researched (echoes the input verbatim)
    pub topic: String,
    /// Synthesized summary of all findings
    pub summary: String,
    /// Findings ordered by descending confidence
    pub findings: Vec<Finding>,
    /// Sources consulted, bounded by the depth's source budget
    pub sources: Vec<Source>,
    /// Short synthesized takeaways derived from findings
    pub key_insights: Vec<String>,
    /// When the report was assembled
    pub created_at: DateTime<Utc>,
}

// ============= Action Log Types =============

/// One entry of the agent's action history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Unique id for this record
    pub id: uuid::Uuid,
    /// Action name (e.g. "research_started", "searching", "extracting")
    pub action: String,
    /// Structured parameters attached to the action
    pub params: serde_json::Value,
    /// When the action was logged
    pub timestamp: DateTime<Utc>,
    /// Pipeline state at the time of logging
    pub state: ResearchState,
}

/// Snapshot of the agent's progress, returned by
/// [`status`](crate::research::AgenticResearcher::status).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentStatus {
    /// Current pipeline state
    pub state: ResearchState,
    /// Findings collected so far
    pub findings_count: usize,
    /// Sources discovered so far
    pub sources_count: usize,
    /// Actions logged so far
    pub actions_taken: usize,
}

// ============= Error Types =============

/// Crate-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Web search backend failure
    #[error("Search error: {0}")]
    Search(String),

    /// Content extraction failure
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// LLM provider failure
    #[error("LLM error: {0}")]
    LLM(String),

    /// Invalid caller input (e.g. empty topic, unknown depth)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration load or validation failure
    #[error("Config error: {0}")]
    Config(String),

    /// Anything that does not fit the categories above
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_source_budget() {
        assert_eq!(Depth::Shallow.source_budget(), 3);
        assert_eq!(Depth::Medium.source_budget(), 5);
        assert_eq!(Depth::Deep.source_budget(), 10);
    }

    #[test]
    fn test_depth_from_str() {
        assert_eq!("shallow".parse::<Depth>().unwrap(), Depth::Shallow);
        assert_eq!("MEDIUM".parse::<Depth>().unwrap(), Depth::Medium);
        assert_eq!("Deep".parse::<Depth>().unwrap(), Depth::Deep);
        assert!("exhaustive".parse::<Depth>().is_err());
    }

    #[test]
    fn test_depth_default_is_medium() {
        assert_eq!(Depth::default(), Depth::Medium);
    }

    #[test]
    fn test_budget_overrides_default_to_builtin() {
        let budgets = BudgetOverrides::default();
        for depth in Depth::all() {
            assert_eq!(budgets.budget_for(depth), depth.source_budget());
        }
    }

    #[test]
    fn test_budget_overrides_shrink_only() {
        let budgets = BudgetOverrides {
            shallow: Some(1),
            medium: Some(50),
            deep: Some(0),
        };
        assert_eq!(budgets.budget_for(Depth::Shallow), 1);
        // Values above the built-in budget are clamped down to it
        assert_eq!(budgets.budget_for(Depth::Medium), 5);
        // Zero clamps up to one
        assert_eq!(budgets.budget_for(Depth::Deep), 1);
    }

    #[test]
    fn test_depth_display_roundtrip() {
        for depth in Depth::all() {
            assert_eq!(depth.to_string().parse::<Depth>().unwrap(), depth);
        }
    }

    #[test]
    fn test_report_serialization() {
        let report = ResearchReport {
            topic: "rust async runtimes".to_string(),
            summary: "A summary".to_string(),
            findings: vec![],
            sources: vec![Source {
                url: "https://example.com/a".to_string(),
                title: "Example".to_string(),
                content: String::new(),
                relevance: 0.9,
                extracted_at: None,
            }],
            key_insights: vec!["Insight".to_string()],
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&report).unwrap();
        let parsed: ResearchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.topic, "rust async runtimes");
        assert_eq!(parsed.sources.len(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = AppError::InvalidInput("empty topic".to_string());
        assert_eq!(err.to_string(), "Invalid input: empty topic");

        let err = AppError::Search("backend down".to_string());
        assert!(err.to_string().starts_with("Search error"));
    }
}
