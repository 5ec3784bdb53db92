//! Research orchestration
//!
//! This module ties the pipeline together: query planning and source
//! discovery, concurrent content extraction, confidence scoring, and report
//! synthesis.
//!
//! # Usage
//!
//! ```ignore
//! use sage::research::AgenticResearcher;
//! use sage::types::Depth;
//!
//! let researcher = AgenticResearcher::new();
//!
//! let report = researcher
//!     .research("What are the latest developments in quantum computing?", Depth::Medium)
//!     .await?;
//!
//! println!("{}", report.summary);
//! for source in &report.sources {
//!     println!("- {}", source.url);
//! }
//! ```
//!
//! # Research Workflow
//!
//! 1. **Search** - Expand the topic into queries, discover sources up to
//!    the depth's budget
//! 2. **Extract** - Fetch and extract content from each source concurrently
//! 3. **Analyze** - Score finding confidence, sort strongest first
//! 4. **Synthesize** - Produce a summary (LLM-backed when configured) and
//!    key insights
//!
//! The agent walks `Idle -> Searching -> Extracting -> Analyzing ->
//! Synthesizing -> Complete` and logs each step to its action history.

/// The research agent and its builder.
pub mod researcher;
/// Summary synthesis (LLM prompt and heuristic fallback).
pub mod synthesis;

pub use researcher::{AgenticResearcher, MultiTopicResearcher, ResearcherBuilder};
