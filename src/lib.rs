//! # S.A.G.E. - Synthesizing Agentic Research Engine
//!
//! An autonomous research agent built in Rust: given a topic and a depth
//! tier it plans search queries, gathers web sources, extracts content,
//! scores finding confidence, and synthesizes a report with findings,
//! sources, and key insights.
//!
//! ## Overview
//!
//! S.A.G.E. can be used in two ways:
//!
//! 1. **As a CLI** - Run the `sage` binary
//! 2. **As a library** - Import the researcher into your own Rust project
//!
//! ## Quick Start (Library Usage)
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sage-agent = "0.3"
//! ```
//!
//! ### Basic Example
//!
//! ```rust,ignore
//! use sage::research::AgenticResearcher;
//! use sage::types::Depth;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let researcher = AgenticResearcher::new();
//!
//!     let report = researcher
//!         .research("artificial intelligence trends", Depth::Medium)
//!         .await?;
//!
//!     println!("{}", report.summary);
//!     for insight in &report.key_insights {
//!         println!("- {}", insight);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### LLM-Backed Synthesis
//!
//! ```rust,ignore
//! use sage::llm::Provider;
//! use sage::research::AgenticResearcher;
//! use std::sync::Arc;
//!
//! let provider = Provider::Ollama {
//!     base_url: "http://localhost:11434".to_string(),
//!     model: "llama3.2".to_string(),
//! };
//!
//! let researcher = AgenticResearcher::builder()
//!     .llm(Arc::from(provider.create_client().await?))
//!     .build();
//! ```
//!
//! ## Depth Tiers
//!
//! | Depth | Sources consulted |
//! |---------|-------------------|
//! | shallow | at most 3 |
//! | medium | at most 5 |
//! | deep | at most 10 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |----------|-------------|
//! | `ollama` | Ollama local inference (default) |
//! | `openai` | OpenAI API support |
//! | `minimal` | No LLM provider, heuristic synthesis only |
//!
//! ## Modules
//!
//! - [`research`] - The research agent and pipeline orchestration
//! - [`search`] - Query planning and web source discovery
//! - [`extract`] - Content extraction from web pages
//! - [`analyze`] - Confidence scoring and insight selection
//! - [`llm`] - LLM client implementations
//! - [`config`] - TOML + environment configuration
//! - [`types`] - Core types and error handling

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Confidence scoring and insight selection.
pub mod analyze;
/// Command-line interface parsing and output rendering.
pub mod cli;
/// Configuration utilities (TOML + environment).
pub mod config;
/// Content extraction from web pages.
pub mod extract;
/// LLM provider clients and abstractions.
pub mod llm;
/// Research agent and pipeline orchestration.
pub mod research;
/// Query planning and web source discovery.
pub mod search;
/// Core types (reports, findings, errors).
pub mod types;

// Re-export commonly used types
pub use config::SageConfig;
pub use extract::{ContentExtractor, ExtractedPage};
pub use llm::{LLMClient, LLMClientFactory, Provider};
pub use research::{AgenticResearcher, MultiTopicResearcher, ResearcherBuilder};
pub use search::{SearchHit, SearchProvider};
pub use types::{
    AgentStatus, AppError, BudgetOverrides, Depth, Finding, ResearchReport, ResearchState, Result,
    Source,
};
