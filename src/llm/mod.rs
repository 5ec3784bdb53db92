//! LLM Provider Clients and Abstractions
//!
//! This module provides a unified interface for the language models used
//! during synthesis. Provider-specific implementations sit behind the
//! [`LLMClient`] trait so the researcher can work with any supported backend,
//! or with none at all (heuristic synthesis).
//!
//! # Supported Providers
//!
//! Enable providers via Cargo features:
//! - `ollama` - Local Ollama server (default)
//! - `openai` - OpenAI API and compatible endpoints
//!
//! # Example
//!
//! ```ignore
//! use sage::llm::{LLMClientFactory, Provider};
//!
//! let factory = LLMClientFactory::new(Provider::Ollama {
//!     base_url: "http://localhost:11434".to_string(),
//!     model: "llama3.2".to_string(),
//! });
//!
//! let client = factory.create_default().await?;
//! let response = client.generate("Summarize these findings: ...").await?;
//! ```

/// Core LLM client trait and provider selection.
pub mod client;

#[cfg(feature = "ollama")]
pub mod ollama;

#[cfg(feature = "openai")]
pub mod openai;

pub use client::{LLMClient, LLMClientFactory, Provider};
