//! Configuration for S.A.G.E.
//!
//! Infrastructure settings come from `sage.toml` with environment-variable
//! overrides (loaded through dotenvy, so a local `.env` works too). A
//! missing file is fine and yields defaults; a malformed file is a
//! [`AppError::Config`].

use crate::types::{AppError, BudgetOverrides, Depth, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

/// Root configuration structure loaded from `sage.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SageConfig {
    /// LLM provider settings
    #[serde(default)]
    pub llm: LlmConfig,

    /// Research pipeline settings
    #[serde(default)]
    pub research: ResearchConfig,
}

// ============= LLM Configuration =============

/// Which synthesis backend to use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Provider name: `"ollama"`, `"openai"`, or `"none"` for heuristic
    /// synthesis
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Model identifier for the chosen provider
    #[serde(default = "default_model")]
    pub model: String,

    /// Ollama server base URL
    #[serde(default = "default_ollama_url")]
    pub ollama_url: String,

    /// OpenAI-compatible API base URL
    #[serde(default = "default_openai_api_base")]
    pub openai_api_base: String,

    /// Environment variable holding the OpenAI API key
    #[serde(default = "default_openai_key_env")]
    pub openai_api_key_env: String,
}

fn default_provider() -> String {
    "none".to_string()
}

fn default_model() -> String {
    "llama3.2".to_string()
}

fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_openai_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            ollama_url: default_ollama_url(),
            openai_api_base: default_openai_api_base(),
            openai_api_key_env: default_openai_key_env(),
        }
    }
}

// ============= Research Configuration =============

/// Tunables for the research pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchConfig {
    /// Per-request timeout for page fetches, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Extraction backend: `"page"` (daedra fetch + markdown) or `"html"`
    /// (raw reqwest fetch + scraper text extraction)
    #[serde(default = "default_extractor")]
    pub extractor: String,

    /// Per-depth source budget overrides; each cap can only shrink the
    /// built-in budget (shallow 3, medium 5, deep 10)
    #[serde(default)]
    pub budgets: BudgetOverrides,
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_extractor() -> String {
    "page".to_string()
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
            extractor: default_extractor(),
            budgets: BudgetOverrides::default(),
        }
    }
}

impl ResearchConfig {
    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl SageConfig {
    /// Load configuration from a TOML file, then apply environment
    /// overrides. A missing file yields defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = path.as_ref();
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path).map_err(|e| {
                AppError::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;
            toml::from_str(&raw).map_err(|e| {
                AppError::Config(format!("Failed to parse {}: {}", path.display(), e))
            })?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply `SAGE_*` environment overrides on top of file values.
    fn apply_env_overrides(&mut self) {
        if let Ok(provider) = env::var("SAGE_LLM_PROVIDER") {
            self.llm.provider = provider;
        }
        if let Ok(model) = env::var("SAGE_LLM_MODEL") {
            self.llm.model = model;
        }
        if let Ok(url) = env::var("OLLAMA_URL") {
            self.llm.ollama_url = url;
        }
        if let Ok(timeout) = env::var("SAGE_REQUEST_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                self.research.request_timeout_secs = secs;
            }
        }
    }

    /// Check that the configuration is internally consistent.
    pub fn validate(&self) -> Result<()> {
        match self.llm.provider.as_str() {
            "ollama" | "openai" | "none" => {}
            other => {
                return Err(AppError::Config(format!(
                    "Unknown llm.provider '{}'. Expected one of: ollama, openai, none",
                    other
                )));
            }
        }

        if self.research.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "research.request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        match self.research.extractor.as_str() {
            "page" | "html" => {}
            other => {
                return Err(AppError::Config(format!(
                    "Unknown research.extractor '{}'. Expected one of: page, html",
                    other
                )));
            }
        }

        let budgets = self.research.budgets;
        for (depth, cap) in [
            (Depth::Shallow, budgets.shallow),
            (Depth::Medium, budgets.medium),
            (Depth::Deep, budgets.deep),
        ] {
            if cap == Some(0) {
                return Err(AppError::Config(format!(
                    "research.budgets.{} must be greater than zero",
                    depth
                )));
            }
        }

        Ok(())
    }

    /// Build the configured LLM provider, if any.
    ///
    /// Returns `Ok(None)` for `provider = "none"`. Selecting a provider
    /// whose Cargo feature is not compiled in is a config error.
    pub fn llm_provider(&self) -> Result<Option<crate::llm::Provider>> {
        match self.llm.provider.as_str() {
            "none" => Ok(None),

            #[cfg(feature = "ollama")]
            "ollama" => Ok(Some(crate::llm::Provider::Ollama {
                base_url: self.llm.ollama_url.clone(),
                model: self.llm.model.clone(),
            })),

            #[cfg(feature = "openai")]
            "openai" => {
                let api_key = env::var(&self.llm.openai_api_key_env).map_err(|_| {
                    AppError::Config(format!(
                        "OpenAI provider selected but {} is not set",
                        self.llm.openai_api_key_env
                    ))
                })?;
                Ok(Some(crate::llm::Provider::OpenAI {
                    api_key,
                    api_base: self.llm.openai_api_base.clone(),
                    model: self.llm.model.clone(),
                }))
            }

            other => Err(AppError::Config(format!(
                "Provider '{}' is not enabled in this build",
                other
            ))),
        }
    }
}
