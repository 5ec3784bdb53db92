//! Mock implementations for testing.
//!
//! This module provides mock search providers, extractors, and LLM clients
//! that can be used across different test files without duplication.

use async_trait::async_trait;
use sage::extract::{ContentExtractor, ExtractedPage};
use sage::llm::LLMClient;
use sage::search::{SearchHit, SearchProvider};
use sage::types::{AppError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock search provider that fabricates one page of hits per query.
///
/// URLs embed the query so hits from different queries stay distinct,
/// which exercises the finder's per-query accumulation. Use
/// [`MockSearch::duplicating`] to return the same URLs for every query and
/// exercise deduplication instead.
pub struct MockSearch {
    hits_per_query: usize,
    duplicate_urls: bool,
    calls: AtomicUsize,
}

impl MockSearch {
    /// Hits distinct across queries.
    pub fn new(hits_per_query: usize) -> Self {
        Self {
            hits_per_query,
            duplicate_urls: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Every query returns the same URLs.
    pub fn duplicating(hits_per_query: usize) -> Self {
        Self {
            hits_per_query,
            duplicate_urls: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of queries served so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchProvider for MockSearch {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let slug = if self.duplicate_urls {
            "fixed".to_string()
        } else {
            query.replace(' ', "-")
        };

        Ok((0..self.hits_per_query.min(limit))
            .map(|i| SearchHit {
                title: format!("Result {} for {}", i, query),
                url: format!("https://example.com/{}/{}", slug, i),
                snippet: format!("Snippet {} about {}", i, query),
            })
            .collect())
    }
}

/// Mock extractor that produces deterministic content mentioning the URL.
pub struct MockExtractor {
    pub fail_for: Vec<String>,
}

impl MockExtractor {
    /// Extractor that succeeds for every URL.
    pub fn new() -> Self {
        Self { fail_for: vec![] }
    }

    /// Extractor that fails for the given URLs and succeeds otherwise.
    pub fn failing_for(urls: &[&str]) -> Self {
        Self {
            fail_for: urls.iter().map(|u| u.to_string()).collect(),
        }
    }
}

impl Default for MockExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentExtractor for MockExtractor {
    async fn extract(&self, url: &str) -> Result<ExtractedPage> {
        if self.fail_for.iter().any(|u| u == url) {
            return Err(AppError::Extraction(format!("unreachable: {}", url)));
        }

        let content = format!(
            "Overview of the research topic from {}.\n\
             - First key point\n\
             - Second key point\n\
             1. A numbered observation",
            url
        );
        let word_count = content.split_whitespace().count();

        Ok(ExtractedPage {
            url: url.to_string(),
            title: format!("Page at {}", url),
            content,
            word_count,
        })
    }
}

/// Mock LLM client for testing with configurable responses.
#[derive(Clone)]
pub struct MockLLMClient {
    response: String,
    should_fail: bool,
}

impl MockLLMClient {
    /// Create a new mock client that returns the given response.
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            should_fail: false,
        }
    }

    /// Create a mock client that always returns an error.
    pub fn failing() -> Self {
        Self {
            response: String::new(),
            should_fail: true,
        }
    }
}

#[async_trait]
impl LLMClient for MockLLMClient {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        if self.should_fail {
            return Err(AppError::LLM("Mock LLM failure".to_string()));
        }
        Ok(self.response.clone())
    }

    async fn generate_with_system(&self, _system: &str, _prompt: &str) -> Result<String> {
        if self.should_fail {
            return Err(AppError::LLM("Mock LLM failure".to_string()));
        }
        Ok(self.response.clone())
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
