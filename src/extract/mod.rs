//! Content extraction from discovered sources.
//!
//! Two extractors are provided behind the [`ContentExtractor`] trait:
//! - [`PageExtractor`] fetches a page via daedra and converts it to markdown
//! - [`HtmlExtractor`] fetches raw HTML with reqwest and pulls readable text
//!   out with scraper (heading, paragraph, and list text)
//!
//! Extracted content feeds [`Finding`](crate::types::Finding) records: a
//! snippet (broken on sensible boundaries via text-splitter) plus up to
//! [`MAX_KEY_POINTS`] bullet/numbered key points.

use crate::types::{AppError, Result};
use async_trait::async_trait;
use text_splitter::TextSplitter;

/// Maximum key points kept per extracted page.
pub const MAX_KEY_POINTS: usize = 5;

/// Maximum snippet length carried into a finding, in characters.
pub const SNIPPET_CHARS: usize = 500;

/// A page after extraction.
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    /// URL the content was fetched from
    pub url: String,
    /// Page title, if one could be determined
    pub title: String,
    /// Readable text content
    pub content: String,
    /// Word count of the content
    pub word_count: usize,
}

/// Content extraction abstraction.
#[async_trait]
pub trait ContentExtractor: Send + Sync {
    /// Fetch and extract readable content from `url`.
    async fn extract(&self, url: &str) -> Result<ExtractedPage>;
}

/// Page extractor powered by daedra (page fetch + markdown conversion).
pub struct PageExtractor;

impl PageExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }
}

impl Default for PageExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentExtractor for PageExtractor {
    async fn extract(&self, url: &str) -> Result<ExtractedPage> {
        let fetch_args = daedra::VisitPageArgs {
            url: url.to_string(),
            include_images: false,
            selector: None,
        };

        match daedra::tools::fetch::fetch_page(&fetch_args).await {
            Ok(page) => Ok(ExtractedPage {
                url: page.url,
                title: page.title,
                content: page.content,
                word_count: page.word_count,
            }),
            Err(e) => Err(AppError::Extraction(format!(
                "Failed to fetch page {}: {}",
                url, e
            ))),
        }
    }
}

/// HTML extractor: reqwest fetch plus scraper-based text extraction.
///
/// Used when the daedra fetch path is not wanted, e.g. against plain HTML
/// endpoints in tests or behind proxies daedra cannot reach.
pub struct HtmlExtractor {
    client: reqwest::Client,
}

impl HtmlExtractor {
    /// Create an extractor with the given request timeout.
    pub fn new(timeout: std::time::Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ContentExtractor for HtmlExtractor {
    async fn extract(&self, url: &str) -> Result<ExtractedPage> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Extraction(format!("Failed to fetch {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(AppError::Extraction(format!(
                "Fetch of {} returned status {}",
                url,
                response.status()
            )));
        }

        let html = response
            .text()
            .await
            .map_err(|e| AppError::Extraction(format!("Failed to read body of {}: {}", url, e)))?;

        let (title, content) = parse_html(&html)?;
        let word_count = content.split_whitespace().count();

        Ok(ExtractedPage {
            url: url.to_string(),
            title,
            content,
            word_count,
        })
    }
}

/// Pull the title and readable text out of an HTML document.
fn parse_html(html: &str) -> Result<(String, String)> {
    let document = scraper::Html::parse_document(html);

    let title_selector = scraper::Selector::parse("title")
        .map_err(|e| AppError::Internal(format!("Invalid title selector: {}", e)))?;
    let text_selector = scraper::Selector::parse("h1, h2, h3, p, li")
        .map_err(|e| AppError::Internal(format!("Invalid text selector: {}", e)))?;

    let title = document
        .select(&title_selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let content = document
        .select(&text_selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    Ok((title, content))
}

/// Extract key points from content: bullet and numbered lines, capped at
/// [`MAX_KEY_POINTS`].
pub fn key_points(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| {
            line.starts_with("- ")
                || line.starts_with("* ")
                || line.starts_with("• ")
                || starts_with_number(line)
        })
        .map(|line| {
            line.trim_start_matches(['-', '*', '•', ' '])
                .trim_start_matches(|c: char| c.is_ascii_digit() || c == '.' || c == ')')
                .trim()
                .to_string()
        })
        .filter(|point| !point.is_empty())
        .take(MAX_KEY_POINTS)
        .collect()
}

fn starts_with_number(line: &str) -> bool {
    let mut chars = line.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => matches!(chars.next(), Some('.') | Some(')')),
        _ => false,
    }
}

/// Cut a snippet of at most [`SNIPPET_CHARS`] characters, breaking on
/// sensible text boundaries rather than mid-word.
pub fn snippet(content: &str) -> String {
    let splitter = TextSplitter::new(SNIPPET_CHARS);
    let first = splitter
        .chunks(content)
        .next()
        .unwrap_or_default()
        .to_string();
    first
}
