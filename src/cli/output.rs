//! Colored output helpers for CLI
//!
//! Provides consistent, colored terminal output for the sage CLI, including
//! the formatted research-report renderer.

use crate::types::ResearchReport;
use owo_colors::OwoColorize;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the S.A.G.E. banner
    pub fn banner(&self) {
        if self.colored {
            println!(
                r#"
   {}
   {}
   {}
   {}
   {}
"#,
                r" ____    _    ____ _____ ".bright_cyan().bold(),
                r"/ ___|  / \  / ___| ____|".bright_cyan().bold(),
                r"\___ \ / _ \| |  _|  _|  ".cyan().bold(),
                r" ___) / ___ \ |_| | |___ ".blue().bold(),
                r"|____/_/   \_\____|_____|".blue().bold(),
            );
            println!(
                "   {} {}\n",
                "Synthesizing Agentic Research Engine".bright_white().bold(),
                format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
            );
        } else {
            println!(
                r#"
 ____    _    ____ _____
/ ___|  / \  / ___| ____|
\___ \ / _ \| |  _|  _|
 ___) / ___ \ |_| | |___
|____/_/   \_\____|_____|

   Synthesizing Agentic Research Engine v{}
"#,
                env!("CARGO_PKG_VERSION")
            );
        }
    }

    /// Print a success message with a checkmark
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "⚠".yellow().bold(), message.yellow());
        } else {
            println!("  [WARN] {}", message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Print a header for a section
    pub fn header(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.bright_white().bold().underline());
        } else {
            println!("\n  === {} ===", title);
        }
    }

    /// Print a subheader
    pub fn subheader(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.cyan().bold());
        } else {
            println!("\n  --- {} ---", title);
        }
    }

    /// Print a key-value pair
    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            println!("    {}: {}", key.dimmed(), value.bright_white());
        } else {
            println!("    {}: {}", key, value);
        }
    }

    /// Print a list item
    pub fn list_item(&self, item: &str) {
        if self.colored {
            println!("    {} {}", "•".blue(), item);
        } else {
            println!("    - {}", item);
        }
    }

    /// Print newline
    pub fn newline(&self) {
        println!();
    }

    /// Render a full research report: header, summary, insights, and the
    /// source list with relevance scores.
    pub fn report(&self, report: &ResearchReport) {
        self.header(&format!("Research Report: {}", report.topic));
        self.kv("created", &report.created_at.to_rfc3339());
        self.kv("findings", &report.findings.len().to_string());
        self.kv("sources", &report.sources.len().to_string());

        self.subheader("Summary");
        for line in report.summary.lines() {
            println!("    {}", line);
        }

        if !report.key_insights.is_empty() {
            self.subheader(&format!("Key Insights ({})", report.key_insights.len()));
            for insight in &report.key_insights {
                self.list_item(insight);
            }
        }

        if !report.sources.is_empty() {
            self.subheader(&format!("Sources ({})", report.sources.len()));
            for source in &report.sources {
                self.list_item(&format!(
                    "{} ({:.2}) - {}",
                    source.title, source.relevance, source.url
                ));
            }
        }

        self.newline();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Source;
    use chrono::Utc;

    #[test]
    fn test_output_new() {
        let output = Output::new();
        assert!(output.colored);
    }

    #[test]
    fn test_output_no_color() {
        let output = Output::no_color();
        assert!(!output.colored);
    }

    #[test]
    fn test_output_methods_no_panic() {
        // Smoke test - ensure none of the output methods panic
        for output in [Output::new(), Output::no_color()] {
            output.success("test success");
            output.info("test info");
            output.warning("test warning");
            output.error("test error");
            output.header("Test Header");
            output.subheader("Test Subheader");
            output.kv("key", "value");
            output.list_item("item");
            output.newline();
            output.banner();
        }
    }

    #[test]
    fn test_report_rendering_no_panic() {
        let report = ResearchReport {
            topic: "rust".to_string(),
            summary: "line one\nline two".to_string(),
            findings: vec![],
            sources: vec![Source {
                url: "https://example.com".to_string(),
                title: "Example".to_string(),
                content: String::new(),
                relevance: 0.9,
                extracted_at: None,
            }],
            key_insights: vec!["an insight".to_string()],
            created_at: Utc::now(),
        };

        Output::no_color().report(&report);
    }
}
