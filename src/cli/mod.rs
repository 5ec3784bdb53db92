//! CLI module for S.A.G.E.
//!
//! Provides command-line parsing for the `sage` binary. Uses clap for
//! argument parsing and owo-colors for colored terminal output.

pub mod output;

use crate::types::Depth;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// S.A.G.E. - Synthesizing Agentic Research Engine
///
/// An autonomous research agent: plans search queries, gathers web sources,
/// extracts content, scores confidence, and synthesizes a report.
#[derive(Parser, Debug)]
#[command(
    name = "sage",
    author = "Dirmacs <build@dirmacs.com>",
    version,
    about = "S.A.G.E. - Synthesizing Agentic Research Engine",
    long_about = "An autonomous research agent: given a topic and a depth tier it plans\n\
                  search queries, gathers web sources, extracts content, scores finding\n\
                  confidence, and synthesizes a report with findings, sources, and key\n\
                  insights.",
    after_help = "EXAMPLES:\n    \
                  sage research \"rust async runtimes\"            # medium depth (5 sources)\n    \
                  sage research \"rust async runtimes\" -d deep    # thorough (10 sources)\n    \
                  sage research \"quantum computing\" --json       # machine-readable report\n    \
                  sage config --validate                         # check sage.toml"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "sage.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Research a topic and print the report
    Research {
        /// The research topic or question
        topic: String,

        /// Research depth: shallow (3 sources), medium (5), deep (10)
        #[arg(short, long, default_value = "medium")]
        depth: Depth,

        /// Print the report as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show configuration information
    Config {
        /// Validate the configuration file
        #[arg(long)]
        validate: bool,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
