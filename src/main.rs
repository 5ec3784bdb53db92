//! Entry point for the `sage` CLI.

use sage::cli::output::Output;
use sage::cli::{Cli, Commands};
use sage::config::SageConfig;
use sage::extract::{ContentExtractor, HtmlExtractor, PageExtractor};
use sage::research::AgenticResearcher;
use sage::types::{AppError, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    init_tracing(cli.verbose);

    if let Err(e) = run(&cli, &output).await {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "sage=debug" } else { "sage=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: &Cli, output: &Output) -> Result<()> {
    let config = SageConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Research { topic, depth, json } => {
            let researcher = build_researcher(&config).await?;

            if !json {
                output.banner();
                output.info(&format!(
                    "Researching '{}' at {} depth ({} sources max)",
                    topic,
                    depth,
                    depth.source_budget()
                ));
            }

            let report = researcher.research(topic, *depth).await?;

            if *json {
                let rendered = serde_json::to_string_pretty(&report)
                    .map_err(|e| AppError::Internal(format!("Failed to encode report: {}", e)))?;
                println!("{}", rendered);
            } else {
                output.report(&report);
                let status = researcher.status();
                output.success(&format!(
                    "Done: {} findings from {} sources ({} actions)",
                    status.findings_count, status.sources_count, status.actions_taken
                ));
            }
        }

        Commands::Config { validate } => {
            output.header("Configuration");
            output.kv("file", &cli.config.display().to_string());
            output.kv("llm.provider", &config.llm.provider);
            output.kv("llm.model", &config.llm.model);
            output.kv(
                "research.request_timeout_secs",
                &config.research.request_timeout_secs.to_string(),
            );

            if *validate {
                config.validate()?;
                output.success("Configuration is valid");
            }
        }
    }

    Ok(())
}

/// Wire a researcher from configuration: the selected extraction backend,
/// plus the configured LLM when one is selected.
async fn build_researcher(config: &SageConfig) -> Result<AgenticResearcher> {
    let extractor: Arc<dyn ContentExtractor> = match config.research.extractor.as_str() {
        "html" => Arc::new(HtmlExtractor::new(config.research.request_timeout())?),
        _ => Arc::new(PageExtractor::new()),
    };

    let mut builder = AgenticResearcher::builder()
        .extractor(extractor)
        .source_budgets(config.research.budgets);

    if let Some(provider) = config.llm_provider()? {
        let client = provider.create_client().await?;
        builder = builder.llm(Arc::from(client));
    }

    Ok(builder.build())
}
