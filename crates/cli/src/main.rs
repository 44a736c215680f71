//! coulis CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use coulis::StyleContext;
use coulis_cli::cli::{Cli, Commands};
use coulis_cli::output::{format_hash, format_metadata, format_resolution};
use coulis_cli::run::{self, HashReport};
use coulis_cli::StyleDocument;
use coulis_ssr::ServerContext;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "coulis=info".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(
            cli.log_json
                .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
        )
        .with(
            (!cli.log_json)
                .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
        .init();

    match &cli.command {
        Commands::Resolve { document } => {
            let style_document = StyleDocument::load(document)?;
            let context = StyleContext::from_env();
            let resolution = run::resolve(&style_document, &context)
                .with_context(|| format!("Failed to resolve {}", document.display()))?;
            println!("{}", format_resolution(&resolution, cli.format)?);
        }
        Commands::Extract { document } => {
            let style_document = StyleDocument::load(document)?;
            let server = ServerContext::from_env()?;
            let metadata = run::extract(&style_document, &server)
                .with_context(|| format!("Failed to extract {}", document.display()))?;
            println!("{}", format_metadata(&metadata, cli.format)?);
            if !cli.quiet {
                eprintln!("Extracted {} style elements", metadata.len());
            }
        }
        Commands::Hash { key } => {
            println!("{}", format_hash(&HashReport::new(key.as_str()), cli.format)?);
        }
    }

    Ok(())
}
