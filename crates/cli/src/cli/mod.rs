//! CLI command definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Resolve and extract coulis style documents.
#[derive(Debug, Parser)]
#[command(name = "coulis")]
#[command(about = "Resolve and extract coulis style documents", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Emit logs as JSON lines.
    #[arg(long, global = true, env = "COULIS_LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a style document and print its class names.
    Resolve {
        /// Path to the JSON style document.
        document: PathBuf,
    },
    /// Resolve a style document and print the extracted `<style>` markup.
    Extract {
        /// Path to the JSON style document.
        document: PathBuf,
    },
    /// Print the class name for a cache key.
    Hash {
        /// The cache key (usually a declaration such as `color:red;`).
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::try_parse_from(["coulis", "resolve", "styles.json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(matches!(cli.command, Commands::Resolve { document } if document == PathBuf::from("styles.json")));
    }

    #[test]
    fn test_parse_extract_json() {
        let cli = Cli::try_parse_from(["coulis", "extract", "styles.json", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Extract { .. }));
    }

    #[test]
    fn test_parse_hash() {
        let cli = Cli::try_parse_from(["coulis", "--quiet", "hash", "color:red;"]).unwrap();
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Hash { key } if key == "color:red;"));
    }

    #[test]
    fn test_missing_command() {
        assert!(Cli::try_parse_from(["coulis"]).is_err());
    }
}
