use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use docdist::config::{Config, OutputFormat};
use docdist::output;
use docdist::pipeline::compare;
use docdist::text::tokenizer::TokenizerKind;

/// docdist: distance between two text documents.
///
/// Each document becomes a word-frequency vector; the distance is the angle
/// between the two vectors in radians (0 = same distribution, pi/2 = no
/// words in common).
#[derive(Parser)]
#[command(name = "docdist", version, about)]
struct Cli {
    /// First document
    first: PathBuf,

    /// Second document
    second: PathBuf,

    /// Tokenizer policy: alnum (split on non-alphanumerics) or whitespace
    #[arg(long, value_parser = parse_tokenizer)]
    tokenizer: Option<TokenizerKind>,

    /// Decimal places for the angle (default: 6)
    #[arg(long)]
    precision: Option<usize>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Also list each document's N most frequent words
    #[arg(long, default_value = "0")]
    top: usize,
}

fn parse_tokenizer(value: &str) -> Result<TokenizerKind, String> {
    value.parse().map_err(|e: docdist::DistanceError| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("docdist=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(tokenizer) = cli.tokenizer {
        config.tokenizer = tokenizer;
    }
    if let Some(precision) = cli.precision {
        config.set_precision(precision)?;
    }
    if cli.json {
        config.format = OutputFormat::Json;
    }
    debug!(?config, "Configuration resolved");

    let comparison = compare::run(&cli.first, &cli.second, config.tokenizer)
        .await
        .context("Failed to compare documents")?;

    match config.format {
        OutputFormat::Text => {
            output::terminal::display_comparison(&comparison, config.precision, cli.top);
        }
        OutputFormat::Json => {
            println!("{}", output::json::render(&comparison, config.precision, cli.top)?);
        }
    }

    Ok(())
}
