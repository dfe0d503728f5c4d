//! tt-fuzzy: fuzzy matching CLI for product and category names.
//!
//! Exit status: 0 on success (or a match), 1 when `match` finds no match,
//! 2 on errors.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod config;
mod output;

use config::Config;
use output::Status;

#[derive(Parser)]
#[command(name = "tt-fuzzy")]
#[command(author, version, about = "Typo-tolerant matching for product and category names")]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Maximum fuzzy score that counts as a match
    #[arg(
        short,
        long,
        global = true,
        env = "TECHTREND_FUZZY_THRESHOLD",
        allow_negative_numbers = true
    )]
    threshold: Option<f64>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Raw Levenshtein edit distance (no normalization)
    Distance {
        source: String,
        target: String,
    },
    /// Normalized fuzzy score (0 = identical, 1 = nothing in common)
    Score {
        source: String,
        target: String,
    },
    /// Decide whether two strings look alike
    Match {
        source: String,
        target: String,
    },
    /// Print candidate lines that match a query
    Filter {
        /// Search query
        query: String,
        /// File with one candidate per line (reads stdin if omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Maximum number of matches to print
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Relevance tier of a query against a text
    Relevance {
        text: String,
        query: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tt_fuzzy=debug,techtrend_fuzzy=debug".into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            Status::error(&format!("{:#}", e));
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?;
    let settings = commands::Settings::resolve(&config, cli.threshold, cli.json)?;

    match cli.command {
        Commands::Distance { source, target } => commands::distance(&settings, &source, &target),
        Commands::Score { source, target } => commands::score(&settings, &source, &target),
        Commands::Match { source, target } => commands::matches(&settings, &source, &target),
        Commands::Filter { query, file, limit } => {
            commands::filter(&settings, &query, file.as_deref(), limit)
        }
        Commands::Relevance { text, query } => commands::relevance(&settings, &text, &query),
    }
}
