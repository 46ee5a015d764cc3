//! Command-line interface for algokit
//!
//! One subcommand per algorithm, plus `demo` which replays the canonical
//! examples.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use algokit::config::load_config;

mod cipher;
mod currency;
mod demo;
mod loss;
mod merge;

/// Interval merging, Caesar cipher, Indian digit grouping and minimum-loss search
#[derive(Parser)]
#[command(name = "algokit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file with flag defaults (default: algokit.toml or algokit.yml in
    /// the working directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode or decode text with a Caesar shift
    Cipher(cipher::CipherArgs),

    /// Format a number with Indian digit grouping
    Currency(currency::CurrencyArgs),

    /// Merge two JSON lists of labeled intervals
    Merge(merge::MergeArgs),

    /// Find the cheapest losing sale in a price history
    Loss(loss::LossArgs),

    /// Run every algorithm on its canonical example
    Demo,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // --verbose forces DEBUG; otherwise RUST_LOG applies, falling back to WARN.
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.as_str())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::WARN.as_str()))
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd, cli.config.as_deref())?;

    match cli.command {
        Commands::Cipher(args) => cipher::run(args, &config),
        Commands::Currency(args) => currency::run(args, &config),
        Commands::Merge(args) => merge::run(args, &config),
        Commands::Loss(args) => loss::run(args),
        Commands::Demo => demo::run(),
    }
}
