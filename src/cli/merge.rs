//! Merge command implementation

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use algokit::domain::validate_ratio;
use algokit::{combine_lists_with_ratio, Config, IntervalItem};

#[derive(Args)]
pub struct MergeArgs {
    /// JSON file with the first list of `{"positions": [l, r], "values": [..]}` items
    /// ("-" reads stdin)
    #[arg(value_name = "FIRST")]
    pub first: PathBuf,

    /// JSON file with the second list ("-" reads stdin)
    #[arg(value_name = "SECOND")]
    pub second: PathBuf,

    /// Fraction of an item's length that must overlap the kept item for it to
    /// be folded in [default: 0.5]
    #[arg(long, value_name = "RATIO")]
    pub min_overlap_ratio: Option<f64>,

    /// Print the merged list on a single line
    #[arg(long)]
    pub compact: bool,
}

pub fn run(args: MergeArgs, config: &Config) -> Result<()> {
    if is_stdin(&args.first) && is_stdin(&args.second) {
        anyhow::bail!("Only one of FIRST and SECOND can be read from stdin");
    }

    let ratio = args.min_overlap_ratio.unwrap_or(config.merge.min_overlap_ratio);
    validate_ratio(ratio)?;

    let first = read_items(&args.first)?;
    let second = read_items(&args.second)?;
    let merged = combine_lists_with_ratio(first, second, ratio);

    let rendered = if args.compact {
        serde_json::to_string(&merged)?
    } else {
        serde_json::to_string_pretty(&merged)?
    };
    println!("{}", rendered);
    Ok(())
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_items(path: &Path) -> Result<Vec<IntervalItem<Value>>> {
    let content = if is_stdin(path) {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("Failed reading stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed reading interval file: {}", path.display()))?
    };

    let items: Vec<IntervalItem<Value>> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid interval list: {}", path.display()))?;
    tracing::debug!("Read {} items from {}", items.len(), path.display());
    Ok(items)
}
