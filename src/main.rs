//! algokit command-line front end
//!
//! Thin wrappers that read arguments (and config defaults), call into the
//! library, and print the results.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
