//! Loss command implementation

use anyhow::Result;
use clap::Args;

use algokit::loss::{maximize_loss, minimize_loss, parse_prices};

#[derive(Args)]
pub struct LossArgs {
    /// Prices in chronological order, comma-separated (e.g. "20,15,7,2,13")
    #[arg(value_name = "PRICES", allow_hyphen_values = true)]
    pub prices: String,

    /// Report the largest loss instead of the smallest
    #[arg(long)]
    pub worst: bool,

    /// Print the result as JSON (`null` when prices never fall)
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: LossArgs) -> Result<()> {
    let prices = parse_prices(&args.prices)?;
    let window = if args.worst { maximize_loss(&prices) } else { minimize_loss(&prices) };

    if args.json {
        println!("{}", serde_json::to_string(&window)?);
        return Ok(());
    }

    match window {
        Some(window) => println!("{}", window),
        None => println!("No falling price pair found"),
    }
    Ok(())
}
