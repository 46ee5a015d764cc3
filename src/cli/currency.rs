//! Currency command implementation

use anyhow::Result;
use clap::Args;

use algokit::{indian_currency_format_with_places, Amount, Config};

#[derive(Args)]
pub struct CurrencyArgs {
    /// Number to format; include a decimal point for a fractional part
    #[arg(value_name = "AMOUNT", allow_hyphen_values = true)]
    pub amount: Amount,

    /// Decimal places printed for fractional amounts [default: 4]
    #[arg(short, long, value_name = "N")]
    pub places: Option<usize>,
}

pub fn run(args: CurrencyArgs, config: &Config) -> Result<()> {
    let places = args.places.unwrap_or(config.currency.decimal_places);
    println!("{}", indian_currency_format_with_places(args.amount, places));
    Ok(())
}
