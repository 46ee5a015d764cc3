//! Cipher command implementation

use anyhow::Result;
use clap::Args;

use algokit::{caesar_cipher, CipherMode, Config};

#[derive(Args)]
pub struct CipherArgs {
    /// Text to transform
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Number of places to shift each letter [default: 3]
    #[arg(short, long, allow_negative_numbers = true)]
    pub shift: Option<i64>,

    /// Whether to encode or decode [default: encode]
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<CipherMode>,
}

pub fn run(args: CipherArgs, config: &Config) -> Result<()> {
    let shift = args.shift.unwrap_or(config.cipher.shift);
    let mode = args.mode.unwrap_or(config.cipher.mode);
    tracing::debug!(shift, %mode, chars = args.text.chars().count(), "running cipher");

    println!("{}", caesar_cipher(&args.text, shift, mode));
    Ok(())
}
