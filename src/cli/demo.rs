//! Demo command implementation

use anyhow::Result;

use algokit::{
    caesar_cipher, combine_lists, indian_currency_format, minimize_loss, Amount, CipherMode,
    IntervalItem, Span,
};

pub fn run() -> Result<()> {
    let encoded = caesar_cipher("Hello, World!", 3, CipherMode::Encode);
    let decoded = caesar_cipher(&encoded, 3, CipherMode::Decode);
    println!("Encoded: {}", encoded);
    println!("Decoded: {}", decoded);

    println!("{}", indian_currency_format(Amount::Decimal(123456.7891)));

    let first = vec![IntervalItem::new(Span::new(0, 5)?, vec![1, 2])];
    let second = vec![IntervalItem::new(Span::new(3, 7)?, vec![3, 4])];
    println!("{}", serde_json::to_string(&combine_lists(first, second))?);

    let prices = [20.0, 15.0, 7.0, 2.0, 13.0];
    match minimize_loss(&prices) {
        Some(window) => println!("{}", window),
        None => println!("No falling price pair found"),
    }

    Ok(())
}
