//! algokit: small, self-contained algorithms
//!
//! - [`merge`]: combine two lists of labeled spans, folding items that mostly
//!   overlap the previously kept span into it
//! - [`cipher`]: Caesar shift over ASCII letters
//! - [`currency`]: Indian-style digit grouping (`1,23,45,678`)
//! - [`loss`]: brute-force search for the cheapest (or worst) falling sale

pub mod cipher;
pub mod config;
pub mod currency;
pub mod domain;
pub mod error;
pub mod loss;
pub mod merge;

pub use cipher::caesar_cipher;
pub use currency::{indian_currency_format, indian_currency_format_with_places};
pub use domain::{Amount, CipherMode, Config, IntervalItem, LossWindow, Span};
pub use error::AlgoError;
pub use loss::{maximize_loss, minimize_loss};
pub use merge::{combine_lists, combine_lists_with_ratio};
