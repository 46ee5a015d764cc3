//! Library error type

use thiserror::Error;

/// Precondition failures raised while building inputs for the algorithms.
///
/// The algorithms themselves never fail; these errors come from constructing
/// a [`Span`](crate::domain::Span), parsing text input, or validating config.
#[derive(Debug, Error, PartialEq)]
pub enum AlgoError {
    #[error("invalid span: left {left} is greater than right {right}")]
    InvalidSpan { left: i64, right: i64 },

    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("invalid merge ratio {0}: expected a value between 0 and 1")]
    InvalidRatio(f64),

    #[error("invalid price: {0:?}")]
    InvalidPrice(String),

    #[error("invalid cipher mode {0:?}: expected 'encode' or 'decode'")]
    InvalidMode(String),
}
