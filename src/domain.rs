//! Shared data types

use crate::error::AlgoError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default overlap ratio for the interval merge rule.
pub const DEFAULT_MIN_OVERLAP_RATIO: f64 = 0.5;

/// Default number of decimal places printed for fractional amounts.
pub const DEFAULT_DECIMAL_PLACES: usize = 4;

/// Default Caesar shift used by the CLI when none is given.
pub const DEFAULT_SHIFT: i64 = 3;

static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+(\.\d*)?$").expect("valid amount regex"));

/// Half-open integer range `[left, right)`.
///
/// `left <= right` is enforced at construction, including when a span is
/// deserialized from a `[left, right]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[i64; 2]", into = "[i64; 2]")]
pub struct Span {
    left: i64,
    right: i64,
}

impl Span {
    pub fn new(left: i64, right: i64) -> Result<Self, AlgoError> {
        if left > right {
            return Err(AlgoError::InvalidSpan { left, right });
        }
        Ok(Self { left, right })
    }

    pub fn left(&self) -> i64 {
        self.left
    }

    pub fn right(&self) -> i64 {
        self.right
    }

    /// Width of the span. Unsigned so that `[i64::MIN, i64::MAX)` fits.
    pub fn len(&self) -> u64 {
        self.right.abs_diff(self.left)
    }

    pub fn is_empty(&self) -> bool {
        self.left == self.right
    }

    /// Length of the intersection with `other`, zero when disjoint.
    pub fn overlap(&self, other: &Span) -> u64 {
        let start = self.left.max(other.left);
        let end = self.right.min(other.right);
        if end > start {
            end.abs_diff(start)
        } else {
            0
        }
    }

    /// Move the right edge out to `right` if that widens the span.
    pub(crate) fn widen_to(&mut self, right: i64) {
        self.right = self.right.max(right);
    }
}

impl TryFrom<[i64; 2]> for Span {
    type Error = AlgoError;

    fn try_from([left, right]: [i64; 2]) -> Result<Self, Self::Error> {
        Span::new(left, right)
    }
}

impl From<Span> for [i64; 2] {
    fn from(span: Span) -> Self {
        [span.left, span.right]
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.left, self.right)
    }
}

/// A labeled span carrying an ordered list of payload values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalItem<T> {
    pub positions: Span,
    pub values: Vec<T>,
}

impl<T> IntervalItem<T> {
    pub fn new(positions: Span, values: Vec<T>) -> Self {
        Self { positions, values }
    }

    /// Fold `other` into `self`: values are appended after ours and the right
    /// edge is widened. The left edge is left alone.
    pub(crate) fn absorb(&mut self, other: IntervalItem<T>) {
        self.values.extend(other.values);
        self.positions.widen_to(other.positions.right());
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherMode {
    #[default]
    Encode,
    Decode,
}

impl FromStr for CipherMode {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encode" => Ok(CipherMode::Encode),
            "decode" => Ok(CipherMode::Decode),
            _ => Err(AlgoError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherMode::Encode => f.write_str("encode"),
            CipherMode::Decode => f.write_str("decode"),
        }
    }
}

/// A number to be formatted with Indian digit grouping.
///
/// Whole numbers print without a fractional part; fractional numbers print
/// with a fixed number of decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    Integer(i64),
    Decimal(f64),
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount::Integer(value)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Decimal(value)
    }
}

impl FromStr for Amount {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !AMOUNT_PATTERN.is_match(trimmed) {
            return Err(AlgoError::InvalidAmount(s.to_string()));
        }
        if trimmed.contains('.') {
            trimmed
                .parse::<f64>()
                .map(Amount::Decimal)
                .map_err(|_| AlgoError::InvalidAmount(s.to_string()))
        } else {
            trimmed
                .parse::<i64>()
                .map(Amount::Integer)
                .map_err(|_| AlgoError::InvalidAmount(s.to_string()))
        }
    }
}

/// Buy/sell pair found by the loss search. Years are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LossWindow {
    pub buy_year: usize,
    pub sell_year: usize,
    pub loss: f64,
}

impl fmt::Display for LossWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Buy in year {}, Sell in year {}, Loss: {}", self.buy_year, self.sell_year, self.loss)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CipherConfig {
    pub shift: i64,
    pub mode: CipherMode,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self { shift: DEFAULT_SHIFT, mode: CipherMode::Encode }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurrencyConfig {
    pub decimal_places: usize,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self { decimal_places: DEFAULT_DECIMAL_PLACES }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MergeConfig {
    pub min_overlap_ratio: f64,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self { min_overlap_ratio: DEFAULT_MIN_OVERLAP_RATIO }
    }
}

/// CLI defaults loaded from `algokit.toml` / `algokit.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub cipher: CipherConfig,
    pub currency: CurrencyConfig,
    pub merge: MergeConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), AlgoError> {
        validate_ratio(self.merge.min_overlap_ratio)
    }
}

pub fn validate_ratio(ratio: f64) -> Result<(), AlgoError> {
    if (0.0..=1.0).contains(&ratio) {
        Ok(())
    } else {
        Err(AlgoError::InvalidRatio(ratio))
    }
}
