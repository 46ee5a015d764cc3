//! Brute-force buy/sell loss search
//!
//! Both searches look at every pair of years `i < j` where the price fell
//! (`prices[j] < prices[i]`). This is quadratic and only meant for short
//! price histories.

use crate::domain::LossWindow;
use crate::error::AlgoError;
use tracing::debug;

/// Find the sale that loses the least money.
///
/// Returns `None` when prices never fall. When several pairs share the same
/// loss, the earliest buy year (then the earliest sell year) wins.
pub fn minimize_loss(prices: &[f64]) -> Option<LossWindow> {
    search(prices, |candidate, best| candidate < best)
}

/// Find the sale that loses the most money. Ties resolve like
/// [`minimize_loss`].
pub fn maximize_loss(prices: &[f64]) -> Option<LossWindow> {
    search(prices, |candidate, best| candidate > best)
}

fn search(prices: &[f64], better: impl Fn(f64, f64) -> bool) -> Option<LossWindow> {
    let mut best: Option<LossWindow> = None;
    let mut pairs_checked = 0usize;

    for (i, &buy) in prices.iter().enumerate() {
        for (j, &sell) in prices.iter().enumerate().skip(i + 1) {
            pairs_checked += 1;
            if sell >= buy {
                continue;
            }
            let loss = buy - sell;
            if best.map_or(true, |current| better(loss, current.loss)) {
                best = Some(LossWindow { buy_year: i + 1, sell_year: j + 1, loss });
            }
        }
    }

    debug!(prices = prices.len(), pairs_checked, found = best.is_some(), "loss search finished");
    best
}

/// Parse a comma-separated price list such as `"20, 15, 7"`.
///
/// Empty segments are skipped; anything that is not a finite number is an
/// error.
pub fn parse_prices(input: &str) -> Result<Vec<f64>, AlgoError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(AlgoError::InvalidPrice(part.to_string())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PRICES: [f64; 5] = [20.0, 15.0, 7.0, 2.0, 13.0];

    #[test]
    fn smallest_loss_in_sample() {
        let window = minimize_loss(&PRICES).expect("prices fall");
        assert_eq!(window, LossWindow { buy_year: 2, sell_year: 5, loss: 2.0 });
    }

    #[test]
    fn largest_loss_in_sample() {
        let window = maximize_loss(&PRICES).expect("prices fall");
        assert_eq!(window, LossWindow { buy_year: 1, sell_year: 4, loss: 18.0 });
    }

    #[test]
    fn rising_prices_have_no_loss() {
        assert_eq!(minimize_loss(&[1.0, 2.0, 3.0]), None);
        assert_eq!(maximize_loss(&[5.0, 5.0]), None);
        assert_eq!(minimize_loss(&[]), None);
        assert_eq!(minimize_loss(&[4.0]), None);
    }

    #[test]
    fn earliest_pair_wins_ties() {
        let window = minimize_loss(&[10.0, 9.0, 10.0, 9.0]).expect("prices fall");
        assert_eq!((window.buy_year, window.sell_year), (1, 2));
    }

    #[test]
    fn parses_price_list() {
        assert_eq!(parse_prices("20, 15,7 ,, 2.5").expect("prices"), vec![20.0, 15.0, 7.0, 2.5]);
        assert_eq!(parse_prices("").expect("prices"), Vec::<f64>::new());
        assert_eq!(parse_prices("1, x"), Err(AlgoError::InvalidPrice("x".to_string())));
        assert!(parse_prices("inf").is_err());
    }

    /// Collects every falling pair first, then picks with an explicit ordering.
    fn reference(prices: &[i32], pick_max: bool) -> Option<(usize, usize, i32)> {
        let mut pairs = Vec::new();
        for i in 0..prices.len() {
            for j in i + 1..prices.len() {
                if prices[j] < prices[i] {
                    pairs.push((i + 1, j + 1, prices[i] - prices[j]));
                }
            }
        }
        pairs.into_iter().min_by(|a, b| {
            let by_loss = if pick_max { b.2.cmp(&a.2) } else { a.2.cmp(&b.2) };
            by_loss.then(a.0.cmp(&b.0)).then(a.1.cmp(&b.1))
        })
    }

    fn as_tuple(window: Option<LossWindow>) -> Option<(usize, usize, i32)> {
        window.map(|w| (w.buy_year, w.sell_year, w.loss as i32))
    }

    proptest! {
        #[test]
        fn minimize_matches_reference(prices in prop::collection::vec(-100i32..100, 0..25)) {
            let floats: Vec<f64> = prices.iter().map(|&p| f64::from(p)).collect();
            prop_assert_eq!(as_tuple(minimize_loss(&floats)), reference(&prices, false));
        }

        #[test]
        fn maximize_matches_reference(prices in prop::collection::vec(-100i32..100, 0..25)) {
            let floats: Vec<f64> = prices.iter().map(|&p| f64::from(p)).collect();
            prop_assert_eq!(as_tuple(maximize_loss(&floats)), reference(&prices, true));
        }
    }
}
