//! Interval merging with an overlap threshold
//!
//! Two lists of labeled spans are combined into one list sorted by left edge.
//! An item that overlaps the previously kept item by at least half of its own
//! length is folded into it: its values are appended and the kept span is
//! widened. Small fragments therefore collapse into established spans, while a
//! large span that only grazes its neighbour stays separate.

use crate::domain::{IntervalItem, DEFAULT_MIN_OVERLAP_RATIO};
use tracing::debug;

pub mod threshold;

pub use threshold::meets_threshold;

/// Merge two interval lists using the default half-length rule.
pub fn combine_lists<T>(
    first: Vec<IntervalItem<T>>,
    second: Vec<IntervalItem<T>>,
) -> Vec<IntervalItem<T>> {
    combine_lists_with_ratio(first, second, DEFAULT_MIN_OVERLAP_RATIO)
}

/// Merge two interval lists, folding an item into its predecessor when
/// `overlap >= len * min_overlap_ratio`.
///
/// Items are ordered by left edge; equal left edges put the wider span first,
/// and anything still tied keeps input order (`first` before `second`).
/// Each item is compared against the last item kept in the output, not
/// against its raw neighbour in sorted order.
pub fn combine_lists_with_ratio<T>(
    first: Vec<IntervalItem<T>>,
    second: Vec<IntervalItem<T>>,
    min_overlap_ratio: f64,
) -> Vec<IntervalItem<T>> {
    let mut combined = first;
    combined.extend(second);
    let input_len = combined.len();

    combined.sort_by(|a, b| {
        a.positions
            .left()
            .cmp(&b.positions.left())
            .then_with(|| b.positions.right().cmp(&a.positions.right()))
    });

    let mut result: Vec<IntervalItem<T>> = Vec::with_capacity(input_len);

    for item in combined {
        if let Some(last) = result.last_mut() {
            if meets_threshold(&last.positions, &item.positions, min_overlap_ratio) {
                last.absorb(item);
                continue;
            }
        }

        result.push(item);
    }

    debug!(
        input = input_len,
        output = result.len(),
        ratio = min_overlap_ratio,
        "combined interval lists"
    );

    result
}
