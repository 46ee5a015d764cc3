//! Merge predicate

use crate::domain::Span;

/// Whether `current` overlaps `kept` by at least `ratio` of its own length.
///
/// The rule is asymmetric: only the length of `current` matters. A
/// zero-length `current` always qualifies.
pub fn meets_threshold(kept: &Span, current: &Span, ratio: f64) -> bool {
    let overlap = kept.overlap(current);
    overlap as f64 >= current.len() as f64 * ratio
}

#[cfg(test)]
mod tests {
    use super::meets_threshold;
    use crate::domain::Span;

    fn span(left: i64, right: i64) -> Span {
        Span::new(left, right).expect("valid span")
    }

    #[test]
    fn exactly_half_qualifies() {
        assert!(meets_threshold(&span(0, 5), &span(3, 7), 0.5));
    }

    #[test]
    fn odd_length_needs_rounded_up_overlap() {
        // overlap 2 of 5 is below 2.5
        assert!(!meets_threshold(&span(0, 5), &span(3, 8), 0.5));
        assert!(meets_threshold(&span(0, 6), &span(3, 8), 0.5));
    }

    #[test]
    fn only_current_length_matters() {
        // A large kept span does not protect a tiny overlap with a large current span.
        assert!(!meets_threshold(&span(0, 100), &span(99, 110), 0.5));
        assert!(meets_threshold(&span(99, 110), &span(100, 101), 0.5));
    }

    #[test]
    fn empty_current_always_qualifies() {
        assert!(meets_threshold(&span(0, 1), &span(40, 40), 0.5));
        assert!(meets_threshold(&span(0, 1), &span(40, 40), 1.0));
    }
}
