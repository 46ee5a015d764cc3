//! Indian-style digit grouping
//!
//! The last three digits of the integer part form one group and everything to
//! their left is grouped in pairs: `12345678` becomes `1,23,45,678`.

use crate::domain::{Amount, DEFAULT_DECIMAL_PLACES};

pub fn indian_currency_format(amount: Amount) -> String {
    indian_currency_format_with_places(amount, DEFAULT_DECIMAL_PLACES)
}

/// Format `amount` with Indian digit grouping.
///
/// Integers print without a fractional part. Decimals are rounded to
/// `places` digits after the point. The sign stays outside the grouping.
pub fn indian_currency_format_with_places(amount: Amount, places: usize) -> String {
    let rendered = match amount {
        Amount::Integer(value) => value.to_string(),
        Amount::Decimal(value) if value.is_finite() => format!("{value:.places$}"),
        Amount::Decimal(value) => return value.to_string(),
    };

    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (integer_part, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(rendered.len() + integer_part.len() / 2);
    out.push_str(sign);
    out.push_str(&group_digits(integer_part));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (rest, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::with_capacity(rest.len() / 2 + 2);
    let mut end = rest.len();
    while end > 2 {
        groups.push(&rest[end - 2..end]);
        end -= 2;
    }
    groups.push(&rest[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(value: i64) -> Amount {
        Amount::Integer(value)
    }

    fn dec(value: f64) -> Amount {
        Amount::Decimal(value)
    }

    #[test]
    fn formats_fractional_amount() {
        assert_eq!(indian_currency_format(dec(123456.7891)), "1,23,456.7891");
    }

    #[test]
    fn short_integers_are_untouched() {
        assert_eq!(indian_currency_format(int(100)), "100");
        assert_eq!(indian_currency_format(int(0)), "0");
        assert_eq!(indian_currency_format(int(999)), "999");
    }

    #[test]
    fn groups_in_pairs_after_last_three() {
        assert_eq!(indian_currency_format(int(1000)), "1,000");
        assert_eq!(indian_currency_format(int(12345)), "12,345");
        assert_eq!(indian_currency_format(int(1234567)), "12,34,567");
        assert_eq!(indian_currency_format(int(12345678)), "1,23,45,678");
    }

    #[test]
    fn decimals_are_padded_to_four_places() {
        assert_eq!(indian_currency_format(dec(100.0)), "100.0000");
        assert_eq!(indian_currency_format(dec(1234.5)), "1,234.5000");
    }

    #[test]
    fn sign_is_kept_outside_grouping() {
        assert_eq!(indian_currency_format(int(-12345)), "-12,345");
        assert_eq!(indian_currency_format(dec(-123456.5)), "-1,23,456.5000");
    }

    #[test]
    fn custom_precision() {
        assert_eq!(indian_currency_format_with_places(dec(1234567.891), 2), "12,34,567.89");
        assert_eq!(indian_currency_format_with_places(dec(1234567.4), 0), "12,34,567");
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert_eq!(indian_currency_format(dec(f64::INFINITY)), "inf");
        assert_eq!(indian_currency_format(dec(f64::NAN)), "NaN");
    }

    #[test]
    fn extreme_integers() {
        assert_eq!(indian_currency_format(int(i64::MIN)), "-92,23,37,20,36,85,47,75,808");
    }
}
