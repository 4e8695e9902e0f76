//! Text formatting for figures embedded in risks, opportunities and the takeaway.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Whole-dollar US currency with thousands separators, e.g. `-$1,234,568`.
///
/// Rounds half away from zero.
pub fn usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let digits = rounded.abs().trunc().to_string();
    format!("{sign}${}", group_thousands(&digits))
}

/// [`usd`] for plain floats. Values a `Decimal` cannot hold format as `$0`.
pub fn usd_f64(amount: f64) -> String {
    usd(Decimal::from_f64(amount).unwrap_or(Decimal::ZERO))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One decimal place with a percent sign.
pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// `"1 risk"`, `"3 risks"`.
pub fn count(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_groups_and_rounds() {
        assert_eq!(usd(Decimal::ZERO), "$0");
        assert_eq!(usd(Decimal::new(999, 0)), "$999");
        assert_eq!(usd(Decimal::new(1000, 0)), "$1,000");
        assert_eq!(usd(Decimal::new(91_200, 0)), "$91,200");
        assert_eq!(usd(Decimal::new(12_345_675, 1)), "$1,234,568");
        assert_eq!(usd(Decimal::new(-60_000, 0)), "-$60,000");
        assert_eq!(usd(Decimal::new(-4, 1)), "$0");
    }

    #[test]
    fn usd_f64_matches_decimal_path() {
        assert_eq!(usd_f64(84_000.0), "$84,000");
        assert_eq!(usd_f64(f64::NAN), "$0");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(percent(8.181818), "8.2%");
        assert_eq!(percent(-1.0), "-1.0%");
    }

    #[test]
    fn count_pluralizes() {
        assert_eq!(count(1, "risk", "risks"), "1 risk");
        assert_eq!(count(0, "scenario", "scenarios"), "0 scenarios");
        assert_eq!(count(2, "opportunity", "opportunities"), "2 opportunities");
    }
}
