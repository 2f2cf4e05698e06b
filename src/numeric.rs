//! Numeric and currency utilities.
//!
//! This module provides tolerant parsing of mixed number/string input,
//! Italian-convention currency formatting, and the tier span function used
//! by every proportional schedule. Parsing never fails loudly: malformed
//! input resolves to `None`, which tier math treats as zero and display
//! logic renders as `-`.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::models::RawValue;

/// Parses a raw wire value into a [`Decimal`].
///
/// Native numbers pass through unchanged. Strings are stripped of any
/// character outside digits, comma, dot, and minus; `.` is removed as a
/// thousands separator and `,` becomes the decimal point.
///
/// Returns `None` on empty or unparseable input, never an error.
///
/// # Examples
///
/// ```
/// use compenso_engine::models::RawValue;
/// use compenso_engine::numeric::parse_number;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let parsed = parse_number(&RawValue::Text("1.234,56".to_string()));
/// assert_eq!(parsed, Some(Decimal::from_str("1234.56").unwrap()));
///
/// assert_eq!(parse_number(&RawValue::Text("abc".to_string())), None);
/// assert_eq!(
///     parse_number(&RawValue::Number(1500.0)),
///     Some(Decimal::from(1500))
/// );
/// ```
pub fn parse_number(value: &RawValue) -> Option<Decimal> {
    match value {
        RawValue::Number(n) => Decimal::from_f64(*n),
        RawValue::Text(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
                .collect();
            let normalized = cleaned.replace('.', "").replace(',', ".");
            if normalized.is_empty() {
                return None;
            }
            Decimal::from_str(&normalized).ok()
        }
    }
}

/// Parses an optional raw value, treating absence as unparseable.
pub fn parse_field(value: Option<&RawValue>) -> Option<Decimal> {
    value.and_then(parse_number)
}

/// Formats a decimal amount using the Italian monetary convention.
///
/// Dot as thousands separator, comma as decimal separator, two decimal
/// places, trailing euro symbol.
///
/// # Examples
///
/// ```
/// use compenso_engine::numeric::format_eur;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_eur(Decimal::from_str("1234.5").unwrap()), "1.234,50 €");
/// assert_eq!(format_eur(Decimal::from_str("-300").unwrap()), "-300,00 €");
/// ```
pub fn format_eur(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let fixed = format!("{:.2}", rounded.abs());
    let (units, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, c) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{cents} €")
}

/// Formats a raw wire value as currency.
///
/// Numeric input is formatted via [`format_eur`]; string input passes
/// through unchanged, so the function is idempotent on already-formatted
/// text.
pub fn format_currency(value: &RawValue) -> String {
    match value {
        RawValue::Number(_) => parse_number(value).map(format_eur).unwrap_or_default(),
        RawValue::Text(s) => s.clone(),
    }
}

/// Formats a rate (e.g. `0.0075`) as a two-decimal percentage label.
pub fn format_percent(rate: Decimal) -> String {
    format!("{:.2}%", rate * Decimal::ONE_HUNDRED)
}

/// Returns the portion of `value` that falls within a tier's bounds.
///
/// Returns zero when `value ≤ lower`. For bounded tiers the upper bound
/// caps the span; the unbounded terminal tier (`upper == None`) spans up to
/// `value` itself. The result is never negative.
///
/// # Examples
///
/// ```
/// use compenso_engine::numeric::tier_span;
/// use rust_decimal::Decimal;
///
/// let value = Decimal::from(30_000);
/// assert_eq!(
///     tier_span(value, Decimal::ZERO, Some(Decimal::from(10_000))),
///     Decimal::from(10_000)
/// );
/// assert_eq!(
///     tier_span(value, Decimal::from(10_000), Some(Decimal::from(50_000))),
///     Decimal::from(20_000)
/// );
/// assert_eq!(tier_span(value, Decimal::from(50_000), None), Decimal::ZERO);
/// ```
pub fn tier_span(value: Decimal, lower: Decimal, upper: Option<Decimal>) -> Decimal {
    let capped = match upper {
        Some(bound) => value.min(bound),
        None => value,
    };
    (capped - lower).max(Decimal::ZERO)
}
