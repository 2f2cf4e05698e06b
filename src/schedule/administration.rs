//! Administration and custody of businesses (Art. 19, Riquadro 1).
//!
//! Three contiguous tiers over the sum of the two base values:
//! up to 10.000 € at 3–4%, from 10.000 to 50.000 € at 2–3%, and the
//! unbounded remainder at 1–2%.

use rust_decimal::Decimal;

use super::{SchedulePart, range_amount};
use crate::models::{CalculationInput, TierRow};
use crate::numeric::{format_eur, parse_field, tier_span};

/// Computes the administration/custody tier rows.
pub fn compute(input: &CalculationInput) -> SchedulePart {
    let v1 = parse_field(input.primary_value.as_ref()).unwrap_or(Decimal::ZERO);
    let v2 = parse_field(input.secondary_value.as_ref()).unwrap_or(Decimal::ZERO);
    let base = v1 + v2;

    let b1 = Decimal::from(10_000);
    let b2 = Decimal::from(50_000);
    let s1 = tier_span(base, Decimal::ZERO, Some(b1));
    let s2 = tier_span(base, b1, Some(b2));
    let s3 = tier_span(base, b2, None);

    let tier_rows = vec![
        TierRow::new(
            "Fascia 1",
            format!(
                "Fino a 10.000 € | Quota: {} | Aliquota: 3,00% - 4,00%",
                format_eur(s1)
            ),
            range_amount(s1 * Decimal::new(3, 2), s1 * Decimal::new(4, 2)),
        ),
        TierRow::new(
            "Fascia 2",
            format!(
                "Da 10.000 a 50.000 € | Quota: {} | Aliquota: 2,00% - 3,00%",
                format_eur(s2)
            ),
            range_amount(s2 * Decimal::new(2, 2), s2 * Decimal::new(3, 2)),
        ),
        TierRow::new(
            "Fascia 3",
            format!(
                "Oltre 50.000 € | Quota: {} | Aliquota: 1,00% - 2,00%",
                format_eur(s3)
            ),
            range_amount(s3 * Decimal::new(1, 2), s3 * Decimal::new(2, 2)),
        ),
    ];

    SchedulePart {
        input_rows: Vec::new(),
        tier_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawValue;

    fn input(primary: f64) -> CalculationInput {
        CalculationInput {
            primary_value: Some(RawValue::Number(primary)),
            ..CalculationInput::default()
        }
    }

    /// ADM-001: value inside the second tier
    #[test]
    fn test_value_spanning_two_tiers() {
        let part = compute(&input(30_000.0));
        assert_eq!(part.tier_rows.len(), 3);
        assert_eq!(part.tier_rows[0].amount, "300,00 € / 400,00 €");
        assert_eq!(part.tier_rows[1].amount, "400,00 € / 600,00 €");
        assert_eq!(part.tier_rows[2].amount, "0,00 € / 0,00 €");
    }

    /// ADM-002: value in the unbounded tier
    #[test]
    fn test_value_in_terminal_tier() {
        let part = compute(&input(100_000.0));
        // 50.000 over the last boundary at 1-2%
        assert_eq!(part.tier_rows[2].amount, "500,00 € / 1.000,00 €");
        assert!(part.tier_rows[2].description.contains("Quota: 50.000,00 €"));
    }

    /// ADM-003: secondary value is added to the base
    #[test]
    fn test_secondary_value_summed() {
        let combined = CalculationInput {
            primary_value: Some(RawValue::Number(8_000.0)),
            secondary_value: Some(RawValue::Number(4_000.0)),
            ..CalculationInput::default()
        };
        let part = compute(&combined);
        // base 12.000: first tier full, 2.000 in the second
        assert_eq!(part.tier_rows[0].amount, "300,00 € / 400,00 €");
        assert_eq!(part.tier_rows[1].amount, "40,00 € / 60,00 €");
    }

    /// ADM-004: malformed input behaves as zero
    #[test]
    fn test_malformed_value_is_zero() {
        let bad = CalculationInput {
            primary_value: Some(RawValue::Text("abc".to_string())),
            ..CalculationInput::default()
        };
        let part = compute(&bad);
        assert_eq!(part.tier_rows[0].amount, "0,00 € / 0,00 €");
    }
}
