//! Assistance in insolvency procedures (Art. 27, Riquadro 9).
//!
//! Two tiers over the procedure value. The negative-outcome reduction is a
//! disclosure handled by the modifier engine, never applied to the numbers
//! here.

use rust_decimal::Decimal;

use super::{SchedulePart, range_amount};
use crate::models::{CalculationInput, TierRow};
use crate::numeric::{format_eur, parse_field, tier_span};

/// Computes the insolvency assistance tier rows.
pub fn compute(input: &CalculationInput) -> SchedulePart {
    let base = parse_field(input.primary_value.as_ref()).unwrap_or(Decimal::ZERO);

    let b1 = Decimal::from(1_000_000);
    let s1 = tier_span(base, Decimal::ZERO, Some(b1));
    let s2 = tier_span(base, b1, None);

    let tier_rows = vec![
        TierRow::new(
            "Fascia 1",
            format!(
                "Fino a 1.000.000 € | Quota: {} | Aliquota: 1,00% - 2,00%",
                format_eur(s1)
            ),
            range_amount(s1 * Decimal::new(1, 2), s1 * Decimal::new(2, 2)),
        ),
        TierRow::new(
            "Fascia 2",
            format!(
                "Oltre 1.000.000 € | Quota: {} | Aliquota: 0,70% - 0,90%",
                format_eur(s2)
            ),
            range_amount(s2 * Decimal::new(7, 3), s2 * Decimal::new(9, 3)),
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

    /// INS-001: value spanning both tiers
    #[test]
    fn test_two_tier_breakdown() {
        let input = CalculationInput {
            primary_value: Some(RawValue::Number(2_500_000.0)),
            ..CalculationInput::default()
        };
        let part = compute(&input);
        assert_eq!(part.tier_rows.len(), 2);
        assert_eq!(part.tier_rows[0].amount, "10.000,00 € / 20.000,00 €");
        assert_eq!(part.tier_rows[1].amount, "10.500,00 € / 13.500,00 €");
    }

    /// INS-002: negative outcome does not change the numbers
    #[test]
    fn test_negative_outcome_not_applied_numerically() {
        let plain = CalculationInput {
            primary_value: Some(RawValue::Number(500_000.0)),
            ..CalculationInput::default()
        };
        let flagged = CalculationInput {
            negative_outcome: true,
            ..plain.clone()
        };
        assert_eq!(compute(&plain), compute(&flagged));
    }
}
