//! Appraisals, valuations and reasoned opinions (Art. 21, Riquadro 3).

use rust_decimal::Decimal;

use super::{SchedulePart, range_amount};
use crate::models::{CalculationInput, TierRow};
use crate::numeric::{format_eur, parse_field, tier_span};

/// Computes the valuation tier rows.
pub fn compute(input: &CalculationInput) -> SchedulePart {
    let base = parse_field(input.primary_value.as_ref()).unwrap_or(Decimal::ZERO);

    let b1 = Decimal::from(1_000_000);
    let b2 = Decimal::from(3_000_000);
    let s1 = tier_span(base, Decimal::ZERO, Some(b1));
    let s2 = tier_span(base, b1, Some(b2));
    let s3 = tier_span(base, b2, None);

    let min_1 = s1 * Decimal::new(8, 3);
    let max_1 = s1 * Decimal::new(1, 2);
    let min_2 = s2 * Decimal::new(5, 3);
    let max_2 = s2 * Decimal::new(7, 3);
    let min_3 = s3 * Decimal::new(25, 5);
    let max_3 = s3 * Decimal::new(5, 4);

    let total_min = min_1 + min_2 + min_3;
    let total_max = max_1 + max_2 + max_3;

    let tier_rows = vec![
        TierRow::new(
            "Fascia 1",
            format!(
                "Fino a 1.000.000 € | Quota: {} | Aliquota: 0,80% - 1,00%",
                format_eur(s1)
            ),
            range_amount(min_1, max_1),
        ),
        TierRow::new(
            "Fascia 2",
            format!(
                "Da 1.000.000 a 3.000.000 € | Quota: {} | Aliquota: 0,50% - 0,70%",
                format_eur(s2)
            ),
            range_amount(min_2, max_2),
        ),
        TierRow::new(
            "Fascia 3",
            format!(
                "Oltre 3.000.000 € | Quota: {} | Aliquota: 0,025% - 0,050%",
                format_eur(s3)
            ),
            range_amount(min_3, max_3),
        ),
        TierRow::new("Totale", "Somma fasce", range_amount(total_min, total_max)),
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

    fn input(value: f64) -> CalculationInput {
        CalculationInput {
            primary_value: Some(RawValue::Number(value)),
            ..CalculationInput::default()
        }
    }

    /// VAL-001: value spanning all three tiers
    #[test]
    fn test_value_spanning_all_tiers() {
        let part = compute(&input(4_000_000.0));
        assert_eq!(part.tier_rows.len(), 4);
        assert_eq!(part.tier_rows[0].amount, "8.000,00 € / 10.000,00 €");
        assert_eq!(part.tier_rows[1].amount, "10.000,00 € / 14.000,00 €");
        assert_eq!(part.tier_rows[2].amount, "250,00 € / 500,00 €");
        assert_eq!(part.tier_rows[3].amount, "18.250,00 € / 24.500,00 €");
    }

    /// VAL-002: small value stays in the first tier
    #[test]
    fn test_small_value_first_tier_only() {
        let part = compute(&input(500_000.0));
        assert_eq!(part.tier_rows[0].amount, "4.000,00 € / 5.000,00 €");
        assert_eq!(part.tier_rows[1].amount, "0,00 € / 0,00 €");
        assert_eq!(part.tier_rows[3].amount, "4.000,00 € / 5.000,00 €");
    }
}
