//! Corporate act consulting (Art. 25, Riquadri 7.1 e 7.2).

use rust_decimal::Decimal;

use super::{SchedulePart, range_amount};
use crate::models::{CalculationInput, TierRow};
use crate::numeric::{format_eur, parse_field, tier_span};

/// Computes the incorporation/statute-change tier rows (comma 1).
pub fn compute_acts(input: &CalculationInput) -> SchedulePart {
    let base = parse_field(input.primary_value.as_ref()).unwrap_or(Decimal::ZERO);

    let b1 = Decimal::from(1_000_000);
    let b2 = Decimal::from(15_000_000);
    let s1 = tier_span(base, Decimal::ZERO, Some(b1));
    let s2 = tier_span(base, b1, Some(b2));
    let s3 = tier_span(base, b2, None);

    let min_1 = s1 * Decimal::new(75, 4);
    let max_1 = s1 * Decimal::new(15, 3);
    let min_2 = s2 * Decimal::new(5, 3);
    let max_2 = s2 * Decimal::new(75, 4);
    let min_3 = s3 * Decimal::new(25, 4);
    let max_3 = s3 * Decimal::new(5, 3);

    let total_min = min_1 + min_2 + min_3;
    let total_max = max_1 + max_2 + max_3;

    let tier_rows = vec![
        TierRow::new(
            "Fascia 1",
            format!(
                "Fino a 1.000.000 € | Quota: {} | Aliquota: 0,75% - 1,50%",
                format_eur(s1)
            ),
            range_amount(min_1, max_1),
        ),
        TierRow::new(
            "Fascia 2",
            format!(
                "Da 1.000.000 a 15.000.000 € | Quota: {} | Aliquota: 0,50% - 0,75%",
                format_eur(s2)
            ),
            range_amount(min_2, max_2),
        ),
        TierRow::new(
            "Fascia 3",
            format!(
                "Oltre 15.000.000 € | Quota: {} | Aliquota: 0,25% - 0,50%",
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

/// Computes the merger/extraordinary-operation tier rows (comma 2).
pub fn compute_extraordinary(input: &CalculationInput) -> SchedulePart {
    let base = parse_field(input.primary_value.as_ref()).unwrap_or(Decimal::ZERO);

    let b1 = Decimal::from(4_000_000);
    let s1 = tier_span(base, Decimal::ZERO, Some(b1));
    let s2 = tier_span(base, b1, None);

    let min_1 = s1 * Decimal::new(1, 2);
    let max_1 = s1 * Decimal::new(15, 3);
    let min_2 = s2 * Decimal::new(5, 3);
    let max_2 = s2 * Decimal::new(1, 2);

    let total_min = min_1 + min_2;
    let total_max = max_1 + max_2;

    let tier_rows = vec![
        TierRow::new(
            "Fascia 1",
            format!(
                "Fino a 4.000.000 € | Quota: {} | Aliquota: 1,00% - 1,50%",
                format_eur(s1)
            ),
            range_amount(min_1, max_1),
        ),
        TierRow::new(
            "Fascia 2",
            format!(
                "Oltre 4.000.000 € | Quota: {} | Aliquota: 0,50% - 1,00%",
                format_eur(s2)
            ),
            range_amount(min_2, max_2),
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

    /// CRP-001: statute-change tiers
    #[test]
    fn test_acts_tiers() {
        let part = compute_acts(&input(2_000_000.0));
        assert_eq!(part.tier_rows[0].amount, "7.500,00 € / 15.000,00 €");
        assert_eq!(part.tier_rows[1].amount, "5.000,00 € / 7.500,00 €");
        assert_eq!(part.tier_rows[2].amount, "0,00 € / 0,00 €");
        assert_eq!(part.tier_rows[3].amount, "12.500,00 € / 22.500,00 €");
    }

    /// CRP-002: extraordinary operation tiers
    #[test]
    fn test_extraordinary_tiers() {
        let part = compute_extraordinary(&input(6_000_000.0));
        assert_eq!(part.tier_rows[0].amount, "40.000,00 € / 60.000,00 €");
        assert_eq!(part.tier_rows[1].amount, "10.000,00 € / 20.000,00 €");
        assert_eq!(part.tier_rows[2].amount, "50.000,00 € / 80.000,00 €");
    }
}
