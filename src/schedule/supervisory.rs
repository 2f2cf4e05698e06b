//! Supervisory board (Art. 29, Riquadro 11).
//!
//! A fixed base fee covers the lowest band; three proportional tiers with
//! very small rates cover the middle bands; above the highest boundary each
//! started 100M step contributes a fixed fee range. Role multipliers and
//! the comma-2 reduction are disclosures handled by the modifier engine.

use rust_decimal::Decimal;

use super::{SchedulePart, range_amount};
use crate::models::{CalculationInput, TierRow};
use crate::numeric::{format_eur, parse_field, tier_span};

const STEP_SIZE: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);
const STEP_FEE_MIN: Decimal = Decimal::from_parts(7_500, 0, 0, false, 0);
const STEP_FEE_MAX: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Computes the supervisory board tier rows.
pub fn compute(input: &CalculationInput) -> SchedulePart {
    let v1 = parse_field(input.primary_value.as_ref());
    let v2 = parse_field(input.secondary_value.as_ref());
    let base = v1.unwrap_or(Decimal::ZERO) + v2.unwrap_or(Decimal::ZERO);

    let base_display = if v1.is_none() && v2.is_none() {
        "-".to_string()
    } else {
        format_eur(base)
    };
    let input_rows = vec![TierRow::new(
        "Base",
        "Sommatoria reddito + attività",
        base_display,
    )];

    let cap_1 = Decimal::from(5_000_000);
    let cap_2 = Decimal::from(100_000_000);
    let cap_3 = Decimal::from(300_000_000);
    let cap_4 = Decimal::from(800_000_000);

    let s1 = tier_span(base, cap_1, Some(cap_2));
    let s2 = tier_span(base, cap_2, Some(cap_3));
    let s3 = tier_span(base, cap_3, Some(cap_4));

    let mut tier_rows = vec![
        TierRow::new(
            "Base fissa",
            "Fino a 5.000.000 €",
            range_amount(Decimal::from(6_000), Decimal::from(8_000)),
        ),
        TierRow::new(
            "Fascia 1",
            format!(
                "Da 5M a 100M | Quota: {} | Aliquota: 0,009% - 0,010%",
                format_eur(s1)
            ),
            range_amount(s1 * Decimal::new(9, 5), s1 * Decimal::new(1, 4)),
        ),
        TierRow::new(
            "Fascia 2",
            format!(
                "Da 100M a 300M | Quota: {} | Aliquota: 0,006% - 0,009%",
                format_eur(s2)
            ),
            range_amount(s2 * Decimal::new(6, 5), s2 * Decimal::new(9, 5)),
        ),
        TierRow::new(
            "Fascia 3",
            format!(
                "Da 300M a 800M | Quota: {} | Aliquota: 0,005% - 0,006%",
                format_eur(s3)
            ),
            range_amount(s3 * Decimal::new(5, 5), s3 * Decimal::new(6, 5)),
        ),
    ];

    if base > cap_4 {
        let excess = base - cap_4;
        let steps = (excess / STEP_SIZE).ceil();
        tier_rows.push(TierRow::new(
            "Oltre 800M",
            format!("Ogni 100M oltre 800M | Scatti: {}", steps.normalize()),
            range_amount(steps * STEP_FEE_MIN, steps * STEP_FEE_MAX),
        ));
    }

    SchedulePart {
        input_rows,
        tier_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawValue;

    fn input(primary: f64, secondary: f64) -> CalculationInput {
        CalculationInput {
            primary_value: Some(RawValue::Number(primary)),
            secondary_value: Some(RawValue::Number(secondary)),
            ..CalculationInput::default()
        }
    }

    /// SUP-001: base below the first boundary keeps the fixed fee only
    #[test]
    fn test_small_base_fixed_fee_only() {
        let part = compute(&input(2_000_000.0, 1_000_000.0));
        assert_eq!(part.tier_rows.len(), 4);
        assert_eq!(part.tier_rows[0].amount, "6.000,00 € / 8.000,00 €");
        assert_eq!(part.tier_rows[1].amount, "0,00 € / 0,00 €");
        assert_eq!(part.input_rows[0].amount, "3.000.000,00 €");
    }

    /// SUP-002: proportional tiers over the summed base
    #[test]
    fn test_proportional_tiers() {
        let part = compute(&input(150_000_000.0, 50_000_000.0));
        // Tier 1 saturated: 95M at 0,009-0,010%
        assert_eq!(part.tier_rows[1].amount, "8.550,00 € / 9.500,00 €");
        // Tier 2: 100M at 0,006-0,009%
        assert_eq!(part.tier_rows[2].amount, "6.000,00 € / 9.000,00 €");
        assert_eq!(part.tier_rows[3].amount, "0,00 € / 0,00 €");
    }

    /// SUP-003: started steps above 800M each count fully
    #[test]
    fn test_steps_above_highest_boundary() {
        let part = compute(&input(950_000_000.0, 0.0));
        let step_row = part.tier_rows.last().unwrap();
        assert_eq!(step_row.label, "Oltre 800M");
        // 150M over: ceil(1.5) = 2 steps
        assert!(step_row.description.contains("Scatti: 2"));
        assert_eq!(step_row.amount, "15.000,00 € / 20.000,00 €");
    }

    /// SUP-004: exactly 800M adds no step row
    #[test]
    fn test_no_step_row_at_boundary() {
        let part = compute(&input(800_000_000.0, 0.0));
        assert_eq!(part.tier_rows.len(), 4);
    }

    /// SUP-005: missing values display an absent base
    #[test]
    fn test_absent_base_display() {
        let part = compute(&CalculationInput::default());
        assert_eq!(part.input_rows[0].amount, "-");
        assert_eq!(part.tier_rows[0].amount, "6.000,00 € / 8.000,00 €");
    }
}
