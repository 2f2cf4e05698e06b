//! Contract and financing/economic consulting (Art. 26, Riquadri 8.1 e 8.2).
//!
//! Both schedules tier the base at 2.000.000 €. Custom per-tier rates
//! (8.1) and intensity selectors (8.2) replace the ministerial range with a
//! single computed amount per tier.

use rust_decimal::Decimal;

use super::{SchedulePart, range_amount};
use crate::models::{CalculationInput, TierIntensity, TierRow};
use crate::numeric::{format_eur, format_percent, parse_field, tier_span};

const TIER_BOUNDARY: Decimal = Decimal::from_parts(2_000_000, 0, 0, false, 0);

/// Computes the contract consulting tier rows (comma 1).
pub fn compute_contract(input: &CalculationInput) -> SchedulePart {
    let base = parse_field(input.primary_value.as_ref()).unwrap_or(Decimal::ZERO);
    let s1 = tier_span(base, Decimal::ZERO, Some(TIER_BOUNDARY));
    let s2 = tier_span(base, TIER_BOUNDARY, None);

    let rate_1 = parse_field(input.tier_rate_1.as_ref());
    let rate_2 = parse_field(input.tier_rate_2.as_ref());

    let tier_rows = if let (Some(r1), Some(r2)) = (rate_1, rate_2) {
        vec![
            TierRow::new(
                "Fascia 1",
                format!(
                    "Fino a 2.000.000 € | Quota: {} | Aliquota: {}",
                    format_eur(s1),
                    format_percent(r1)
                ),
                format_eur(s1 * r1),
            ),
            TierRow::new(
                "Fascia 2",
                format!(
                    "Oltre 2.000.000 € | Quota: {} | Aliquota: {}",
                    format_eur(s2),
                    format_percent(r2)
                ),
                format_eur(s2 * r2),
            ),
        ]
    } else {
        vec![
            TierRow::new(
                "Fascia 1",
                format!(
                    "Fino a 2.000.000 € | Quota: {} | Aliquota: 0,75% - 2,00%",
                    format_eur(s1)
                ),
                range_amount(s1 * Decimal::new(75, 4), s1 * Decimal::new(2, 2)),
            ),
            TierRow::new(
                "Fascia 2",
                format!(
                    "Oltre 2.000.000 € | Quota: {} | Aliquota: 0,50% - 0,75%",
                    format_eur(s2)
                ),
                range_amount(s2 * Decimal::new(5, 3), s2 * Decimal::new(75, 4)),
            ),
        ]
    };

    SchedulePart {
        input_rows: Vec::new(),
        tier_rows,
    }
}

/// Computes the financing/economic consulting tier rows (commi 2/3).
pub fn compute_financial(input: &CalculationInput) -> SchedulePart {
    let base = parse_field(input.primary_value.as_ref()).unwrap_or(Decimal::ZERO);
    let s1 = tier_span(base, Decimal::ZERO, Some(TIER_BOUNDARY));
    let s2 = tier_span(base, TIER_BOUNDARY, None);

    let min_1 = Decimal::new(75, 4);
    let max_1 = Decimal::new(1, 2);
    let min_2 = Decimal::new(5, 3);
    let max_2 = Decimal::new(75, 4);

    let tier_rows = if let (Some(i1), Some(i2)) = (input.intensity_1(), input.intensity_2()) {
        let r1 = TierIntensity::parse(i1).rate_within(min_1, max_1);
        let r2 = TierIntensity::parse(i2).rate_within(min_2, max_2);
        vec![
            TierRow::new(
                "Fascia 1",
                format!(
                    "Fino a 2.000.000 € | Quota: {} | Aliquota: {}",
                    format_eur(s1),
                    format_percent(r1)
                ),
                format_eur(s1 * r1),
            ),
            TierRow::new(
                "Fascia 2",
                format!(
                    "Oltre 2.000.000 € | Quota: {} | Aliquota: {}",
                    format_eur(s2),
                    format_percent(r2)
                ),
                format_eur(s2 * r2),
            ),
        ]
    } else {
        vec![
            TierRow::new(
                "Fascia 1",
                format!(
                    "Fino a 2.000.000 € | Quota: {} | Aliquota: 0,75% - 1,00%",
                    format_eur(s1)
                ),
                range_amount(s1 * min_1, s1 * max_1),
            ),
            TierRow::new(
                "Fascia 2",
                format!(
                    "Oltre 2.000.000 € | Quota: {} | Aliquota: 0,50% - 0,75%",
                    format_eur(s2)
                ),
                range_amount(s2 * min_2, s2 * max_2),
            ),
        ]
    };

    SchedulePart {
        input_rows: Vec::new(),
        tier_rows,
    }
}
