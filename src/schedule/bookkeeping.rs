//! Bookkeeping schedules (Art. 23, Riquadri 5.1 e 5.2).
//!
//! Ordinary bookkeeping sums three independently rated components;
//! simplified bookkeeping tiers a single base value.

use rust_decimal::Decimal;

use super::{SchedulePart, range_amount};
use crate::models::{CalculationInput, TierRow};
use crate::numeric::{format_eur, parse_field, tier_span};

/// Computes the ordinary bookkeeping component rows (comma 1).
pub fn compute_ordinary(input: &CalculationInput) -> SchedulePart {
    let income = parse_field(input.primary_value.as_ref()).unwrap_or(Decimal::ZERO);
    let assets = parse_field(input.secondary_value.as_ref()).unwrap_or(Decimal::ZERO);
    let liabilities = parse_field(input.tertiary_value.as_ref()).unwrap_or(Decimal::ZERO);

    let income_min = income * Decimal::new(3, 3);
    let income_max = income * Decimal::new(5, 3);
    let assets_min = assets * Decimal::new(2, 4);
    let assets_max = assets * Decimal::new(6, 4);
    let liabilities_min = liabilities * Decimal::new(2, 4);
    let liabilities_max = liabilities * Decimal::new(65, 5);

    let total_min = income_min + assets_min + liabilities_min;
    let total_max = income_max + assets_max + liabilities_max;

    let tier_rows = vec![
        TierRow::new(
            "A) Reddito",
            format!("Base: {} | Aliquota: 0,30% - 0,50%", format_eur(income)),
            range_amount(income_min, income_max),
        ),
        TierRow::new(
            "B) Attività",
            format!("Base: {} | Aliquota: 0,020% - 0,060%", format_eur(assets)),
            range_amount(assets_min, assets_max),
        ),
        TierRow::new(
            "C) Passività",
            format!(
                "Base: {} | Aliquota: 0,020% - 0,065%",
                format_eur(liabilities)
            ),
            range_amount(liabilities_min, liabilities_max),
        ),
        TierRow::new(
            "Totale",
            "Somma delle tre componenti",
            range_amount(total_min, total_max),
        ),
    ];

    SchedulePart {
        input_rows: Vec::new(),
        tier_rows,
    }
}

/// Computes the simplified bookkeeping tier rows (comma 2).
pub fn compute_simplified(input: &CalculationInput) -> SchedulePart {
    let base = parse_field(input.primary_value.as_ref()).unwrap_or(Decimal::ZERO);

    let b1 = Decimal::from(50_000);
    let b2 = Decimal::from(100_000);
    let s1 = tier_span(base, Decimal::ZERO, Some(b1));
    let s2 = tier_span(base, b1, Some(b2));
    let s3 = tier_span(base, b2, None);

    let min_1 = s1 * Decimal::new(3, 2);
    let max_1 = s1 * Decimal::new(4, 2);
    let min_2 = s2 * Decimal::new(1, 2);
    let max_2 = s2 * Decimal::new(2, 2);
    let min_3 = s3 * Decimal::new(5, 3);
    let max_3 = s3 * Decimal::new(1, 2);

    let total_min = min_1 + min_2 + min_3;
    let total_max = max_1 + max_2 + max_3;

    let tier_rows = vec![
        TierRow::new(
            "Fascia 1",
            format!(
                "Fino a 50.000 € | Quota: {} | Aliquota: 3,00% - 4,00%",
                format_eur(s1)
            ),
            range_amount(min_1, max_1),
        ),
        TierRow::new(
            "Fascia 2",
            format!(
                "Da 50.000 a 100.000 € | Quota: {} | Aliquota: 1,00% - 2,00%",
                format_eur(s2)
            ),
            range_amount(min_2, max_2),
        ),
        TierRow::new(
            "Fascia 3",
            format!(
                "Oltre 100.000 € | Quota: {} | Aliquota: 0,50% - 1,00%",
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
