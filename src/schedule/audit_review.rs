//! Audit reviews (Art. 22, Riquadro 4).
//!
//! Three independent bases - income, assets, liabilities - each with its
//! own fixed rate pair, summed directly with no tiering across bases.

use rust_decimal::Decimal;

use super::{SchedulePart, range_amount};
use crate::models::{CalculationInput, TierRow};
use crate::numeric::{format_eur, parse_field};

/// Computes the audit review component rows.
pub fn compute(input: &CalculationInput) -> SchedulePart {
    let income = parse_field(input.primary_value.as_ref()).unwrap_or(Decimal::ZERO);
    let assets = parse_field(input.secondary_value.as_ref()).unwrap_or(Decimal::ZERO);
    let liabilities = parse_field(input.tertiary_value.as_ref()).unwrap_or(Decimal::ZERO);

    let income_min = income * Decimal::new(1, 3);
    let income_max = income * Decimal::new(15, 4);
    let assets_min = assets * Decimal::new(5, 4);
    let assets_max = assets * Decimal::new(75, 5);
    let liabilities_min = liabilities * Decimal::new(5, 4);
    let liabilities_max = liabilities * Decimal::new(75, 5);

    let total_min = income_min + assets_min + liabilities_min;
    let total_max = income_max + assets_max + liabilities_max;

    let tier_rows = vec![
        TierRow::new(
            "A) Reddito",
            format!("Base: {} | Aliquota: 0,10% - 0,15%", format_eur(income)),
            range_amount(income_min, income_max),
        ),
        TierRow::new(
            "B) Attività",
            format!("Base: {} | Aliquota: 0,050% - 0,075%", format_eur(assets)),
            range_amount(assets_min, assets_max),
        ),
        TierRow::new(
            "C) Passività",
            format!(
                "Base: {} | Aliquota: 0,050% - 0,075%",
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
