//! Liquidation of businesses (Art. 20, Riquadro 2).
//!
//! Two independent bases: the asset value split into three tiers, the
//! liability value at a single proportional rate pair. The grand total sums
//! the minima and maxima of every component.

use rust_decimal::Decimal;

use super::{SchedulePart, range_amount};
use crate::models::{CalculationInput, TierRow};
use crate::numeric::{format_eur, parse_field, tier_span};

/// Computes the liquidation tier rows.
pub fn compute(input: &CalculationInput) -> SchedulePart {
    let assets = parse_field(input.primary_value.as_ref()).unwrap_or(Decimal::ZERO);
    let liabilities = parse_field(input.secondary_value.as_ref()).unwrap_or(Decimal::ZERO);

    let b1 = Decimal::from(400_000);
    let b2 = Decimal::from(4_000_000);
    let a1 = tier_span(assets, Decimal::ZERO, Some(b1));
    let a2 = tier_span(assets, b1, Some(b2));
    let a3 = tier_span(assets, b2, None);

    let asset_min_1 = a1 * Decimal::new(4, 2);
    let asset_max_1 = a1 * Decimal::new(6, 2);
    let asset_min_2 = a2 * Decimal::new(2, 2);
    let asset_max_2 = a2 * Decimal::new(3, 2);
    let asset_min_3 = a3 * Decimal::new(75, 4);
    let asset_max_3 = a3 * Decimal::new(1, 2);

    let liability_min = liabilities * Decimal::new(75, 4);
    let liability_max = liabilities * Decimal::new(1, 2);

    let total_min = asset_min_1 + asset_min_2 + asset_min_3 + liability_min;
    let total_max = asset_max_1 + asset_max_2 + asset_max_3 + liability_max;

    let tier_rows = vec![
        TierRow::new(
            "Attivo 1",
            format!(
                "Fino a 400.000 € | Quota: {} | Aliquota: 4,00% - 6,00%",
                format_eur(a1)
            ),
            range_amount(asset_min_1, asset_max_1),
        ),
        TierRow::new(
            "Attivo 2",
            format!(
                "Da 400.000 a 4.000.000 € | Quota: {} | Aliquota: 2,00% - 3,00%",
                format_eur(a2)
            ),
            range_amount(asset_min_2, asset_max_2),
        ),
        TierRow::new(
            "Attivo 3",
            format!(
                "Oltre 4.000.000 € | Quota: {} | Aliquota: 0,75% - 1,00%",
                format_eur(a3)
            ),
            range_amount(asset_min_3, asset_max_3),
        ),
        TierRow::new(
            "Passivo",
            format!(
                "Sul totale passivo accertato: {} | Aliquota: 0,75% - 1,00%",
                format_eur(liabilities)
            ),
            range_amount(liability_min, liability_max),
        ),
        TierRow::new(
            "Totale",
            "Somma attivo + passivo",
            range_amount(total_min, total_max),
        ),
    ];

    SchedulePart {
        input_rows: Vec::new(),
        tier_rows,
    }
}
