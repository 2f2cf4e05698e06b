//! Tax assistance schedules (Art. 28, Riquadri 10.1, 10.2 e 10.3).
//!
//! Returns are a fixed-fee checklist; representation and consulting apply a
//! single 1%–5% range to the base value, with an optional custom rate for
//! consulting.

use rust_decimal::Decimal;

use super::{SchedulePart, range_amount};
use crate::models::{CalculationInput, TaxReturnItem, TierRow};
use crate::numeric::{format_eur, format_percent, parse_field};

const RANGE_MIN_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);
const RANGE_MAX_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Computes the fixed-fee checklist rows (comma 1).
///
/// One row per selected item plus a total row; selecting nothing still
/// yields a zero total row. Unknown item ids are skipped.
pub fn compute_returns(input: &CalculationInput) -> SchedulePart {
    let input_rows = vec![TierRow::new(
        "Voci selezionate",
        "Conteggio",
        input.tax_return_items.len().to_string(),
    )];

    let mut total = Decimal::ZERO;
    let mut tier_rows = Vec::new();
    for id in &input.tax_return_items {
        if let Some(item) = TaxReturnItem::from_id(id) {
            total += item.fee();
            tier_rows.push(TierRow::new("Voce", item.label(), format_eur(item.fee())));
        }
    }
    tier_rows.push(TierRow::new(
        "Totale",
        "Somma tariffe fisse",
        format_eur(total),
    ));

    SchedulePart {
        input_rows,
        tier_rows,
    }
}

/// Computes the tax representation rows (comma 2).
pub fn compute_representation(input: &CalculationInput) -> SchedulePart {
    let base = parse_field(input.primary_value.as_ref()).unwrap_or(Decimal::ZERO);
    let min = base * RANGE_MIN_RATE;
    let max = base * RANGE_MAX_RATE;

    let tier_rows = vec![
        TierRow::new(
            "Range ministeriale",
            format!("Valore pratica: {} | Aliquota: 1% - 5%", format_eur(base)),
            range_amount(min, max),
        ),
        TierRow::new(
            "Media",
            "Valore medio",
            format_eur((min + max) / Decimal::TWO),
        ),
    ];

    SchedulePart {
        input_rows: Vec::new(),
        tier_rows,
    }
}

/// Computes the tax consulting rows (comma 3).
///
/// A custom rate adds its computed amount alongside the still-reported
/// ministerial range.
pub fn compute_consulting(input: &CalculationInput) -> SchedulePart {
    let base = parse_field(input.primary_value.as_ref()).unwrap_or(Decimal::ZERO);
    let min = base * RANGE_MIN_RATE;
    let max = base * RANGE_MAX_RATE;

    let tier_rows = match parse_field(input.consulting_rate.as_ref()) {
        Some(rate) => vec![
            TierRow::new(
                "Valore personalizzato",
                format!(
                    "Valore contestazione: {} | Aliquota selezionata: {}",
                    format_eur(base),
                    format_percent(rate)
                ),
                format_eur(base * rate),
            ),
            TierRow::new(
                "Range ministeriale",
                "Min (1%) / Max (5%)",
                range_amount(min, max),
            ),
        ],
        None => vec![TierRow::new(
            "Range ministeriale",
            format!(
                "Valore contestazione: {} | Aliquota: 1% - 5%",
                format_eur(base)
            ),
            range_amount(min, max),
        )],
    };

    SchedulePart {
        input_rows: Vec::new(),
        tier_rows,
    }
}
