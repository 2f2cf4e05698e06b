//! Tier calculation logic for every schedule of Tabella C.
//!
//! This module contains one submodule per schedule family, each turning the
//! raw calculation input into itemized tier rows. Dispatch is keyed by
//! [`ScheduleId`]; unknown schedules yield no rows and the caller
//! substitutes a placeholder. All functions are pure: the same input always
//! yields the same rows.

pub mod administration;
pub mod audit_review;
pub mod bookkeeping;
pub mod consulting;
pub mod corporate;
pub mod insolvency;
pub mod liquidation;
pub mod supervisory;
pub mod tax;
pub mod valuation;

use rust_decimal::Decimal;

use crate::models::{CalculationInput, ScheduleId, TierBreakdown, TierRow};
use crate::numeric::{format_currency, format_eur, format_percent, parse_field};

/// Rows contributed by a single schedule: extra input echoes plus the tier
/// breakdown itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchedulePart {
    /// Schedule-specific rows appended to the input summary.
    pub input_rows: Vec<TierRow>,
    /// The itemized tier rows.
    pub tier_rows: Vec<TierRow>,
}

/// Formats a min/max amount pair as a single cell.
pub(crate) fn range_amount(min: Decimal, max: Decimal) -> String {
    format!("{} / {}", format_eur(min), format_eur(max))
}

/// Computes the full tier breakdown for a schedule.
///
/// The input summary echoes every recognized field of the shared input
/// record; the selected schedule contributes its own rows after that.
/// An unknown schedule (`None`) yields empty tier rows without error.
pub fn compute_tiers(
    schedule: Option<ScheduleId>,
    criterion: &str,
    input: &CalculationInput,
) -> TierBreakdown {
    let mut input_rows = input_summary_rows(input, criterion);

    let part = match schedule {
        Some(ScheduleId::Administration) => administration::compute(input),
        Some(ScheduleId::Liquidation) => liquidation::compute(input),
        Some(ScheduleId::Valuation) => valuation::compute(input),
        Some(ScheduleId::AuditReview) => audit_review::compute(input),
        Some(ScheduleId::OrdinaryBookkeeping) => bookkeeping::compute_ordinary(input),
        Some(ScheduleId::SimplifiedBookkeeping) => bookkeeping::compute_simplified(input),
        Some(ScheduleId::CorporateActs) => corporate::compute_acts(input),
        Some(ScheduleId::ExtraordinaryOperations) => corporate::compute_extraordinary(input),
        Some(ScheduleId::ContractConsulting) => consulting::compute_contract(input),
        Some(ScheduleId::FinancialConsulting) => consulting::compute_financial(input),
        Some(ScheduleId::InsolvencyAssistance) => insolvency::compute(input),
        Some(ScheduleId::TaxReturns) => tax::compute_returns(input),
        Some(ScheduleId::TaxRepresentation) => tax::compute_representation(input),
        Some(ScheduleId::TaxConsulting) => tax::compute_consulting(input),
        Some(ScheduleId::SupervisoryBoard) => supervisory::compute(input),
        None => SchedulePart::default(),
    };

    input_rows.extend(part.input_rows);
    TierBreakdown {
        input_rows,
        tier_rows: part.tier_rows,
    }
}

/// Builds the rows echoing the raw calculation inputs.
///
/// Only parseable values appear; bad numeric input surfaces to the reader
/// as an absent row rather than propagating into the math.
fn input_summary_rows(input: &CalculationInput, criterion: &str) -> Vec<TierRow> {
    let mut rows = Vec::new();

    if let Some(v1) = parse_field(input.primary_value.as_ref()) {
        rows.push(TierRow::new("Valore", "Valore di riferimento", format_eur(v1)));
    }
    if let Some(v2) = parse_field(input.secondary_value.as_ref()) {
        rows.push(TierRow::new("Valore 2", "Secondo valore", format_eur(v2)));
    }
    if let Some(v3) = parse_field(input.tertiary_value.as_ref()) {
        rows.push(TierRow::new("Valore 3", "Terzo valore", format_eur(v3)));
    }

    if let Some(a1) = parse_field(input.tier_rate_1.as_ref()) {
        rows.push(TierRow::new(
            "Aliquota fascia 1",
            "Valore selezionato",
            format_percent(a1),
        ));
    }
    if let Some(a2) = parse_field(input.tier_rate_2.as_ref()) {
        rows.push(TierRow::new(
            "Aliquota fascia 2",
            "Valore selezionato",
            format_percent(a2),
        ));
    }

    if let Some(i1) = input.intensity_1() {
        rows.push(TierRow::new("Intensità fascia 1", "Selezione utente", i1));
    }
    if let Some(i2) = input.intensity_2() {
        rows.push(TierRow::new("Intensità fascia 2", "Selezione utente", i2));
    }

    if let Some(rate) = parse_field(input.consulting_rate.as_ref()) {
        rows.push(TierRow::new(
            "Aliquota consulenza",
            "Valore selezionato",
            format_percent(rate),
        ));
    }

    if let Some(pct) = parse_field(input.percentage.as_ref()) {
        rows.push(TierRow::new(
            "Percentuale",
            "Posizionamento nel range (0%=min, 100%=max)",
            format!("{}%", pct.normalize()),
        ));
    }

    if let Some(agreed) = input.agreed_fee.as_ref() {
        rows.push(TierRow::new(
            "Corrispettivo pattuito",
            "Valore inserito",
            format_currency(agreed),
        ));
    }

    if !criterion.is_empty() {
        rows.push(TierRow::new("Criterio", "Selezione valore", criterion));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawValue;

    fn input_with_value(value: f64) -> CalculationInput {
        CalculationInput {
            primary_value: Some(RawValue::Number(value)),
            ..CalculationInput::default()
        }
    }

    /// DSP-001: every known schedule produces at least one tier row
    #[test]
    fn test_every_schedule_produces_tier_rows() {
        let input = input_with_value(500_000.0);
        let schedules = [
            ScheduleId::Administration,
            ScheduleId::Liquidation,
            ScheduleId::Valuation,
            ScheduleId::AuditReview,
            ScheduleId::OrdinaryBookkeeping,
            ScheduleId::SimplifiedBookkeeping,
            ScheduleId::CorporateActs,
            ScheduleId::ExtraordinaryOperations,
            ScheduleId::ContractConsulting,
            ScheduleId::FinancialConsulting,
            ScheduleId::InsolvencyAssistance,
            ScheduleId::TaxReturns,
            ScheduleId::TaxRepresentation,
            ScheduleId::TaxConsulting,
            ScheduleId::SupervisoryBoard,
        ];
        for schedule in schedules {
            let breakdown = compute_tiers(Some(schedule), "medio", &input);
            assert!(
                !breakdown.tier_rows.is_empty(),
                "schedule {:?} produced no tier rows",
                schedule
            );
        }
    }

    /// DSP-002: unknown schedule yields empty tier rows without error
    #[test]
    fn test_unknown_schedule_yields_empty_tier_rows() {
        let input = input_with_value(500_000.0);
        let breakdown = compute_tiers(None, "", &input);
        assert!(breakdown.tier_rows.is_empty());
        assert!(!breakdown.input_rows.is_empty());
    }

    /// DSP-003: same input, same output
    #[test]
    fn test_compute_tiers_is_pure() {
        let input = input_with_value(1_234_567.0);
        let first = compute_tiers(Some(ScheduleId::Valuation), "minimo", &input);
        let second = compute_tiers(Some(ScheduleId::Valuation), "minimo", &input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_summary_echoes_values() {
        let input = CalculationInput {
            primary_value: Some(RawValue::Text("1.000,00".to_string())),
            secondary_value: Some(RawValue::Number(250.0)),
            percentage: Some(RawValue::Number(50.0)),
            agreed_fee: Some(RawValue::Number(900.0)),
            ..CalculationInput::default()
        };

        let rows = input_summary_rows(&input, "percentuale");
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Valore",
                "Valore 2",
                "Percentuale",
                "Corrispettivo pattuito",
                "Criterio"
            ]
        );
        assert_eq!(rows[0].amount, "1.000,00 €");
        assert_eq!(rows[2].amount, "50%");
    }

    #[test]
    fn test_input_summary_skips_malformed_values() {
        let input = CalculationInput {
            primary_value: Some(RawValue::Text("abc".to_string())),
            ..CalculationInput::default()
        };
        let rows = input_summary_rows(&input, "");
        assert!(rows.is_empty());
    }

    #[test]
    fn test_agreed_fee_string_passes_through() {
        let input = CalculationInput {
            agreed_fee: Some(RawValue::Text("9.000,00 €".to_string())),
            ..CalculationInput::default()
        };
        let rows = input_summary_rows(&input, "");
        assert_eq!(rows[0].amount, "9.000,00 €");
    }
}
