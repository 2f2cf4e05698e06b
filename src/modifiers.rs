//! Disclosure modifiers appended to the rendered document.
//!
//! Modifiers are human-readable notices about schedule-specific
//! adjustments: role multipliers, outcome-based reductions, custom-rate
//! overrides, and the generic percentage-position disclosure. They are
//! informational annotations on an already-finalized figure and are never
//! folded into the numeric result.

use crate::models::{CalculationInput, ScheduleId, SupervisoryRole};
use crate::numeric::parse_field;

/// Computes the modifier list for a schedule.
///
/// The result is never empty: when no rule fires, a single "no modifier
/// applied" entry is emitted.
pub fn compute_modifiers(schedule: Option<ScheduleId>, input: &CalculationInput) -> Vec<String> {
    let mut modifiers = Vec::new();

    match schedule {
        Some(ScheduleId::TaxReturns) => {
            modifiers.push("Calcolo a tariffe fisse: somma delle voci selezionate.".to_string());
        }
        Some(ScheduleId::InsolvencyAssistance) if input.negative_outcome => {
            modifiers.push("Riduzione: esito negativo (-50%).".to_string());
        }
        Some(ScheduleId::FinancialConsulting)
            if input.intensity_1().is_some() && input.intensity_2().is_some() =>
        {
            modifiers.push("Intensità per scaglione applicata (min/medio/max).".to_string());
        }
        Some(ScheduleId::TaxConsulting)
            if parse_field(input.consulting_rate.as_ref()).is_some() =>
        {
            modifiers.push("Aliquota personalizzata applicata (1% - 5%).".to_string());
        }
        Some(ScheduleId::SupervisoryBoard) => {
            match input.role() {
                SupervisoryRole::President => {
                    modifiers
                        .push("Aumento: Presidente Collegio Sindacale (+50%).".to_string());
                }
                SupervisoryRole::SoleAuditor => {
                    modifiers.push("Aumento: Sindaco Unico (+100%).".to_string());
                }
                SupervisoryRole::Member => {}
            }
            if input.management_reduction {
                modifiers.push(
                    "Riduzione: società di sola amministrazione/godimento o liquidazione (-50%)."
                        .to_string(),
                );
            }
        }
        _ => {}
    }

    if let Some(pct) = parse_field(input.percentage.as_ref()) {
        modifiers.push(format!(
            "Percentuale (posizionamento nel range 0%=min, 100%=max): {}%.",
            pct.normalize()
        ));
    }

    if modifiers.is_empty() {
        modifiers.push("Nessun modificatore applicato.".to_string());
    }

    modifiers
}
