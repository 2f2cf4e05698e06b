//! Document generation: orchestrates tier math, modifiers, compliance, and
//! layout into the final PDF.
//!
//! Each generation is a pure, self-contained unit of work over its own
//! input; layout state lives inside the [`LayoutEngine`] for exactly one
//! render. The finished bytes exist only after footers are stamped, so no
//! partial document is ever observable.

use std::io::Write;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::compliance::compare_compliance;
use crate::config::LetterheadConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalculationInput, ComplianceStatus, ComputationResult, ProfessionalProfile, RawValue,
    RenderedDocument, ScheduleId, TierRow, normative_reference_for,
};
use crate::modifiers::compute_modifiers;
use crate::numeric::{format_currency, format_eur, parse_field};
use crate::render::{
    FontFace, InfoCell, LayoutEngine, color, highlight_box, suggested_filename, two_column_info,
    zebra_table,
};
use crate::schedule::compute_tiers;

/// Formats a parsed value, falling back to the raw wire text.
fn display_or_raw(parsed: Option<Decimal>, raw: Option<&RawValue>) -> String {
    match (parsed, raw) {
        (Some(value), _) => format_eur(value),
        (None, Some(raw)) => format_currency(raw),
        (None, None) => "-".to_string(),
    }
}

/// Generates the complete compliance document for one calculation.
///
/// Consumes the schedule code, the caller-chosen criterion, the shared
/// input record, and the upstream computation result (read-only), and lays
/// out header, info boxes, methodology tables, modifier box, and the final
/// comparison across as many pages as needed.
pub fn generate_document(
    letterhead: &LetterheadConfig,
    professional: &ProfessionalProfile,
    schedule_code: &str,
    criterion: &str,
    input: &CalculationInput,
    result: &ComputationResult,
    generated_at: DateTime<Utc>,
) -> EngineResult<RenderedDocument> {
    let schedule = ScheduleId::from_code(schedule_code);
    let normative = normative_reference_for(schedule_code, input.document_type.as_deref());

    let mut breakdown = compute_tiers(schedule, criterion, input);
    if breakdown.input_rows.is_empty() {
        breakdown.input_rows.push(TierRow::input_placeholder());
    }
    if breakdown.tier_rows.is_empty() {
        breakdown.tier_rows.push(TierRow::tier_placeholder());
    }

    let modifiers = compute_modifiers(schedule, input);

    let reference = parse_field(result.chosen.as_ref());
    let minimum = parse_field(result.min.as_ref());
    let agreed = parse_field(input.agreed_fee.as_ref());
    let verdict = compare_compliance(reference, minimum, agreed);
    let below = verdict.status == ComplianceStatus::BelowThreshold;

    let reference_display = display_or_raw(reference, result.chosen.as_ref());
    let minimum_display = display_or_raw(minimum, result.min.as_ref());
    let effective = agreed.or(reference);
    let agreed_display = display_or_raw(effective, result.agreed.as_ref());
    let delta_display = verdict
        .delta
        .map(format_eur)
        .unwrap_or_else(|| "-".to_string());

    let generated_label = generated_at.format("%d/%m/%Y, %H:%M:%S").to_string();

    let mut engine = LayoutEngine::new(letterhead);

    two_column_info(
        &mut engine,
        &[
            InfoCell::new("Nome Pratica", input.practice_name.clone()),
            InfoCell::new("Cliente/Società", input.client_name.clone()),
        ],
        &[
            InfoCell::new("Data Generazione", Some(generated_label.clone())),
            InfoCell::new("Riferimento Normativo", Some(normative.clone())),
        ],
    );

    let email = (!professional.email.is_empty()).then(|| professional.email.clone());
    two_column_info(
        &mut engine,
        &[
            InfoCell::new("Documento generato da", Some(professional.generated_by())),
            InfoCell::new("Email Professionista", email),
        ],
        &[InfoCell::new("Data Generazione", Some(generated_label))],
    );

    engine.section_title("Dettaglio della Metodologia di Calcolo");
    engine.paragraph(FontFace::Regular, 10.0, color::INK, &normative);
    engine.advance(5.0);

    engine.section_title("Riepilogo Dati Inseriti");
    zebra_table(
        &mut engine,
        ["Voce", "Dettaglio", "Valore"],
        &breakdown.input_rows,
        |_, _| None,
    );

    zebra_table(
        &mut engine,
        ["Fascia", "Descrizione Quota/Aliquota", "Importo Parziale"],
        &breakdown.tier_rows,
        |row, _| {
            let label = row.label.to_lowercase();
            if label.contains("base fissa") {
                Some(color::FIXED_BASE_FILL)
            } else if label.contains("totale") {
                Some(color::TOTAL_FILL)
            } else {
                None
            }
        },
    );

    engine.section_title("Modificatori e Coefficienti");
    highlight_box(&mut engine, "Modificatori Applicati", &modifiers);

    engine.section_title("Riepilogo Finale e Confronto");

    let criterion_label = if criterion.is_empty() { "-" } else { criterion };
    let status_description = if below {
        format!("Sotto soglia (min {minimum_display})")
    } else {
        format!("Conforme (min {minimum_display})")
    };
    let summary_rows = vec![
        TierRow::new(
            "Parametro Ministeriale",
            format!("Criterio: {criterion_label}"),
            reference_display,
        ),
        TierRow::new(
            "Corrispettivo Pattuito",
            "Valore inserito dall'utente",
            agreed_display,
        ),
        TierRow::new("Scostamento (Delta)", "Pattuito - Ministeriale", delta_display),
        TierRow::new(
            "Stato Conformità Legge 49/2023",
            status_description,
            verdict.status_label(),
        ),
    ];

    let delta_known = verdict.delta.is_some();
    zebra_table(
        &mut engine,
        ["Voce", "Dettaglio", "Valore"],
        &summary_rows,
        |row, _| {
            if row.label.to_lowercase().contains("stato conformità") && delta_known {
                Some(if below {
                    color::STATUS_NEGATIVE_FILL
                } else {
                    color::STATUS_POSITIVE_FILL
                })
            } else {
                None
            }
        },
    );

    if delta_known {
        let suffix = verdict.percent_suffix();
        let outcome = if below {
            format!("Esito: corrispettivo sotto soglia (min {minimum_display}){suffix}.")
        } else {
            format!("Esito: corrispettivo conforme (min {minimum_display}){suffix}.")
        };
        let ink = if below { color::NEGATIVE } else { color::POSITIVE };
        engine.paragraph(FontFace::Bold, 10.0, ink, &outcome);
        engine.advance(5.0);
    }

    let (bytes, page_count) = engine.finalize()?;

    Ok(RenderedDocument {
        bytes,
        suggested_filename: suggested_filename(
            input.practice_name.as_deref(),
            input.client_name.as_deref(),
        ),
        page_count,
    })
}

/// Writes the finished document to an output sink.
///
/// The only propagating failure of a render: an I/O error here surfaces as
/// a generation failure and no partial output is considered valid.
pub fn write_document(document: &RenderedDocument, sink: &mut dyn Write) -> EngineResult<()> {
    sink.write_all(&document.bytes)
        .and_then(|_| sink.flush())
        .map_err(|err| EngineError::DocumentWrite {
            message: err.to_string(),
        })
}
