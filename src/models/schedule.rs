//! Schedule identifiers and normative reference text.
//!
//! Each schedule ("riquadro") of Tabella C maps to exactly one calculation
//! variant. The wire format uses the short codes of the regulation
//! (`r1`, `r5_1`, `r10_2`, …); unknown codes degrade to a generic
//! normative label rather than an error.

use serde::{Deserialize, Serialize};

/// One named fee-calculation variant within Tabella C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScheduleId {
    /// Art. 19 - Administration and custody of businesses.
    #[serde(rename = "r1")]
    Administration,
    /// Art. 20 - Liquidation of businesses.
    #[serde(rename = "r2")]
    Liquidation,
    /// Art. 21 - Appraisals, valuations and reasoned opinions.
    #[serde(rename = "r3")]
    Valuation,
    /// Art. 22 - Audit reviews.
    #[serde(rename = "r4")]
    AuditReview,
    /// Art. 23 comma 1 - Ordinary bookkeeping.
    #[serde(rename = "r5_1")]
    OrdinaryBookkeeping,
    /// Art. 23 comma 2 - Simplified bookkeeping.
    #[serde(rename = "r5_2")]
    SimplifiedBookkeeping,
    /// Art. 25 comma 1 - Incorporation and statute changes.
    #[serde(rename = "r7_1")]
    CorporateActs,
    /// Art. 25 comma 2 - Mergers, demergers and extraordinary operations.
    #[serde(rename = "r7_2")]
    ExtraordinaryOperations,
    /// Art. 26 comma 1 - Contract consulting.
    #[serde(rename = "r8_1")]
    ContractConsulting,
    /// Art. 26 commi 2/3 - Financing and economic-financial consulting.
    #[serde(rename = "r8_2")]
    FinancialConsulting,
    /// Art. 27 - Assistance in insolvency procedures.
    #[serde(rename = "r9")]
    InsolvencyAssistance,
    /// Art. 28 comma 1 - Tax returns (fixed-fee checklist).
    #[serde(rename = "r10_1")]
    TaxReturns,
    /// Art. 28 comma 2 - Tax representation.
    #[serde(rename = "r10_2")]
    TaxRepresentation,
    /// Art. 28 comma 3 - Tax consulting.
    #[serde(rename = "r10_3")]
    TaxConsulting,
    /// Art. 29 - Supervisory board (Collegio Sindacale).
    #[serde(rename = "r11")]
    SupervisoryBoard,
}

impl ScheduleId {
    /// Resolves a wire code into a schedule id.
    ///
    /// Returns `None` for unrecognized codes; callers substitute the
    /// generic normative label and a placeholder tier row.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "r1" => Some(Self::Administration),
            "r2" => Some(Self::Liquidation),
            "r3" => Some(Self::Valuation),
            "r4" => Some(Self::AuditReview),
            "r5_1" => Some(Self::OrdinaryBookkeeping),
            "r5_2" => Some(Self::SimplifiedBookkeeping),
            "r7_1" => Some(Self::CorporateActs),
            "r7_2" => Some(Self::ExtraordinaryOperations),
            "r8_1" => Some(Self::ContractConsulting),
            "r8_2" => Some(Self::FinancialConsulting),
            "r9" => Some(Self::InsolvencyAssistance),
            "r10_1" => Some(Self::TaxReturns),
            "r10_2" => Some(Self::TaxRepresentation),
            "r10_3" => Some(Self::TaxConsulting),
            "r11" => Some(Self::SupervisoryBoard),
            _ => None,
        }
    }

    /// Returns the wire code for this schedule.
    pub fn code(self) -> &'static str {
        match self {
            Self::Administration => "r1",
            Self::Liquidation => "r2",
            Self::Valuation => "r3",
            Self::AuditReview => "r4",
            Self::OrdinaryBookkeeping => "r5_1",
            Self::SimplifiedBookkeeping => "r5_2",
            Self::CorporateActs => "r7_1",
            Self::ExtraordinaryOperations => "r7_2",
            Self::ContractConsulting => "r8_1",
            Self::FinancialConsulting => "r8_2",
            Self::InsolvencyAssistance => "r9",
            Self::TaxReturns => "r10_1",
            Self::TaxRepresentation => "r10_2",
            Self::TaxConsulting => "r10_3",
            Self::SupervisoryBoard => "r11",
        }
    }

    /// Returns the normative reference line rendered in the document.
    ///
    /// The financing/economic consulting schedule is disambiguated by the
    /// document subtype tag, which selects between comma 2 and comma 3 of
    /// Art. 26.
    pub fn normative_reference(self, document_type: Option<&str>) -> String {
        let text = match self {
            Self::Administration => {
                "Art. 19 - Amministrazione e custodia di aziende | Tabella C, Riquadro 1 (Dottori Commercialisti)"
            }
            Self::Liquidation => {
                "Art. 20 - Liquidazione di aziende | Tabella C, Riquadro 2 (Dottori Commercialisti)"
            }
            Self::Valuation => {
                "Art. 21 - Perizie, valutazioni e pareri motivati | Tabella C, Riquadro 3 (Dottori Commercialisti)"
            }
            Self::AuditReview => {
                "Art. 22 - Revisioni contabili | Tabella C, Riquadro 4 (Dottori Commercialisti)"
            }
            Self::OrdinaryBookkeeping => {
                "Art. 23 comma 1 - Tenuta contabilità ordinaria | Tabella C, Riquadro 5.1 (Dottori Commercialisti)"
            }
            Self::SimplifiedBookkeeping => {
                "Art. 23 comma 2 - Contabilità semplificata | Tabella C, Riquadro 5.2 (Dottori Commercialisti)"
            }
            Self::CorporateActs => {
                "Art. 25 comma 1 - Costituzione e variazioni statuto | Tabella C, Riquadro 7.1 (Dottori Commercialisti)"
            }
            Self::ExtraordinaryOperations => {
                "Art. 25 comma 2 - Fusioni, scissioni e operazioni straordinarie | Tabella C, Riquadro 7.2 (Dottori Commercialisti)"
            }
            Self::ContractConsulting => {
                "Art. 26 comma 1 - Consulenza contrattuale | Tabella C, Riquadro 8.1 (Dottori Commercialisti)"
            }
            Self::FinancialConsulting => {
                return match document_type {
                    Some("consulenza_finanziamenti") | Some("consulente_finanziamento") => {
                        "Art. 26 comma 2 - Consulenza su finanziamenti | Tabella C, Riquadro 8.2 (Dottori Commercialisti)"
                    }
                    Some("consulente_economico_finanziaria") => {
                        "Art. 26 comma 3 - Consulenza economica-finanziaria | Tabella C, Riquadro 8.2 (Dottori Commercialisti)"
                    }
                    _ => {
                        "Art. 26 - Consulenze (comma 2/3) | Tabella C, Riquadro 8.2 (Dottori Commercialisti)"
                    }
                }
                .to_string();
            }
            Self::InsolvencyAssistance => {
                "Art. 27 - Assistenza in procedure concorsuali | Tabella C, Riquadro 9 (Dottori Commercialisti)"
            }
            Self::TaxReturns => {
                "Art. 28 comma 1 - Assistenza tributaria (Dichiarazioni) | Tabella C, Riquadro 10.1 (Dottori Commercialisti)"
            }
            Self::TaxRepresentation => {
                "Art. 28 comma 2 - Rappresentanza tributaria | Tabella C, Riquadro 10.2 (Dottori Commercialisti)"
            }
            Self::TaxConsulting => {
                "Art. 28 comma 3 - Consulenza tributaria | Tabella C, Riquadro 10.3 (Dottori Commercialisti)"
            }
            Self::SupervisoryBoard => {
                "Art. 29 - Collegio Sindacale | Tabella C, Riquadro 11 (Dottori Commercialisti)"
            }
        };
        text.to_string()
    }
}

/// Resolves the normative reference line for a raw wire code.
///
/// Unknown or empty codes yield the generic Tabella C label instead of an
/// error.
pub fn normative_reference_for(code: &str, document_type: Option<&str>) -> String {
    match ScheduleId::from_code(code) {
        Some(schedule) => schedule.normative_reference(document_type),
        None => {
            let label = if code.is_empty() { "Riquadro N/D" } else { code };
            format!("Tabella C, {label} (Dottori Commercialisti)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_round_trips_all_codes() {
        let codes = [
            "r1", "r2", "r3", "r4", "r5_1", "r5_2", "r7_1", "r7_2", "r8_1", "r8_2", "r9",
            "r10_1", "r10_2", "r10_3", "r11",
        ];
        for code in codes {
            let schedule = ScheduleId::from_code(code).unwrap();
            assert_eq!(schedule.code(), code);
        }
    }

    #[test]
    fn test_from_code_unknown_is_none() {
        assert_eq!(ScheduleId::from_code("r99"), None);
        assert_eq!(ScheduleId::from_code(""), None);
    }

    #[test]
    fn test_serde_uses_wire_codes() {
        let json = serde_json::to_string(&ScheduleId::OrdinaryBookkeeping).unwrap();
        assert_eq!(json, "\"r5_1\"");

        let parsed: ScheduleId = serde_json::from_str("\"r10_3\"").unwrap();
        assert_eq!(parsed, ScheduleId::TaxConsulting);
    }

    #[test]
    fn test_normative_reference_plain_schedule() {
        let text = ScheduleId::Liquidation.normative_reference(None);
        assert!(text.starts_with("Art. 20"));
        assert!(text.contains("Riquadro 2"));
    }

    #[test]
    fn test_normative_reference_financial_consulting_subtypes() {
        let financing = ScheduleId::FinancialConsulting
            .normative_reference(Some("consulenza_finanziamenti"));
        assert!(financing.contains("comma 2"));

        let economic = ScheduleId::FinancialConsulting
            .normative_reference(Some("consulente_economico_finanziaria"));
        assert!(economic.contains("comma 3"));

        let generic = ScheduleId::FinancialConsulting.normative_reference(None);
        assert!(generic.contains("comma 2/3"));
    }

    #[test]
    fn test_normative_reference_for_unknown_code() {
        assert_eq!(
            normative_reference_for("r99", None),
            "Tabella C, r99 (Dottori Commercialisti)"
        );
        assert_eq!(
            normative_reference_for("", None),
            "Tabella C, Riquadro N/D (Dottori Commercialisti)"
        );
    }
}
