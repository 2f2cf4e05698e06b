//! Output models: tier rows, compliance verdicts, rendered documents.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RawValue;

/// The range computed upstream from the schedule, consumed read-only.
///
/// The selection of `chosen` from the range (criterion or percentage
/// position) happens before this engine runs; values may arrive as numbers
/// or formatted strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComputationResult {
    /// The minimum of the statutory range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<RawValue>,
    /// The midpoint of the statutory range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid: Option<RawValue>,
    /// The maximum of the statutory range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<RawValue>,
    /// The reference value chosen within the range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chosen: Option<RawValue>,
    /// The agreed fee as echoed by the upstream computation.
    #[serde(
        default,
        rename = "compenso_pattuito",
        skip_serializing_if = "Option::is_none"
    )]
    pub agreed: Option<RawValue>,
}

/// One rendered row of the computation trail.
///
/// Rows carry a short label, a descriptive middle column, and an amount
/// (or amount range) already formatted as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRow {
    /// Short row label ("Fascia 1", "Totale", …).
    pub label: String,
    /// Description of the tier quota and rate.
    pub description: String,
    /// Formatted amount or amount range.
    pub amount: String,
}

impl TierRow {
    /// Creates a row from its three cells.
    pub fn new(
        label: impl Into<String>,
        description: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
            amount: amount.into(),
        }
    }

    /// The placeholder emitted when a schedule yields no tier rows.
    pub fn tier_placeholder() -> Self {
        Self::new("N/D", "Scaglioni non disponibili per questo riquadro", "-")
    }

    /// The placeholder emitted when no input rows are available.
    pub fn input_placeholder() -> Self {
        Self::new("N/D", "Nessun dato disponibile", "-")
    }

    /// The three cells of the row, in column order.
    pub fn cells(&self) -> [&str; 3] {
        [&self.label, &self.description, &self.amount]
    }
}

/// Output of the tier calculator: echoed inputs plus itemized tier math.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierBreakdown {
    /// Rows echoing the raw calculation inputs.
    pub input_rows: Vec<TierRow>,
    /// Rows itemizing the per-tier math.
    pub tier_rows: Vec<TierRow>,
}

/// Regulatory compliance status of an agreed fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// The agreed fee meets or exceeds the statutory minimum.
    Compliant,
    /// The agreed fee falls below the statutory minimum.
    BelowThreshold,
    /// Neither an agreed fee nor a delta could be computed.
    Undetermined,
}

/// The outcome of comparing an agreed fee against the reference value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceVerdict {
    /// Agreed fee minus reference value, when both are known.
    pub delta: Option<Decimal>,
    /// Delta as a percentage of the reference, rounded to two decimals.
    pub percent_delta: Option<Decimal>,
    /// The derived compliance status.
    pub status: ComplianceStatus,
}

impl ComplianceVerdict {
    /// The percentage suffix rendered after status labels.
    ///
    /// Empty when the rounded percentage is exactly zero or unavailable.
    pub fn percent_suffix(&self) -> String {
        match self.percent_delta {
            Some(pct) if !pct.is_zero() => format!(" ({:.2}%)", pct),
            _ => String::new(),
        }
    }

    /// The status label rendered in the summary table.
    pub fn status_label(&self) -> String {
        match self.status {
            ComplianceStatus::Undetermined => "N/D".to_string(),
            ComplianceStatus::BelowThreshold => {
                format!("SOTTO SOGLIA{}", self.percent_suffix())
            }
            ComplianceStatus::Compliant => format!("CONFORME{}", self.percent_suffix()),
        }
    }
}

/// Caller-supplied metadata about the professional issuing the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalProfile {
    /// First name.
    #[serde(default, rename = "nome")]
    pub first_name: String,
    /// Last name.
    #[serde(default, rename = "cognome")]
    pub last_name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Profession label ("Dottore Commercialista", …).
    #[serde(default, rename = "professione")]
    pub profession: String,
}

impl ProfessionalProfile {
    /// The "generated by" line: profession plus full name, trimmed.
    pub fn generated_by(&self) -> String {
        let profession = if self.profession.is_empty() {
            "Professionista"
        } else {
            &self.profession
        };
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            profession.to_string()
        } else {
            format!("{profession} {name}")
        }
    }
}

/// A finished document with its suggested download filename.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// The complete document bytes; emitted only after finalization.
    pub bytes: Vec<u8>,
    /// Filename derived from practice/client names (without extension).
    pub suggested_filename: String,
    /// Number of pages laid out.
    pub page_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_computation_result_deserializes_mixed_values() {
        let json = r#"{
            "min": "8.000,00 €",
            "max": 16000,
            "chosen": 12000,
            "compenso_pattuito": "10.000,00 €"
        }"#;

        let result: ComputationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.min, Some(RawValue::Text("8.000,00 €".to_string())));
        assert_eq!(result.max, Some(RawValue::Number(16000.0)));
        assert_eq!(result.mid, None);
    }

    #[test]
    fn test_tier_row_placeholders() {
        let tier = TierRow::tier_placeholder();
        assert_eq!(tier.label, "N/D");
        assert_eq!(tier.amount, "-");

        let input = TierRow::input_placeholder();
        assert_eq!(input.description, "Nessun dato disponibile");
    }

    #[test]
    fn test_percent_suffix_omitted_when_zero() {
        let verdict = ComplianceVerdict {
            delta: Some(Decimal::ZERO),
            percent_delta: Some(Decimal::ZERO),
            status: ComplianceStatus::Compliant,
        };
        assert_eq!(verdict.percent_suffix(), "");
        assert_eq!(verdict.status_label(), "CONFORME");
    }

    #[test]
    fn test_status_label_includes_percentage() {
        let verdict = ComplianceVerdict {
            delta: Some(dec("-300")),
            percent_delta: Some(dec("-30.00")),
            status: ComplianceStatus::BelowThreshold,
        };
        assert_eq!(verdict.status_label(), "SOTTO SOGLIA (-30.00%)");
    }

    #[test]
    fn test_status_label_undetermined() {
        let verdict = ComplianceVerdict {
            delta: None,
            percent_delta: None,
            status: ComplianceStatus::Undetermined,
        };
        assert_eq!(verdict.status_label(), "N/D");
    }

    #[test]
    fn test_generated_by_defaults_profession() {
        let profile = ProfessionalProfile {
            first_name: "Maria".to_string(),
            last_name: "Bianchi".to_string(),
            email: "maria@studio.it".to_string(),
            profession: String::new(),
        };
        assert_eq!(profile.generated_by(), "Professionista Maria Bianchi");
    }

    #[test]
    fn test_generated_by_with_profession() {
        let profile = ProfessionalProfile {
            first_name: "Luca".to_string(),
            last_name: "Verdi".to_string(),
            email: String::new(),
            profession: "Dottore Commercialista".to_string(),
        };
        assert_eq!(profile.generated_by(), "Dottore Commercialista Luca Verdi");
    }
}
