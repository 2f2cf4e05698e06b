//! Request types for the fee schedule engine API.
//!
//! This module defines the JSON envelope for the `/documents` endpoint.

use serde::{Deserialize, Serialize};

use crate::models::{CalculationInput, ComputationResult, ProfessionalProfile};

/// Request body for the `/documents` endpoint.
///
/// Carries the schedule code, the caller-chosen selection criterion, the
/// shared calculation input record, the upstream computation result, and
/// the issuing professional's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    /// The professional issuing the document.
    pub professional: ProfessionalProfile,
    /// The schedule wire code ("r1" … "r11"); unknown codes degrade to a
    /// placeholder document rather than an error.
    pub schedule_id: String,
    /// The criterion used upstream to choose the reference value.
    #[serde(default)]
    pub criterion: String,
    /// The shared calculation input record.
    pub input: CalculationInput,
    /// The upstream computation result, consumed read-only.
    #[serde(default)]
    pub result: ComputationResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawValue;

    #[test]
    fn test_deserialize_document_request() {
        let json = r#"{
            "professional": {
                "nome": "Maria",
                "cognome": "Bianchi",
                "email": "maria@studio.it",
                "professione": "Dottore Commercialista"
            },
            "scheduleId": "r9",
            "criterion": "medio",
            "input": {
                "valore": "2.500.000,00",
                "esitoNegativo": true
            },
            "result": {
                "min": 20500,
                "max": 33500,
                "chosen": 27000
            }
        }"#;

        let request: DocumentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.schedule_id, "r9");
        assert_eq!(request.criterion, "medio");
        assert_eq!(request.professional.first_name, "Maria");
        assert!(request.input.negative_outcome);
        assert_eq!(request.result.chosen, Some(RawValue::Number(27000.0)));
    }

    #[test]
    fn test_criterion_and_result_default() {
        let json = r#"{
            "professional": { "nome": "A", "cognome": "B", "email": "", "professione": "" },
            "scheduleId": "r1",
            "input": {}
        }"#;

        let request: DocumentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.criterion, "");
        assert_eq!(request.result, ComputationResult::default());
    }
}
