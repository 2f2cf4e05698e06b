//! Integration tests for the fee schedule engine.
//!
//! This test suite covers the full pipeline through the HTTP layer:
//! - Tiered schedules (proportional, multi-component, fixed-fee)
//! - Compliance outcomes (compliant, below threshold, undetermined)
//! - Placeholder behavior for unknown schedules
//! - Pagination and footer stamping of the rendered PDF
//! - Error cases (malformed JSON, missing fields)

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use compenso_engine::api::{AppState, create_router};
use compenso_engine::config::{ConfigLoader, LetterheadConfig};
use compenso_engine::document::generate_document;
use compenso_engine::models::{
    CalculationInput, ComputationResult, ProfessionalProfile, RawValue,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    create_router(AppState::new(LetterheadConfig::default()))
}

fn contains(haystack: &[u8], needle: &str) -> bool {
    let needle = needle.as_bytes();
    haystack.windows(needle.len()).any(|w| w == needle)
}

fn count(haystack: &[u8], needle: &str) -> usize {
    let needle = needle.as_bytes();
    haystack
        .windows(needle.len())
        .filter(|w| *w == needle)
        .count()
}

fn professional() -> Value {
    json!({
        "nome": "Maria",
        "cognome": "Bianchi",
        "email": "maria@studio.it",
        "professione": "Dottore Commercialista"
    })
}

async fn post_document(router: Router, body: Value) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/documents")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, disposition, bytes.to_vec())
}

// =============================================================================
// End-to-end document generation over HTTP
// =============================================================================

/// E2E-001: proportional schedule renders a complete compliant document
#[tokio::test]
async fn test_valuation_document_end_to_end() {
    let body = json!({
        "professional": professional(),
        "scheduleId": "r3",
        "criterion": "percentuale",
        "input": {
            "nome_pratica": "Perizia 2026/14",
            "cliente_nome": "Rossi S.r.l.",
            "valore": "4.000.000,00",
            "percentuale": 50,
            "corrispettivoPattuito": 21000
        },
        "result": {
            "min": 18250,
            "max": 24500,
            "chosen": 21375
        }
    });

    let (status, disposition, bytes) = post_document(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        disposition.as_deref(),
        Some("attachment; filename=\"Perizia_202614_Rossi_Srl.pdf\"")
    );
    assert!(bytes.starts_with(b"%PDF"));

    // Tier rows with the statutory boundaries and the grand total
    assert!(contains(&bytes, "Fino a 1.000.000"));
    assert!(contains(&bytes, "Oltre 3.000.000"));
    assert!(contains(&bytes, "Somma fasce"));
    // Input echo and modifier disclosure
    assert!(contains(&bytes, "Valore di riferimento"));
    assert!(contains(&bytes, "Percentuale"));
    assert!(contains(&bytes, "0%=min, 100%=max"));
    // Compliance summary
    assert!(contains(&bytes, "Parametro Ministeriale"));
    assert!(contains(&bytes, "Stato Conformit"));
}

/// E2E-002: below-threshold agreed fee is flagged with delta and percent
#[tokio::test]
async fn test_below_threshold_document() {
    let body = json!({
        "professional": professional(),
        "scheduleId": "r10_2",
        "criterion": "minimo",
        "input": {
            "valore": 100000,
            "corrispettivoPattuito": 700
        },
        "result": {
            "min": 800,
            "max": 5000,
            "chosen": 1000
        }
    });

    let (status, _, bytes) = post_document(create_router_for_test(), body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(contains(&bytes, "SOTTO SOGLIA"));
    assert!(contains(&bytes, "-30.00%"));
    assert!(contains(&bytes, "Esito: corrispettivo sotto soglia"));
    assert!(contains(&bytes, "Valore medio"));
}

/// E2E-003: fixed-fee checklist sums the selected items
#[tokio::test]
async fn test_fixed_fee_checklist_document() {
    let body = json!({
        "professional": professional(),
        "scheduleId": "r10_1",
        "criterion": "fisso",
        "input": {
            "dichiarazioniMulti": ["pf_no_piva", "iva"]
        },
        "result": { "chosen": 400 }
    });

    let (status, _, bytes) = post_document(create_router_for_test(), body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(contains(&bytes, "Redditi Persone Fisiche"));
    assert!(contains(&bytes, "Dichiarazione IVA"));
    assert!(contains(&bytes, "Somma tariffe fisse"));
    assert!(contains(
        &bytes,
        "Calcolo a tariffe fisse: somma delle voci selezionate."
    ));
}

/// E2E-004: supervisory board document with role and step rows
#[tokio::test]
async fn test_supervisory_board_document() {
    let body = json!({
        "professional": professional(),
        "scheduleId": "r11",
        "criterion": "massimo",
        "input": {
            "valore": 900000000,
            "valore2": 50000000,
            "ruoloSindaco": "sindaco_unico",
            "riduzioneComma2": true
        },
        "result": {}
    });

    let (status, _, bytes) = post_document(create_router_for_test(), body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(contains(&bytes, "Base fissa"));
    assert!(contains(&bytes, "Sommatoria reddito + attivit"));
    // 150M over 800M: 2 started steps
    assert!(contains(&bytes, "Scatti: 2"));
    assert!(contains(&bytes, "Aumento: Sindaco Unico"));
    assert!(contains(&bytes, "+100%"));
    assert!(contains(&bytes, "godimento o liquidazione"));
}

/// E2E-005: unknown schedule degrades to a placeholder document
#[tokio::test]
async fn test_unknown_schedule_document() {
    let body = json!({
        "professional": professional(),
        "scheduleId": "r42",
        "criterion": "",
        "input": {},
        "result": {}
    });

    let (status, _, bytes) = post_document(create_router_for_test(), body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(contains(&bytes, "Tabella C, r42"));
    assert!(contains(&bytes, "Scaglioni non disponibili"));
    assert!(contains(&bytes, "Nessun dato disponibile"));
    assert!(contains(&bytes, "Nessun modificatore applicato."));
}

/// E2E-006: filename falls back to an opaque identifier
#[tokio::test]
async fn test_opaque_filename_fallback() {
    let body = json!({
        "professional": professional(),
        "scheduleId": "r1",
        "criterion": "medio",
        "input": { "valore": 30000 },
        "result": {}
    });

    let (status, disposition, _) = post_document(create_router_for_test(), body).await;
    assert_eq!(status, StatusCode::OK);
    let disposition = disposition.unwrap();
    // attachment; filename="<32 hex chars>.pdf"
    let name = disposition
        .trim_start_matches("attachment; filename=\"")
        .trim_end_matches("\"")
        .trim_end_matches(".pdf");
    assert_eq!(name.len(), 32, "disposition was {disposition}");
}

// =============================================================================
// Pagination
// =============================================================================

/// E2E-007: a dense document paginates, repeating header and footer
#[tokio::test]
async fn test_pagination_repeats_header_and_footer() {
    let items: Vec<&str> = vec![
        "pf_no_piva",
        "pf_piva",
        "soc_persone",
        "soc_capitali",
        "irap",
        "iva",
        "sostituti",
        "successione",
        "altre",
        "invio",
    ];
    let body = json!({
        "professional": professional(),
        "scheduleId": "r10_1",
        "criterion": "fisso",
        "input": {
            "nome_pratica": "Dichiarazioni annuali dello studio con descrizione estesa",
            "cliente_nome": "Immobiliare Esempio S.p.A. - sede legale di Milano",
            "dichiarazioniMulti": items,
            "percentuale": 50,
            "corrispettivoPattuito": 2500
        },
        "result": { "min": 2840, "max": 2840, "chosen": 2840 }
    });

    let (status, _, bytes) = post_document(create_router_for_test(), body).await;
    assert_eq!(status, StatusCode::OK);

    let pages = count(&bytes, "EQUO COMPENSO");
    assert!(pages >= 2, "expected a multi-page document, got {pages} page(s)");
    // Footer stamped on every page with the final count
    for page in 1..=pages {
        assert!(
            contains(&bytes, &format!("Pagina {page} di {pages}")),
            "missing footer for page {page} of {pages}"
        );
    }
    // Legal disclaimer appears once per page
    assert_eq!(count(&bytes, "ai sensi della Legge 49/2023."), pages);
}

// =============================================================================
// Error cases
// =============================================================================

/// E2E-008: malformed JSON is a 400 with a structured error
#[tokio::test]
async fn test_malformed_json() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/documents")
                .header("Content-Type", "application/json")
                .body(Body::from("{ not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error["code"], "MALFORMED_JSON");
}

/// E2E-009: missing required fields are a validation error
#[tokio::test]
async fn test_missing_fields() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/documents")
                .header("Content-Type", "application/json")
                .body(Body::from(json!({ "criterion": "medio" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Library-level pipeline
// =============================================================================

/// E2E-010: repository configuration loads and renders
#[test]
fn test_repo_config_renders() {
    let loader = ConfigLoader::load("config").unwrap();
    let input = CalculationInput {
        primary_value: Some(RawValue::Number(2_500_000.0)),
        negative_outcome: true,
        ..CalculationInput::default()
    };
    let result = ComputationResult {
        min: Some(RawValue::Number(20_500.0)),
        max: Some(RawValue::Number(33_500.0)),
        chosen: Some(RawValue::Number(27_000.0)),
        ..ComputationResult::default()
    };

    let document = generate_document(
        loader.letterhead(),
        &ProfessionalProfile::default(),
        "r9",
        "medio",
        &input,
        &result,
        chrono::Utc::now(),
    )
    .unwrap();

    assert!(document.bytes.starts_with(b"%PDF"));
    assert!(contains(&document.bytes, "Riduzione: esito negativo"));
    assert!(contains(&document.bytes, "Fino a 1.000.000"));
}

/// E2E-011: generation is deterministic for identical input
#[test]
fn test_generation_is_deterministic() {
    let letterhead = LetterheadConfig::default();
    let input = CalculationInput {
        practice_name: Some("Pratica".to_string()),
        primary_value: Some(RawValue::Number(30_000.0)),
        ..CalculationInput::default()
    };
    let result = ComputationResult::default();
    let at = chrono::DateTime::parse_from_rfc3339("2026-03-15T10:30:00Z")
        .unwrap()
        .with_timezone(&chrono::Utc);

    let first = generate_document(
        &letterhead,
        &ProfessionalProfile::default(),
        "r1",
        "medio",
        &input,
        &result,
        at,
    )
    .unwrap();
    let second = generate_document(
        &letterhead,
        &ProfessionalProfile::default(),
        "r1",
        "medio",
        &input,
        &result,
        at,
    )
    .unwrap();

    assert_eq!(first.bytes, second.bytes);
    assert_eq!(first.suggested_filename, second.suggested_filename);
}
