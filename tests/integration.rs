//! Comprehensive integration tests for the Budget Allocation &
//! Authorization Engine API.
//!
//! This test suite covers all engine operations end to end:
//! - Tax withholding (default and overridden ISS, ceiling cap, bad input)
//! - Distribution validation
//! - Exception detection + routing evaluation
//! - Accountability reconciliation
//! - Quarterly batch allocation
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use suprimento_engine::api::{AppState, create_router};
use suprimento_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/sosfu").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn unit(id: &str, ceiling: &str, responsible: Option<&str>, status: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Comarca {id}"),
        "code": id.to_uppercase(),
        "responsible_id": responsible,
        "annual_ceiling": ceiling,
        "status": status
    })
}

// =============================================================================
// Withholding
// =============================================================================

#[tokio::test]
async fn test_withholding_thousand_gross_default_iss() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/withholding/calculate",
        json!({ "gross_value": "1000.00", "fiscal_year": 2025 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["inss_retained"], "110.00");
    assert_eq!(body["iss_retained"], "50.00");
    assert_eq!(body["net_value"], "840.00");
    assert_eq!(body["inss_patronal"], "200.00");
}

#[tokio::test]
async fn test_withholding_iss_override() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/withholding/calculate",
        json!({ "gross_value": "1000.00", "fiscal_year": 2025, "iss_rate": "0.03" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["iss_retained"], "30.00");
    assert_eq!(body["net_value"], "860.00");
}

#[tokio::test]
async fn test_withholding_gross_above_ceiling_caps_inss() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/withholding/calculate",
        json!({ "gross_value": "10000.00", "fiscal_year": 2025 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // Employee INSS base capped at 8157.41; ISS and patronal uncapped.
    assert_eq!(body["inss_retained"], "897.32");
    assert_eq!(body["iss_retained"], "500.00");
    assert_eq!(body["inss_patronal"], "2000.00");
}

#[tokio::test]
async fn test_withholding_negative_gross_rejected() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/withholding/calculate",
        json!({ "gross_value": "-5.00", "fiscal_year": 2025 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_withholding_unknown_fiscal_year_rejected() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/withholding/calculate",
        json!({ "gross_value": "100.00", "fiscal_year": 1999 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "TAX_RATES_NOT_FOUND");
}

// =============================================================================
// Distribution validation
// =============================================================================

#[tokio::test]
async fn test_distribution_five_way_split_valid() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/distributions/validate",
        json!({ "distribution": { "diarias": "30", "consumo": "25", "servicos": "20", "transporte": "15", "eventuais": "10" } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_valid"], true);
}

#[tokio::test]
async fn test_distribution_nudged_split_invalid() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/distributions/validate",
        json!({ "distribution": { "diarias": "31", "consumo": "25", "servicos": "20", "transporte": "15", "eventuais": "10" } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_valid"], false);
}

#[tokio::test]
async fn test_distribution_negative_percentage_is_hard_error() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/distributions/validate",
        json!({ "distribution": { "a": "105", "b": "-5" } }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
}

// =============================================================================
// Request evaluation (exceptions + routing)
// =============================================================================

#[tokio::test]
async fn test_evaluate_clean_request_authorizes_on_submit() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/requests/evaluate",
        json!({
            "approved_participants": { "jurors": 21, "police": 4 },
            "approved_items": [
                { "description": "Almoço", "element_code": "33.90.30",
                  "unit_value": "28.00", "quantity": "25", "is_auto": true,
                  "frequency_kind": "lunch" }
            ],
            "current_role": "suprido",
            "authorization_state": "pending"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["findings"].as_array().unwrap().len(), 0);
    assert_eq!(body["state_on_submit"], "authorized");
}

#[tokio::test]
async fn test_evaluate_police_excess_enters_chain() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/requests/evaluate",
        json!({
            "approved_participants": { "police": 8 },
            "current_role": "suprido",
            "authorization_state": "pending"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let findings = body["findings"].as_array().unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["kind"], "police_headcount");
    assert_eq!(findings[0]["excess"], "3");
    assert_eq!(body["state_on_submit"], "awaiting_manager");
    assert_eq!(body["decision"]["required_action"], "submit");
    assert_eq!(body["decision"]["is_blocked"], false);
}

#[tokio::test]
async fn test_evaluate_budget_office_blocked_without_justification() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/requests/evaluate",
        json!({
            "approved_participants": { "police": 8 },
            "current_role": "sosfu",
            "authorization_state": "awaiting_budget_office",
            "attachments": { "justification": false }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decision"]["required_action"], "forward_to_legal_finance");
    assert_eq!(body["decision"]["is_blocked"], true);
}

#[tokio::test]
async fn test_evaluate_budget_office_unblocked_with_justification() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/requests/evaluate",
        json!({
            "approved_participants": { "police": 8 },
            "current_role": "sosfu",
            "authorization_state": "awaiting_budget_office",
            "attachments": { "justification": true }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decision"]["is_blocked"], false);
}

#[tokio::test]
async fn test_evaluate_multiple_exceptions_surface_together() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/requests/evaluate",
        json!({
            "approved_participants": { "police": 9 },
            "approved_items": [
                { "description": "Lanche", "element_code": "33.90.30",
                  "unit_value": "14.00", "quantity": "30", "is_auto": true,
                  "frequency_kind": "snack" }
            ],
            "request_date": "2025-03-30",
            "session_date": "2025-04-02",
            "current_role": "gestor",
            "authorization_state": "awaiting_manager"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let kinds: Vec<&str> = body["findings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["kind"].as_str().unwrap())
        .collect();
    assert_eq!(kinds.len(), 3);
    assert!(kinds.contains(&"police_headcount"));
    assert!(kinds.contains(&"meal_snack_value"));
    assert!(kinds.contains(&"lead_time_insufficient"));
    assert_eq!(body["decision"]["required_action"], "attach_justification");
}

// =============================================================================
// Accountability reconciliation
// =============================================================================

#[tokio::test]
async fn test_accountability_dual_deposit_case() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        router.clone(),
        "/accountability/evaluate",
        json!({
            "total_received": "1000.00",
            "total_spent": "700.00",
            "total_inss_retained": "50.00",
            "total_iss_retained": "0.00"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_valid"], false);
    assert_eq!(body["dual_deposit_required"], true);
    assert_eq!(
        body["required_instruments"],
        json!(["inss_deposit", "balance_deposit"])
    );

    // Confirm both instruments: valid and the books close (700 + 300 = 1000).
    let (status, body) = post_json(
        router,
        "/accountability/evaluate",
        json!({
            "total_received": "1000.00",
            "total_spent": "700.00",
            "total_inss_retained": "50.00",
            "total_iss_retained": "0.00",
            "inss_deposit_confirmed": true,
            "balance_deposit_confirmed": true
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_valid"], true);
    assert_eq!(body["books_balance"], true);
}

#[tokio::test]
async fn test_accountability_nothing_spent_invalid() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/accountability/evaluate",
        json!({
            "total_received": "1000.00",
            "total_spent": "0.00",
            "total_inss_retained": "0.00",
            "total_iss_retained": "0.00",
            "balance_deposit_confirmed": true
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_valid"], false);
}

// =============================================================================
// Batch allocation
// =============================================================================

#[tokio::test]
async fn test_batch_three_unit_scenario() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/batches/allocate",
        json!({
            "year": 2025,
            "quarter": "q1",
            "units": [
                unit("u1", "60000.00", Some("p1"), "regular"),
                unit("u2", "48000.00", Some("p2"), "regular"),
                unit("u3", "0.00", None, "regular")
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["process_count"], 2);
    assert_eq!(body["total_annual_sum"], "108000.00");
    assert_eq!(body["total_quarter_value"], "36000.00");
    assert_eq!(body["document_count"], 6);
    assert_eq!(body["status"], "generated");
}

#[tokio::test]
async fn test_batch_manual_exclusion_and_no_responsible_guard() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/batches/allocate",
        json!({
            "year": 2025,
            "quarter": "q2",
            "units": [
                unit("u1", "60000.00", Some("p1"), "regular"),
                unit("u2", "48000.00", Some("p2"), "pending"),
                unit("u3", "36000.00", None, "pending")
            ],
            "manually_excluded": ["u2"]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["process_count"], 1);
    assert_eq!(body["total_annual_sum"], "60000.00");
    let excluded = body["excluded_unit_ids"].as_array().unwrap();
    assert_eq!(excluded.len(), 2);
}

#[tokio::test]
async fn test_batch_empty_units_is_valid_zero_batch() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/batches/allocate",
        json!({ "year": 2025, "quarter": "q3", "units": [] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["process_count"], 0);
    assert_eq!(body["document_count"], 0);
}

// =============================================================================
// Error handling
// =============================================================================

#[tokio::test]
async fn test_malformed_json_rejected() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/withholding/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{ not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_field_rejected() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/withholding/calculate",
        json!({ "fiscal_year": 2025 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}
