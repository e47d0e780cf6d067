//! HTTP request handlers for the engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    DetectionContext, ExceptionFinding, RoutingDecision, allocate_batch, calculate_withholding,
    detect_exceptions, evaluate_ledger, next_action, submit, validate_distribution,
};
use crate::models::{AuthorizationState, FundingUnit, LineItem};

use super::request::{
    AccountabilityRequest, BatchAllocationRequest, DistributionRequest, EvaluateRequest,
    WithholdingRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/withholding/calculate", post(withholding_handler))
        .route("/distributions/validate", post(distribution_handler))
        .route("/requests/evaluate", post(evaluate_handler))
        .route("/accountability/evaluate", post(accountability_handler))
        .route("/batches/allocate", post(batch_handler))
        .with_state(state)
}

/// Response body for `POST /distributions/validate`.
#[derive(Debug, Serialize)]
struct DistributionResponse {
    is_valid: bool,
}

/// Response body for `POST /requests/evaluate`.
#[derive(Debug, Serialize)]
struct EvaluateResponse {
    /// Every exceeded limit in the current snapshot.
    findings: Vec<ExceptionFinding>,
    /// The state the request would enter if submitted now: straight to
    /// authorized when the findings are empty, into the chain otherwise.
    state_on_submit: AuthorizationState,
    /// What the viewing role must do with the request as it stands.
    decision: RoutingDecision,
}

/// Maps a JSON extraction rejection to a typed API error, shared by all
/// handlers below.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
}

/// Handler for `POST /withholding/calculate`.
async fn withholding_handler(
    State(state): State<AppState>,
    payload: Result<Json<WithholdingRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing withholding request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_to_error(correlation_id, rejection).into_response(),
    };

    let rates = match state.config().tax_rates(request.fiscal_year) {
        Ok(rates) => rates,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                fiscal_year = request.fiscal_year,
                "Tax rates not found"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    match calculate_withholding(request.gross_value, request.iss_rate, rates) {
        Ok(withholding) => {
            info!(
                correlation_id = %correlation_id,
                gross = %withholding.gross_value,
                net = %withholding.net_value,
                "Withholding calculated"
            );
            (StatusCode::OK, Json(withholding)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Withholding failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `POST /distributions/validate`.
async fn distribution_handler(
    payload: Result<Json<DistributionRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Validating distribution");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_to_error(correlation_id, rejection).into_response(),
    };

    match validate_distribution(&request.distribution) {
        Ok(is_valid) => (StatusCode::OK, Json(DistributionResponse { is_valid })).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Malformed distribution");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `POST /requests/evaluate`.
///
/// Recomputes line-item totals, detects exceptions against the configured
/// limits, and resolves the routing decision for the viewing role, all from
/// one consistent snapshot.
async fn evaluate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Evaluating request snapshot");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_to_error(correlation_id, rejection).into_response(),
    };

    let items: Vec<LineItem> = request.approved_items.into_iter().map(Into::into).collect();
    let participants: Vec<(&str, u32)> = request
        .approved_participants
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .collect();

    let ctx = DetectionContext {
        approved_participants: &participants,
        approved_items: &items,
        request_date: request.request_date,
        session_date: request.session_date,
        disbursement_date: request.disbursement_date,
        reference_date: request.reference_date,
    };

    let findings = detect_exceptions(&ctx, state.config().limits());
    let state_on_submit = submit(&findings);
    let decision = next_action(
        request.current_role,
        request.authorization_state,
        &request.attachments,
    );

    info!(
        correlation_id = %correlation_id,
        findings = findings.len(),
        blocked = decision.is_blocked,
        "Request evaluated"
    );

    (
        StatusCode::OK,
        Json(EvaluateResponse {
            findings,
            state_on_submit,
            decision,
        }),
    )
        .into_response()
}

/// Handler for `POST /accountability/evaluate`.
async fn accountability_handler(
    payload: Result<Json<AccountabilityRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Evaluating accountability ledger");

    let ledger = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_to_error(correlation_id, rejection).into_response(),
    };

    let report = evaluate_ledger(&ledger);
    info!(
        correlation_id = %correlation_id,
        is_valid = report.is_valid,
        dual_deposit = report.dual_deposit_required,
        "Ledger evaluated"
    );
    (StatusCode::OK, Json(report)).into_response()
}

/// Handler for `POST /batches/allocate`.
async fn batch_handler(
    payload: Result<Json<BatchAllocationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Allocating quarterly batch");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_to_error(correlation_id, rejection).into_response(),
    };

    let units: Vec<FundingUnit> = request.units.into_iter().map(Into::into).collect();
    let batch = allocate_batch(&units, &request.manually_excluded, request.year, request.quarter);

    info!(
        correlation_id = %correlation_id,
        processes = batch.process_count,
        total_quarter = %batch.total_quarter_value,
        "Batch allocated"
    );
    (StatusCode::OK, Json(batch)).into_response()
}
