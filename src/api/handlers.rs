//! HTTP request handlers for the settlement API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::SettlementInput;

use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a [`SettlementInput`] body and returns the settlement report.
/// Dates are validated by the calculator, so a bad date yields `PARSE_ERROR`
/// rather than a deserialization error.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettlementInput>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing settlement request");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: rejection_to_error(correlation_id, rejection),
            }
            .into_response();
        }
    };

    match state.calculator().compute_report(&input) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                calculation_id = %report.calculation_id,
                net_total = %report.result.net_total,
                warnings = report.audit_trace.warnings.len(),
                duration_us = report.audit_trace.duration_us,
                "Settlement computed successfully"
            );
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Settlement calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}
