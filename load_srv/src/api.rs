//! # HTTP API
//!
//! Routes and handlers for the calculation service. The service is fully
//! stateless: handlers carry no shared state and every request is an
//! independent pure computation over its body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::wire::{self, Outcome};

/// Service name reported by /health
pub const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");

/// Service version reported by /health
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wire-level error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Wire-level informational response
#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

/// Create the API router.
///
/// CORS is permissive: the service historically fronted a browser UI served
/// from a different origin.
pub fn create_router() -> Router {
    Router::new()
        .route("/api/calculate", post(calculate))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Health probe
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": SERVICE_VERSION,
    }))
}

/// Run one service load calculation.
///
/// The body is taken as a raw string so malformed JSON maps to the same
/// `{"error": ...}` + 400 contract as engine-level rejections.
async fn calculate(body: String) -> Response {
    let value: serde_json::Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("rejecting malformed request body: {e}");
            return error_response(format!("Invalid JSON body: {e}"));
        }
    };

    match wire::process(&value) {
        Ok(Outcome::Report(report)) => {
            tracing::info!(
                units = report.units.len(),
                total_watts = report.total_watts,
                service_ocp = report.service_ocp,
                "calculated service load"
            );
            Json(report).into_response()
        }
        Ok(Outcome::NoValidUnits) => Json(MessageResponse {
            message: wire::MSG_NO_VALID_UNITS,
        })
        .into_response(),
        Ok(Outcome::NoLoad) => Json(MessageResponse {
            message: wire::MSG_NO_LOAD,
        })
        .into_response(),
        Err(e) => {
            tracing::warn!(code = e.error_code(), "calculation rejected: {e}");
            error_response(e.to_string())
        }
    }
}

fn error_response(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response()
}
