//! Evaluate endpoint.
//!
//! Exposes the heuristic text scorer as `POST /api/evaluate`. Stateless:
//! every request carries the reasoning text (and optionally a base score)
//! and gets back a full evaluation. Wire field names match the existing
//! clients, so they stay camelCase.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::drill::EvaluationResult;
use crate::scorer::heuristic_evaluation;

/// Request body for `POST /api/evaluate`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    pub code: Option<String>,
    pub prompt: Option<String>,
    pub reasoning: Option<String>,
    pub mc_score: Option<i64>,
    pub correct_count: Option<u32>,
}

/// Error body sent to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Endpoint failures, with their fixed client-facing messages.
#[derive(Error, Debug)]
pub enum EvaluateError {
    #[error("Missing reasoning text.")]
    MissingReasoning,

    #[error("Could not evaluate your answer.")]
    Internal,
}

impl IntoResponse for EvaluateError {
    fn into_response(self) -> Response {
        let status = match self {
            EvaluateError::MissingReasoning => StatusCode::BAD_REQUEST,
            EvaluateError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Score a request.
///
/// The reasoning text must be non-empty after trimming; everything else is
/// optional.
pub fn evaluate_request(payload: &EvaluateRequest) -> Result<EvaluationResult, EvaluateError> {
    let reasoning = payload
        .reasoning
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    if reasoning.is_empty() {
        return Err(EvaluateError::MissingReasoning);
    }
    Ok(heuristic_evaluation(reasoning, payload.mc_score))
}

async fn evaluate(
    Json(payload): Json<EvaluateRequest>,
) -> Result<Json<EvaluationResult>, EvaluateError> {
    evaluate_request(&payload).map(Json)
}

/// Build the endpoint router.
pub fn router() -> Router {
    Router::new().route("/api/evaluate", post(evaluate))
}

/// Serve the endpoint on `addr` until the process is stopped.
///
/// # Errors
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve(addr: &str) -> crate::error::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router()).await?;
    Ok(())
}
