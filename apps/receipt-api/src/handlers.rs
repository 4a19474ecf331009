//! HTTP Handlers
//!
//! Thin adapters between axum extractors and [`ReceiptRepository`].
//!
//! [`ReceiptRepository`]: receipt_store::ReceiptRepository

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::Json;
use receipt_core::{PointsBreakdown, PointsResponse, ProcessedReceipt};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Body of `GET /`.
pub const ROOT_MESSAGE: &str = "Receipt processor backend server is running!";

/// Health check response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub receipts: usize,
    pub cached_scores: usize,
    pub version: &'static str,
}

/// Per-rule scores plus their sum.
#[derive(Debug, Serialize)]
pub struct BreakdownResponse {
    #[serde(flatten)]
    pub rules: PointsBreakdown,
    pub total: i64,
}

impl From<PointsBreakdown> for BreakdownResponse {
    fn from(rules: PointsBreakdown) -> Self {
        BreakdownResponse {
            total: rules.total(),
            rules,
        }
    }
}

/// `GET /`
pub async fn root() -> &'static str {
    ROOT_MESSAGE
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = state.repository.stats().await;

    Json(HealthResponse {
        status: "ok",
        receipts: stats.receipts,
        cached_scores: stats.cached_scores,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `POST /receipts/process`
///
/// The body is read as raw bytes so that an empty body reaches the
/// validator as a missing receipt instead of failing JSON extraction.
pub async fn process_receipt(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<ProcessedReceipt>> {
    let payload = parse_payload(&body?)?;

    match state.repository.submit(payload.as_ref()).await {
        Ok(id) => Ok(Json(id.into())),
        Err(err) => {
            warn!(error = %err, "Receipt rejected");
            Err(err.into())
        }
    }
}

/// `GET /receipts/{id}`
///
/// Returns the receipt exactly as it was submitted.
pub async fn get_receipt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let receipt = state.repository.receipt(&id).await?;
    Ok(Json(receipt))
}

/// `GET /receipts/{id}/points`
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = state.repository.points(&id).await?;
    Ok(Json(PointsResponse { points }))
}

/// `GET /receipts/{id}/breakdown`
pub async fn get_breakdown(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BreakdownResponse>> {
    let breakdown = state.repository.breakdown(&id).await?;
    Ok(Json(breakdown.into()))
}

/// Fallback for unknown paths.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Empty or whitespace-only bodies are a missing receipt.
fn parse_payload(body: &[u8]) -> ApiResult<Option<Value>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    Ok(Some(serde_json::from_slice(body)?))
}
