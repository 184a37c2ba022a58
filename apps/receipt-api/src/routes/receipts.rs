//! # Receipt Routes
//!
//! Routes:
//! - POST /receipts/process - store a receipt, returns `{ "id": ... }`
//! - GET  /receipts/{id}/points - score a stored receipt, returns `{ "points": ... }`
//!
//! Handlers only shape requests and responses; storage and scoring live in
//! `receipt-store`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use receipt_core::Receipt;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::AppState;

/// Response for a stored receipt.
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// Response for a points lookup.
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
}

/// POST /receipts/process
async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let Json(receipt) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected receipt payload");
        ApiError::from(rejection)
    })?;

    info!(retailer = %receipt.retailer, "Received request to process receipt");
    let id = state.store.submit(receipt);

    Ok(Json(ProcessResponse { id }))
}

/// GET /receipts/{id}/points
async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    info!(%id, "Received request to calculate points");
    let points = state.store.score(&id)?;

    Ok(Json(PointsResponse { points }))
}
