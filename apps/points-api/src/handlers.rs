//! HTTP handlers.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET  /                      ──► usage()          200 text              │
//! │                                                                         │
//! │  POST /receipts/process      ──► process_receipt()                      │
//! │        body: receipt JSON          200 {"id": "1"}                      │
//! │                                    400 Please verify input.             │
//! │                                                                         │
//! │  GET  /receipts/{id}/points  ──► get_points()                           │
//! │                                    200 {"points": 109}                  │
//! │                                    404 No receipt found for that ID.    │
//! │                                    400 Please verify input.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::Json;
use points_core::{score_breakdown, Points, Receipt};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::AppState;

/// Text served at `/`.
pub const USAGE: &str = "Fetch rewards rocks!\nUsage:\n1. /receipts/process as POST with json data to get id\n2. /receipts/{id}/points to get the points associated with id";

/// Response to a stored receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// Response to a points lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: Points,
}

/// Usage text.
pub async fn usage() -> &'static str {
    USAGE
}

/// Decodes a receipt, stores it and returns its new ID.
///
/// The body is read as raw bytes so a missing or wrong `Content-Type` header
/// doesn't matter; only the JSON itself is checked. The receipt is not
/// scored here, so a receipt with a garbled total is still accepted.
pub async fn process_receipt(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ProcessReceiptResponse>, ApiError> {
    let receipt: Receipt = serde_json::from_slice(&body?)?;

    let record = state.store.save(receipt).await;
    let stored = state.store.receipts().count().await;
    info!(
        id = %record.id,
        retailer = %record.receipt.retailer,
        items = record.receipt.item_count(),
        stored = stored,
        "Receipt stored"
    );

    Ok(Json(ProcessReceiptResponse { id: record.id }))
}

/// Looks up a stored receipt and scores it.
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let record = state.store.receipts().get(&id).await?;

    let breakdown = score_breakdown(&record.receipt)?;
    let points = breakdown.points();
    debug!(
        id = %id,
        received_at = %record.received_at,
        points = %points,
        breakdown = ?breakdown,
        "Receipt scored"
    );

    Ok(Json(PointsResponse { points }))
}
