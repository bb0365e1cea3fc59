//! Error types for the Points API.
//!
//! Clients only ever see one of two fixed messages. The detailed cause is
//! logged, not returned.

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use points_core::ScoringError;
use points_store::StoreError;
use tracing::warn;

/// Body returned for every 400 response.
pub const BAD_REQUEST_MESSAGE: &str = "Please verify input.";

/// Body returned for every 404 response.
pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that ID.";

/// Points API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body is not a receipt.
    #[error("Malformed receipt: {0}")]
    MalformedReceipt(String),

    /// The receipt was stored but cannot be scored.
    #[error("Receipt cannot be scored: {0}")]
    Scoring(#[from] ScoringError),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedReceipt(_) | ApiError::Scoring(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Fixed message sent to the client.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::MalformedReceipt(_) | ApiError::Scoring(_) => BAD_REQUEST_MESSAGE,
            ApiError::NotFound(_) => NOT_FOUND_MESSAGE,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::MalformedReceipt(_) => "malformed_receipt",
            ApiError::Scoring(e) => e.kind(),
            ApiError::NotFound(_) => "not_found",
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { id } => ApiError::NotFound(id),
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::MalformedReceipt(rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::MalformedReceipt(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(kind = self.kind(), error = %self, "Request rejected");
        (self.status(), self.public_message()).into_response()
    }
}
