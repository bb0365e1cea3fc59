//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ReceiptRepository::get("42")                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError::NotFound (this module)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in points-api) ← 404 "No receipt found for that ID."        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Receipt store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No receipt was ever stored under this ID.
    #[error("Receipt not found: {id}")]
    NotFound { id: String },
}

impl StoreError {
    /// Creates a NotFound error for the given ID.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
