//! # Error Types
//!
//! Scoring error types for points-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  points-core errors (this file)                                        │
//! │  ├── ScoringError      - Why a receipt could not be scored             │
//! │  ├── DateFormatError   - purchaseDate problems                         │
//! │  └── TimeFormatError   - purchaseTime problems                         │
//! │                                                                         │
//! │  points-store errors (separate crate)                                  │
//! │  └── StoreError        - Unknown receipt ID                            │
//! │                                                                         │
//! │  points-api errors (in app)                                            │
//! │  └── ApiError          - What the HTTP client sees                     │
//! │                                                                         │
//! │  Flow: DateFormatError → ScoringError → ApiError → 400 response        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed score is never a number. Every failure is a variant here, so a
//! zero score and a malformed receipt can't be confused.

use thiserror::Error;

// =============================================================================
// Scoring Error
// =============================================================================

/// Reasons a receipt cannot be scored.
///
/// Any of these aborts the remaining rules; there is no partial score.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// `total` is not a non-negative decimal number.
    #[error("total '{value}' is not a valid amount")]
    TotalParse { value: String },

    /// The price of a scored item is not a non-negative decimal number.
    ///
    /// ## When This Occurs
    /// Only items whose trimmed description length is a multiple of 3 have
    /// their price parsed, so a bad price on any other item goes unnoticed.
    #[error("price '{value}' of item {index} is not a valid amount")]
    ItemPriceParse { index: usize, value: String },

    /// `purchaseDate` could not be read.
    #[error("invalid purchase date: {0}")]
    DateFormat(#[from] DateFormatError),

    /// `purchaseTime` could not be read.
    #[error("invalid purchase time: {0}")]
    TimeFormat(#[from] TimeFormatError),
}

impl ScoringError {
    /// Short machine-readable name of the failure, for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ScoringError::TotalParse { .. } => "total_parse",
            ScoringError::ItemPriceParse { .. } => "item_price_parse",
            ScoringError::DateFormat(_) => "date_format",
            ScoringError::TimeFormat(_) => "time_format",
        }
    }
}

// =============================================================================
// Date / Time Errors
// =============================================================================

/// `purchaseDate` failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateFormatError {
    /// Fewer than three `-` separated components.
    #[error("'{value}' does not have year, month and day components")]
    MissingComponents { value: String },

    /// The day component is not an integer.
    #[error("day '{day}' in '{value}' is not an integer")]
    InvalidDay { value: String, day: String },
}

/// `purchaseTime` failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeFormatError {
    /// Not exactly two `:` separated components.
    #[error("'{value}' has {found} components, expected hour and minute")]
    ComponentCount { value: String, found: usize },

    #[error("hour '{hour}' in '{value}' is not an integer")]
    InvalidHour { value: String, hour: String },

    #[error("minute '{minute}' in '{value}' is not an integer")]
    InvalidMinute { value: String, minute: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ScoringError.
pub type ScoringResult<T> = Result<T, ScoringError>;

// =============================================================================
// Unit Tests
// =============================================================================
