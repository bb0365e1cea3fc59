//! # points-core: Pure Scoring Engine for Receipt Points
//!
//! This crate is the **heart** of Receipt Points. It turns a receipt into a
//! points score as a pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Points Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP Client                                  │   │
//! │  │    POST /receipts/process ──► GET /receipts/{id}/points         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    points-api (axum)                            │   │
//! │  │    process_receipt, get_points                                  │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────┐  ┌────────────▼────────────────────┐  │
//! │  │  points-store               │  │  ★ points-core (THIS CRATE) ★   │  │
//! │  │  ReceiptStore, IdGenerator  │  │                                 │  │
//! │  └─────────────────────────────┘  │   types · amount · validation   │  │
//! │                                   │   scoring                       │  │
//! │                                   │                                 │  │
//! │                                   │   NO I/O • NO STATE • NO LOGS   │  │
//! │                                   └─────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Receipt, Item, Points
//! - [`amount`] - Decimal amounts parsed from receipt text
//! - [`validation`] - Field parsers for totals, prices, dates and times
//! - [`scoring`] - The rules and the score breakdown
//! - [`error`] - Scoring error types
//!
//! ## Example Usage
//!
//! ```rust
//! use points_core::{score, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     total: "9.00".to_string(),
//!     items: vec![Item::new("Gatorade", "2.25"); 4],
//! };
//!
//! assert_eq!(score(&receipt).unwrap().value(), 109);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod error;
pub mod scoring;
pub mod types;
pub mod validation;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use amount::Amount;
pub use error::{DateFormatError, ScoringError, ScoringResult, TimeFormatError};
pub use scoring::{score, score_breakdown, ScoreBreakdown};
pub use types::*;

// =============================================================================
// Rule Constants
// =============================================================================

/// Bonus when the total has no cents.
pub const ROUND_DOLLAR_POINTS: f64 = 50.0;

/// Bonus when the total is a multiple of 0.25.
pub const QUARTER_MULTIPLE_POINTS: f64 = 25.0;

/// Earned for every two items on the receipt.
pub const ITEM_PAIR_POINTS: f64 = 5.0;

/// Share of an item's price earned when its trimmed description length is a
/// multiple of 3. The product is rounded up.
pub const DESCRIPTION_PRICE_RATE: f64 = 0.2;

/// Totals strictly above this earn [`HIGH_TOTAL_POINTS`].
pub const HIGH_TOTAL_THRESHOLD: f64 = 10.0;

pub const HIGH_TOTAL_POINTS: f64 = 5.0;

/// Bonus for a purchase on an odd day of the month.
pub const ODD_DAY_POINTS: f64 = 6.0;

/// Bonus for a purchase after 14:00 and before 16:00.
pub const AFTERNOON_POINTS: f64 = 10.0;
