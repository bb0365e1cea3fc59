//! # Domain Types
//!
//! Receipt types shared by the store and the HTTP layer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────┐              │
//! │  │       Receipt        │ 1    * │        Item          │              │
//! │  │  ──────────────────  │───────►│  ──────────────────  │              │
//! │  │  retailer            │        │  short_description   │              │
//! │  │  purchase_date       │        │  price (text)        │              │
//! │  │  purchase_time       │        └──────────────────────┘              │
//! │  │  total (text)        │                                               │
//! │  │  items               │        ┌──────────────────────┐              │
//! │  └──────────────────────┘        │       Points         │              │
//! │                                  │  u64, never negative │              │
//! │                                  └──────────────────────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Text Fields Stay Text
//! Amounts, dates and times are kept exactly as submitted. A receipt with a
//! garbled total is still a valid `Receipt`; it only fails when scored.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use std::fmt;

// =============================================================================
// Item
// =============================================================================

/// A single line entry on a receipt.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    /// Free-form description, e.g. `"Mountain Dew 12PK"`.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub short_description: String,

    /// Price as decimal text, e.g. `"6.49"`.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub price: String,
}

impl Item {
    /// Creates an item from its description and price text.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A purchase record submitted for scoring.
///
/// ## JSON Shape
/// ```json
/// {
///   "retailer": "Target",
///   "purchaseDate": "2022-01-01",
///   "purchaseTime": "13:01",
///   "total": "35.35",
///   "items": [{ "shortDescription": "Pepsi - 12-oz", "price": "1.25" }]
/// }
/// ```
/// Missing and `null` fields decode to empty values.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub retailer: String,

    /// `YYYY-MM-DD`
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub purchase_date: String,

    /// `HH:MM`, 24 hour clock
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub purchase_time: String,

    /// Total as decimal text.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total: String,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub items: Vec<Item>,
}

impl Receipt {
    /// Returns the number of line items.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

// =============================================================================
// Points
// =============================================================================

/// The integer reward computed from a receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Points(u64);

impl Points {
    #[inline]
    pub const fn new(points: u64) -> Self {
        Points(points)
    }

    /// Truncates an accumulated float total to whole points.
    ///
    /// The fractional part is dropped, never rounded. Negative or `NaN`
    /// input saturates to zero.
    pub fn truncate(total: f64) -> Self {
        // `as` truncates toward zero and saturates
        Points(total as u64)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
