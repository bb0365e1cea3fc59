//! # Validation Module
//!
//! Field parsers used by the scoring rules.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP (points-api)                                            │
//! │  └── JSON shape only: every field must be a string, items a list       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store (points-store)                                         │
//! │  └── Nothing. Malformed receipts are stored as-is.                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Scoring (THIS MODULE)                                        │
//! │  ├── total / price  → Amount                                           │
//! │  ├── purchaseDate   → day of month                                     │
//! │  └── purchaseTime   → hour and minute                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use points_core::validation::{parse_purchase_day, parse_purchase_time};
//!
//! assert_eq!(parse_purchase_day("2022-03-20").unwrap(), 20);
//!
//! let time = parse_purchase_time("14:33").unwrap();
//! assert_eq!((time.hour, time.minute), (14, 33));
//! ```

use crate::amount::Amount;
use crate::error::{DateFormatError, ScoringError, ScoringResult, TimeFormatError};

// =============================================================================
// Amount Parsers
// =============================================================================

/// Parses the receipt total.
pub fn parse_total(total: &str) -> ScoringResult<Amount> {
    Amount::parse(total).ok_or_else(|| ScoringError::TotalParse {
        value: total.to_string(),
    })
}

/// Parses the price of the item at `index`.
pub fn parse_item_price(index: usize, price: &str) -> ScoringResult<Amount> {
    Amount::parse(price).ok_or_else(|| ScoringError::ItemPriceParse {
        index,
        value: price.to_string(),
    })
}

// =============================================================================
// Date Parser
// =============================================================================

/// Extracts the day of month from a `YYYY-MM-DD` date.
///
/// ## Rules
/// - Split on `-`; there must be at least three components
/// - The third component must be an integer (a sign is allowed)
/// - Year and month are not inspected, and the day is not range-checked
///
/// ## Example
/// ```rust
/// use points_core::validation::parse_purchase_day;
///
/// assert_eq!(parse_purchase_day("2022-01-01").unwrap(), 1);
/// assert!(parse_purchase_day("2022-01").is_err());
/// assert!(parse_purchase_day("2022-01-xx").is_err());
/// ```
pub fn parse_purchase_day(date: &str) -> Result<i64, DateFormatError> {
    let day = date
        .split('-')
        .nth(2)
        .ok_or_else(|| DateFormatError::MissingComponents {
            value: date.to_string(),
        })?;

    day.parse().map_err(|_| DateFormatError::InvalidDay {
        value: date.to_string(),
        day: day.to_string(),
    })
}

// =============================================================================
// Time Parser
// =============================================================================

/// A 24 hour wall-clock time as written on the receipt.
///
/// Values are not range-checked: `"25:99"` parses to hour 25, minute 99.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: i64,
    pub minute: i64,
}

/// Parses an `HH:MM` purchase time.
///
/// ## Rules
/// - Split on `:`; there must be exactly two components
/// - Hour, then minute, must each parse as an integer
///
/// ## Example
/// ```rust
/// use points_core::validation::parse_purchase_time;
///
/// assert!(parse_purchase_time("13:01").is_ok());
/// assert!(parse_purchase_time("13:01:00").is_err());
/// assert!(parse_purchase_time("1pm").is_err());
/// ```
pub fn parse_purchase_time(time: &str) -> Result<ClockTime, TimeFormatError> {
    let parts: Vec<&str> = time.split(':').collect();
    let [hour, minute] = parts.as_slice() else {
        return Err(TimeFormatError::ComponentCount {
            value: time.to_string(),
            found: parts.len(),
        });
    };

    let hour = hour.parse().map_err(|_| TimeFormatError::InvalidHour {
        value: time.to_string(),
        hour: hour.to_string(),
    })?;

    let minute = minute.parse().map_err(|_| TimeFormatError::InvalidMinute {
        value: time.to_string(),
        minute: minute.to_string(),
    })?;

    Ok(ClockTime { hour, minute })
}

// =============================================================================
// Unit Tests
// =============================================================================
