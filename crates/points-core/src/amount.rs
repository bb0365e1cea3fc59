//! # Amount Module
//!
//! Provides the `Amount` type for the monetary strings found on receipts.
//!
//! ## Why Floating Point Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RECEIPT AMOUNTS ARE SCORED, NOT SETTLED                                │
//! │                                                                         │
//! │  Receipts arrive with totals and prices as text: "35.35", "2.25"       │
//! │                                                                         │
//! │  The scoring rules ask float questions about them:                      │
//! │    is "9.00" a whole number?            9.0.fract()  == 0  → yes        │
//! │    is "35.35" a multiple of 0.25?       141.4.fract() != 0 → no         │
//! │    what is ceil("12.25" × 0.2)?         ceil(2.45)       = 3            │
//! │                                                                         │
//! │  No money ever changes hands, so no cents are lost.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use points_core::amount::Amount;
//!
//! let total = Amount::parse("9.00").unwrap();
//! assert!(total.is_whole());
//! assert!(total.is_quarter_multiple());
//!
//! // Negative, NaN and infinite values are rejected like any other bad text
//! assert!(Amount::parse("-1.00").is_none());
//! assert!(Amount::parse("NaN").is_none());
//! ```

use std::fmt;

// =============================================================================
// Amount Type
// =============================================================================

/// A finite, non-negative decimal amount read from receipt text.
///
/// ## Invariant
/// The wrapped value is never negative, `NaN` or infinite. The only way in
/// is [`Amount::parse`], which enforces this.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    /// Parses decimal text into an amount.
    ///
    /// Returns `None` for anything that is not a plain, finite, non-negative
    /// number. Surrounding whitespace is not accepted.
    ///
    /// ## Example
    /// ```rust
    /// use points_core::amount::Amount;
    ///
    /// assert_eq!(Amount::parse("35.35").map(|a| a.value()), Some(35.35));
    /// assert_eq!(Amount::parse("0.50").map(|a| a.value()), Some(0.5));
    /// assert!(Amount::parse("").is_none());
    /// assert!(Amount::parse("1,00").is_none());
    /// assert!(Amount::parse(" 1.00").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let value: f64 = text.parse().ok()?;
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        // -0.0 compares equal to 0.0 but prints with a sign
        Some(Amount(value.abs()))
    }

    /// Returns the raw value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Checks if the amount has no fractional part (a round dollar amount).
    #[inline]
    pub fn is_whole(&self) -> bool {
        self.0.fract() == 0.0
    }

    /// Checks if the amount is an exact multiple of 0.25.
    ///
    /// ## Example
    /// ```rust
    /// use points_core::amount::Amount;
    ///
    /// assert!(Amount::parse("0.75").unwrap().is_quarter_multiple());
    /// assert!(!Amount::parse("35.35").unwrap().is_quarter_multiple());
    /// ```
    #[inline]
    pub fn is_quarter_multiple(&self) -> bool {
        (self.0 * 4.0).fract() == 0.0
    }

    /// Returns `ceil(amount × rate)`, the reward earned at `rate`.
    ///
    /// Always rounds up, never to nearest or even.
    ///
    /// ## Example
    /// ```rust
    /// use points_core::amount::Amount;
    ///
    /// let price = Amount::parse("12.25").unwrap();
    /// assert_eq!(price.reward(0.2), 3.0); // ceil(2.45)
    /// ```
    #[inline]
    pub fn reward(&self, rate: f64) -> f64 {
        (self.0 * rate).ceil()
    }

    /// Checks if the amount is strictly greater than `threshold`.
    #[inline]
    pub fn exceeds(&self, threshold: f64) -> bool {
        self.0 > threshold
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_plain_decimals() {
        assert_eq!(Amount::parse("1").map(|a| a.value()), Some(1.0));
        assert_eq!(Amount::parse("1.").map(|a| a.value()), Some(1.0));
        assert_eq!(Amount::parse(".5").map(|a| a.value()), Some(0.5));
        assert_eq!(Amount::parse("0").map(|a| a.value()), Some(0.0));
        assert_eq!(Amount::parse("-0").map(|a| a.value()), Some(0.0));
    }

    #[test]
    fn test_parse_rejects_bad_text() {
        assert!(Amount::parse("").is_none());
        assert!(Amount::parse("abc").is_none());
        assert!(Amount::parse("$1.00").is_none());
        assert!(Amount::parse("1.00 ").is_none());
        assert!(Amount::parse("-0.01").is_none());
        assert!(Amount::parse("inf").is_none());
        assert!(Amount::parse("NaN").is_none());
    }

    #[test]
    fn test_is_whole() {
        assert!(Amount::parse("1.0").unwrap().is_whole());
        assert!(Amount::parse("9.00").unwrap().is_whole());
        assert!(Amount::parse("0").unwrap().is_whole());
        assert!(!Amount::parse("1.1").unwrap().is_whole());
        assert!(!Amount::parse("0.50").unwrap().is_whole());
    }

    #[test]
    fn test_is_quarter_multiple() {
        assert!(Amount::parse("1.0").unwrap().is_quarter_multiple());
        assert!(Amount::parse("0.50").unwrap().is_quarter_multiple());
        assert!(Amount::parse("2.25").unwrap().is_quarter_multiple());
        assert!(!Amount::parse("1.3").unwrap().is_quarter_multiple());
        assert!(!Amount::parse("35.35").unwrap().is_quarter_multiple());
    }

    #[test]
    fn test_reward_rounds_up() {
        assert_eq!(Amount::parse("3.0").unwrap().reward(0.2), 1.0);
        assert_eq!(Amount::parse("6.49").unwrap().reward(0.2), 2.0);
        assert_eq!(Amount::parse("12.00").unwrap().reward(0.2), 3.0);
        assert_eq!(Amount::parse("0").unwrap().reward(0.2), 0.0);
    }

    #[test]
    fn test_exceeds_is_strict() {
        assert!(Amount::parse("10.01").unwrap().exceeds(10.0));
        assert!(!Amount::parse("10.00").unwrap().exceeds(10.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::parse("35.35").unwrap().to_string(), "35.35");
        assert_eq!(Amount::parse("9").unwrap().to_string(), "9.00");
    }
}
