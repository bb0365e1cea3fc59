//! # Scoring Module
//!
//! Turns a [`Receipt`] into [`Points`].
//!
//! ## Rule Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        score(&receipt)                                  │
//! │                                                                         │
//! │  retailer ────────► +1 per letter/digit                                │
//! │                                                                         │
//! │  total ──parse──┬─► +50 if whole                                       │
//! │        (or Err) ├─► +25 if multiple of 0.25                            │
//! │                 └─► +5  if > 10.00 (applied after the item rules)       │
//! │                                                                         │
//! │  items ─────────┬─► +5 per pair                                        │
//! │                 └─► +ceil(price × 0.2) per description of len % 3 == 0  │
//! │                                     (price parsed only then, or Err)    │
//! │                                                                         │
//! │  purchaseDate ──parse──► +6 if day is odd              (or Err)        │
//! │  purchaseTime ──parse──► +10 if 14:00 < t < 16:00      (or Err)        │
//! │                                                                         │
//! │  Σ as f64 ──truncate──► Points                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The first error stops the pipeline. No partial score is returned.
//!
//! ## Example
//! ```rust
//! use points_core::{score, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "Target123".to_string(),
//!     purchase_date: "2022-01-02".to_string(),
//!     purchase_time: "13:00".to_string(),
//!     total: "1.1".to_string(),
//!     items: vec![],
//! };
//! assert_eq!(score(&receipt).unwrap().value(), 9);
//! ```

use serde::Serialize;
use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::error::ScoringResult;
use crate::types::{Points, Receipt};
use crate::validation::{
    parse_item_price, parse_purchase_day, parse_purchase_time, parse_total, ClockTime,
};
use crate::{
    AFTERNOON_POINTS, DESCRIPTION_PRICE_RATE, HIGH_TOTAL_POINTS, HIGH_TOTAL_THRESHOLD,
    ITEM_PAIR_POINTS, ODD_DAY_POINTS, QUARTER_MULTIPLE_POINTS, ROUND_DOLLAR_POINTS,
};

// =============================================================================
// Score Breakdown
// =============================================================================

/// Contribution of each rule to a receipt's score.
///
/// Values are kept as `f64` so the sum matches the float accumulation
/// exactly; only [`ScoreBreakdown::points`] truncates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// One point per retailer letter or decimal digit.
    pub retailer_name: f64,
    pub round_dollar: f64,
    pub quarter_multiple: f64,
    pub item_pairs: f64,
    /// Sum of `ceil(price × 0.2)` over qualifying descriptions.
    pub item_descriptions: f64,
    pub high_total: f64,
    pub odd_day: f64,
    pub afternoon: f64,
}

impl ScoreBreakdown {
    /// Sum of every contribution, before truncation.
    pub fn total(&self) -> f64 {
        self.retailer_name
            + self.round_dollar
            + self.quarter_multiple
            + self.item_pairs
            + self.item_descriptions
            + self.high_total
            + self.odd_day
            + self.afternoon
    }

    /// The final score: [`total`](Self::total) truncated to whole points.
    pub fn points(&self) -> Points {
        Points::truncate(self.total())
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Scores a receipt.
///
/// Pure and deterministic: the same receipt always yields the same result.
pub fn score(receipt: &Receipt) -> ScoringResult<Points> {
    score_breakdown(receipt).map(|breakdown| breakdown.points())
}

/// Scores a receipt, returning each rule's contribution.
///
/// Rules run in a fixed order. Parsing happens inside the rule that needs
/// the field, so which error is reported depends on that order:
/// total, then item prices, then date, then time.
pub fn score_breakdown(receipt: &Receipt) -> ScoringResult<ScoreBreakdown> {
    let mut breakdown = ScoreBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        ..ScoreBreakdown::default()
    };

    let total = parse_total(&receipt.total)?;
    if total.is_whole() {
        breakdown.round_dollar = ROUND_DOLLAR_POINTS;
    }
    if total.is_quarter_multiple() {
        breakdown.quarter_multiple = QUARTER_MULTIPLE_POINTS;
    }

    breakdown.item_pairs = item_pair_points(receipt.item_count());
    breakdown.item_descriptions = item_description_points(receipt)?;

    if total.exceeds(HIGH_TOTAL_THRESHOLD) {
        breakdown.high_total = HIGH_TOTAL_POINTS;
    }

    let day = parse_purchase_day(&receipt.purchase_date)?;
    if day % 2 != 0 {
        breakdown.odd_day = ODD_DAY_POINTS;
    }

    let time = parse_purchase_time(&receipt.purchase_time)?;
    if is_afternoon_window(time) {
        breakdown.afternoon = AFTERNOON_POINTS;
    }

    Ok(breakdown)
}

// =============================================================================
// Individual Rules
// =============================================================================

/// One point for every Unicode letter or digit.
fn retailer_name_points(retailer: &str) -> f64 {
    retailer.chars().filter(|&c| is_letter_or_digit(c)).count() as f64
}

/// General category `L*` or `Nd`. Letter numbers, other numbers and
/// combining marks don't count.
fn is_letter_or_digit(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
        || c.general_category() == GeneralCategory::DecimalNumber
}

/// Five points for every two items. An odd item out earns nothing.
fn item_pair_points(item_count: usize) -> f64 {
    (item_count / 2) as f64 * ITEM_PAIR_POINTS
}

/// Description-length bonus summed over every item.
///
/// Length is the byte length of the trimmed description, and zero counts as
/// a multiple of three.
fn item_description_points(receipt: &Receipt) -> ScoringResult<f64> {
    let mut points = 0.0;
    for (index, item) in receipt.items.iter().enumerate() {
        if item.short_description.trim().len() % 3 != 0 {
            continue;
        }
        let price = parse_item_price(index, &item.price)?;
        points += price.reward(DESCRIPTION_PRICE_RATE);
    }
    Ok(points)
}

/// After 14:00 and before 16:00, both exclusive.
fn is_afternoon_window(time: ClockTime) -> bool {
    (time.hour > 14 || (time.hour == 14 && time.minute > 0)) && time.hour < 16
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DateFormatError, ScoringError, TimeFormatError};
    use crate::fixtures;
    use crate::types::Item;

    /// A receipt that earns nothing: empty retailer, no items, even day,
    /// morning, and a total with no bonus.
    fn blank_receipt() -> Receipt {
        Receipt {
            retailer: String::new(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "13:00".to_string(),
            total: "1.3".to_string(),
            items: vec![],
        }
    }

    fn points(receipt: &Receipt) -> u64 {
        score(receipt).unwrap().value()
    }

    #[test]
    fn test_blank_receipt_scores_zero() {
        assert_eq!(points(&blank_receipt()), 0);
    }

    #[test]
    fn test_retailer_letters_and_digits() {
        let receipt = Receipt {
            retailer: "Target123".to_string(),
            total: "1.1".to_string(),
            ..blank_receipt()
        };
        assert_eq!(points(&receipt), 9);

        // Spaces and punctuation don't count
        let receipt = Receipt {
            retailer: "M&M Corner Market".to_string(),
            ..blank_receipt()
        };
        assert_eq!(points(&receipt), 14);
    }

    #[test]
    fn test_retailer_counts_unicode_letters() {
        let receipt = Receipt {
            retailer: "Café Ünï 7".to_string(),
            ..blank_receipt()
        };
        assert_eq!(points(&receipt), 8);
    }

    #[test]
    fn test_retailer_skips_numerals_and_marks() {
        // Ⅻ (Nl), ½ and ² (No), combining ypogegrammeni (Mn)
        let receipt = Receipt {
            retailer: "\u{216B}\u{00BD}\u{00B2}\u{0345}".to_string(),
            ..blank_receipt()
        };
        assert_eq!(points(&receipt), 0);

        // Devanagari vowel sign (Mc) after a letter; Arabic-Indic digits (Nd)
        let receipt = Receipt {
            retailer: "\u{0915}\u{093E}\u{0661}\u{0662}".to_string(),
            ..blank_receipt()
        };
        assert_eq!(points(&receipt), 3);
    }

    #[test]
    fn test_total_round_dollar_and_quarter() {
        let with_total = |total: &str| Receipt {
            total: total.to_string(),
            ..blank_receipt()
        };

        assert_eq!(points(&with_total("1.0")), 75);
        assert_eq!(points(&with_total("1.3")), 0);
        assert_eq!(points(&with_total("0.50")), 25);
        assert_eq!(points(&with_total("0.75")), 25);
        assert_eq!(points(&with_total("0")), 75);
    }

    #[test]
    fn test_high_total_is_strict() {
        let with_total = |total: &str| Receipt {
            total: total.to_string(),
            ..blank_receipt()
        };

        assert_eq!(points(&with_total("11.1")), 5);
        assert_eq!(points(&with_total("10.01")), 5);
        // 10.00 is round and a quarter multiple but not above 10
        assert_eq!(points(&with_total("10.00")), 75);
    }

    #[test]
    fn test_item_pairs_floor_division() {
        let with_items = |count: usize| Receipt {
            items: vec![Item::new("ABCD", "1.00"); count],
            ..blank_receipt()
        };

        assert_eq!(points(&with_items(1)), 0);
        assert_eq!(points(&with_items(2)), 5);
        assert_eq!(points(&with_items(3)), 5);
        assert_eq!(points(&with_items(4)), 10);
    }

    #[test]
    fn test_description_length_multiple_of_three() {
        let with_item = |description: &str, price: &str| Receipt {
            items: vec![Item::new(description, price)],
            ..blank_receipt()
        };

        assert_eq!(points(&with_item(" THE", "3.0")), 1);
        assert_eq!(points(&with_item(" THEA  ", "3.0")), 0);
        assert_eq!(points(&with_item("Emils Cheese Pizza", "12.25")), 3);
        assert_eq!(points(&with_item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")), 3);
    }

    #[test]
    fn test_empty_description_counts_as_multiple_of_three() {
        let receipt = Receipt {
            items: vec![Item::new("   ", "10.00")],
            ..blank_receipt()
        };
        assert_eq!(points(&receipt), 2);
    }

    #[test]
    fn test_unqualified_item_price_is_not_parsed() {
        let receipt = Receipt {
            items: vec![Item::new("ABCD", "not a price")],
            ..blank_receipt()
        };
        assert_eq!(points(&receipt), 0);
    }

    #[test]
    fn test_odd_day() {
        let with_date = |date: &str| Receipt {
            purchase_date: date.to_string(),
            ..blank_receipt()
        };

        assert_eq!(points(&with_date("2022-01-01")), 6);
        assert_eq!(points(&with_date("2022-01-31")), 6);
        assert_eq!(points(&with_date("2022-01-02")), 0);
    }

    #[test]
    fn test_afternoon_window() {
        let at = |time: &str| Receipt {
            purchase_time: time.to_string(),
            ..blank_receipt()
        };

        assert_eq!(points(&at("13:00")), 0);
        assert_eq!(points(&at("14:00")), 0);
        assert_eq!(points(&at("14:01")), 10);
        assert_eq!(points(&at("14:30")), 10);
        assert_eq!(points(&at("15:30")), 10);
        assert_eq!(points(&at("15:59")), 10);
        assert_eq!(points(&at("16:00")), 0);
        assert_eq!(points(&at("16:30")), 0);
    }

    #[test]
    fn test_canonical_target_receipt() {
        let receipt = fixtures::target_receipt();
        let breakdown = score_breakdown(&receipt).unwrap();

        assert_eq!(breakdown.retailer_name, 6.0);
        assert_eq!(breakdown.item_pairs, 10.0);
        assert_eq!(breakdown.item_descriptions, 6.0);
        assert_eq!(breakdown.high_total, 5.0);
        assert_eq!(breakdown.odd_day, 6.0);
        assert_eq!(breakdown.round_dollar + breakdown.quarter_multiple, 0.0);
        assert_eq!(breakdown.afternoon, 0.0);
        assert_eq!(breakdown.points().value(), 33);
        assert_eq!(breakdown.points().value() - 5, 28);
    }

    #[test]
    fn test_canonical_corner_market_receipt() {
        let receipt = fixtures::corner_market_receipt();
        let breakdown = score_breakdown(&receipt).unwrap();

        assert_eq!(breakdown.retailer_name, 14.0);
        assert_eq!(breakdown.round_dollar, 50.0);
        assert_eq!(breakdown.quarter_multiple, 25.0);
        assert_eq!(breakdown.item_pairs, 10.0);
        assert_eq!(breakdown.item_descriptions, 0.0);
        assert_eq!(breakdown.afternoon, 10.0);
        assert_eq!(points(&receipt), 109);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let receipt = fixtures::target_receipt();
        assert_eq!(score(&receipt), score(&receipt));
        assert_eq!(score_breakdown(&receipt), score_breakdown(&receipt));
    }

    #[test]
    fn test_invalid_total_aborts() {
        let receipt = Receipt {
            total: "twelve".to_string(),
            ..blank_receipt()
        };
        assert_eq!(
            score(&receipt),
            Err(ScoringError::TotalParse {
                value: "twelve".to_string()
            })
        );
    }

    #[test]
    fn test_negative_total_aborts() {
        let receipt = Receipt {
            total: "-4.00".to_string(),
            ..blank_receipt()
        };
        assert!(matches!(score(&receipt), Err(ScoringError::TotalParse { .. })));
    }

    #[test]
    fn test_invalid_item_price_aborts() {
        let receipt = Receipt {
            items: vec![Item::new("ABCD", "1.00"), Item::new("ABC", "oops")],
            ..blank_receipt()
        };
        assert_eq!(
            score(&receipt),
            Err(ScoringError::ItemPriceParse {
                index: 1,
                value: "oops".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_date_aborts() {
        let receipt = Receipt {
            purchase_date: "2022/01/01".to_string(),
            ..blank_receipt()
        };
        assert!(matches!(
            score(&receipt),
            Err(ScoringError::DateFormat(DateFormatError::MissingComponents { .. }))
        ));

        let receipt = Receipt {
            purchase_date: "2022-01-first".to_string(),
            ..blank_receipt()
        };
        assert!(matches!(
            score(&receipt),
            Err(ScoringError::DateFormat(DateFormatError::InvalidDay { .. }))
        ));
    }

    #[test]
    fn test_invalid_time_aborts() {
        let at = |time: &str| Receipt {
            purchase_time: time.to_string(),
            ..blank_receipt()
        };

        assert!(matches!(
            score(&at("1400")),
            Err(ScoringError::TimeFormat(TimeFormatError::ComponentCount { .. }))
        ));
        assert!(matches!(
            score(&at("two:00")),
            Err(ScoringError::TimeFormat(TimeFormatError::InvalidHour { .. }))
        ));
        assert!(matches!(
            score(&at("14:thirty")),
            Err(ScoringError::TimeFormat(TimeFormatError::InvalidMinute { .. }))
        ));
    }

    #[test]
    fn test_first_error_wins() {
        // Bad total, price, date and time: the total is checked first
        let receipt = Receipt {
            retailer: "X".to_string(),
            purchase_date: "bad".to_string(),
            purchase_time: "bad".to_string(),
            total: "bad".to_string(),
            items: vec![Item::new("ABC", "bad")],
        };
        assert_eq!(score(&receipt).unwrap_err().kind(), "total_parse");

        let receipt = Receipt {
            total: "1.00".to_string(),
            ..receipt
        };
        assert_eq!(score(&receipt).unwrap_err().kind(), "item_price_parse");
    }

    #[test]
    fn test_breakdown_total_matches_score() {
        let receipt = fixtures::corner_market_receipt();
        let breakdown = score_breakdown(&receipt).unwrap();
        assert_eq!(breakdown.total(), 109.0);
        assert_eq!(breakdown.points(), score(&receipt).unwrap());
    }
}
