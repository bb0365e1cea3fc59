//! Sample receipts with known scores, for tests in this and other crates.
//!
//! Compiled for unit tests, or for dependents through the `fixtures` feature.

use crate::types::{Item, Receipt};

/// Target, 2022-01-01 13:01, five items, total 35.35. Scores 33.
pub fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        total: "35.35".to_string(),
        items: vec![
            Item::new("Mountain Dew 12PK", "6.49"),
            Item::new("Emils Cheese Pizza", "12.25"),
            Item::new("Knorr Creamy Chicken", "1.26"),
            Item::new("Doritos Nacho Cheese", "3.35"),
            Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
    }
}

/// M&M Corner Market, 2022-03-20 14:33, four Gatorades, total 9.00. Scores 109.
pub fn corner_market_receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        total: "9.00".to_string(),
        items: vec![Item::new("Gatorade", "2.25"); 4],
    }
}
