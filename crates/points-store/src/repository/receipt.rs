//! # Receipt Repository
//!
//! Insert and lookup for submitted receipts.
//!
//! ## Locking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    RwLock<HashMap<id, ReceiptRecord>>                   │
//! │                                                                         │
//! │  POST /receipts/process ──► insert() ──► write lock (exclusive)        │
//! │                                                                         │
//! │  GET /receipts/{id}/points ──► get() ──► read lock (shared)            │
//! │                                     │                                   │
//! │                                     └──► record cloned, lock released   │
//! │                                          scoring runs without the lock  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use points_core::Receipt;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// A receipt as held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptRecord {
    pub id: String,
    pub receipt: Receipt,
    /// When the receipt was inserted.
    pub received_at: DateTime<Utc>,
}

/// Repository for stored receipts.
///
/// Cloning is cheap: clones share the same underlying map.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ReceiptRepository::new();
/// repo.insert("1", receipt).await;
/// let record = repo.get("1").await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReceiptRepository {
    receipts: Arc<RwLock<HashMap<String, ReceiptRecord>>>,
}

impl ReceiptRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        ReceiptRepository::default()
    }

    /// Stores a receipt under `id`.
    ///
    /// An existing receipt with the same ID is replaced without error.
    pub async fn insert(&self, id: impl Into<String>, receipt: Receipt) -> ReceiptRecord {
        let record = ReceiptRecord {
            id: id.into(),
            receipt,
            received_at: Utc::now(),
        };

        debug!(id = %record.id, items = record.receipt.item_count(), "Storing receipt");

        self.receipts
            .write()
            .await
            .insert(record.id.clone(), record.clone());

        record
    }

    /// Looks up a receipt by ID.
    ///
    /// ## Returns
    /// * `Ok(ReceiptRecord)` - a copy of the stored record
    /// * `Err(StoreError::NotFound)` - nothing stored under `id`
    pub async fn get(&self, id: &str) -> StoreResult<ReceiptRecord> {
        debug!(id = %id, "Looking up receipt");

        self.receipts
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// Number of stored receipts.
    pub async fn count(&self) -> usize {
        self.receipts.read().await.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
