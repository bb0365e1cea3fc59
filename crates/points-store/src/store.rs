//! # Receipt Store
//!
//! The handle the HTTP layer holds: an ID generator plus the receipt
//! repository, shared by every request.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          ReceiptStore                                   │
//! │                                                                         │
//! │  Server startup                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ReceiptStore::new() ← empty map, counter at 0                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────┐   ┌──────────────────────────────────┐   │
//! │  │  Arc<IdGenerator>        │   │  ReceiptRepository               │   │
//! │  │  "1", "2", "3", ...      │   │  Arc<RwLock<HashMap<..>>>        │   │
//! │  └──────────────────────────┘   └──────────────────────────────────┘   │
//! │       │                                                                 │
//! │       │ cloned into every request                                       │
//! │       ▼                                                                 │
//! │  Request 1 ──► save()          Request 2 ──► receipts().get()          │
//! │  (requests run in parallel; only the map lock is contended)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing survives a restart.

use std::sync::Arc;

use points_core::Receipt;
use tracing::info;

use crate::id::IdGenerator;
use crate::repository::receipt::{ReceiptRecord, ReceiptRepository};

/// Shared receipt state.
///
/// ## Usage
/// ```rust,ignore
/// let store = ReceiptStore::new();
/// let id = store.save(receipt).await;
/// let record = store.receipts().get(&id).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReceiptStore {
    ids: Arc<IdGenerator>,
    receipts: ReceiptRepository,
}

impl ReceiptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        info!("Initializing in-memory receipt store");
        ReceiptStore::default()
    }

    /// Assigns a fresh ID to the receipt and stores it.
    ///
    /// ## Returns
    /// The stored record, including its new ID.
    pub async fn save(&self, receipt: Receipt) -> ReceiptRecord {
        let id = self.ids.next_id();
        self.receipts.insert(id, receipt).await
    }

    /// Returns the receipt repository.
    pub fn receipts(&self) -> ReceiptRepository {
        self.receipts.clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use points_core::fixtures;

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let store = ReceiptStore::new();

        let first = store.save(fixtures::target_receipt()).await;
        let second = store.save(fixtures::corner_market_receipt()).await;

        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
        assert_eq!(store.receipts().count().await, 2);
    }

    #[tokio::test]
    async fn test_saved_receipt_can_be_found() {
        let store = ReceiptStore::new();
        let saved = store.save(fixtures::corner_market_receipt()).await;

        let found = store.receipts().get(&saved.id).await.unwrap();
        assert_eq!(found.receipt, fixtures::corner_market_receipt());
    }

    #[tokio::test]
    async fn test_concurrent_saves_do_not_collide() {
        let store = ReceiptStore::new();

        let tasks: Vec<_> = (0..64)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.save(fixtures::target_receipt()).await.id })
            })
            .collect();

        for task in tasks {
            let id = task.await.unwrap();
            assert!(store.receipts().get(&id).await.is_ok());
        }
        assert_eq!(store.receipts().count().await, 64);
    }
}
