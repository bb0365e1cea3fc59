//! # points-store: In-Memory Receipt Store for Receipt Points
//!
//! Holds submitted receipts for the lifetime of the process and mints the
//! identifiers clients use to fetch their points.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Points Data Flow                            │
//! │                                                                         │
//! │  POST /receipts/process                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   points-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ ReceiptStore  │    │  Repository   │    │ IdGenerator  │  │   │
//! │  │   │  (store.rs)   │───►│ (receipt.rs)  │    │   (id.rs)    │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ save()        │    │ insert / get  │    │ AtomicU64    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The shared store handle
//! - [`id`] - Identifier generation
//! - [`error`] - Store error types
//! - [`repository`] - Receipt repository
//!
//! ## Usage
//!
//! ```rust
//! use points_core::Receipt;
//! use points_store::ReceiptStore;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let store = ReceiptStore::new();
//! let record = store.save(Receipt::default()).await;
//! assert_eq!(record.id, "1");
//! assert!(store.receipts().get("1").await.is_ok());
//! # });
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod id;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use id::IdGenerator;
pub use repository::receipt::{ReceiptRecord, ReceiptRepository};
pub use store::ReceiptStore;
