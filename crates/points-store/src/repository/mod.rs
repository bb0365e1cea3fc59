//! # Repository Module
//!
//! Repository implementations for Receipt Points.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  HTTP Handler                                                          │
//! │       │                                                                 │
//! │       │  store.receipts().get("42")                                    │
//! │       ▼                                                                 │
//! │  ReceiptRepository                                                     │
//! │  ├── insert(&self, id, receipt)                                        │
//! │  ├── get(&self, id)                                                    │
//! │  └── len(&self)                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RwLock<HashMap>                                                       │
//! │                                                                         │
//! │  Handlers never touch the map or the lock directly.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ReceiptRepository`](receipt::ReceiptRepository) - Receipt insert and lookup

pub mod receipt;
