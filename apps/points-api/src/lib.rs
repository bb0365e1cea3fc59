//! # Receipt Points API
//!
//! HTTP server that stores receipts and reports their points.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Points API                                      │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  usage         │  │ process_receipt│  │  get_points                ││
//! │  │                │  │                │  │                            ││
//! │  │ • GET /        │  │ • POST         │  │ • GET                      ││
//! │  │                │  │   /receipts/   │  │   /receipts/{id}/points    ││
//! │  │                │  │   process      │  │                            ││
//! │  └────────────────┘  └───────┬────────┘  └──────┬──────────────┬──────┘│
//! │                              │                  │              │       │
//! │  ┌───────────────────────────▼──────────────────▼──┐  ┌────────▼──────┐│
//! │  │                 ReceiptStore                    │  │  points-core  ││
//! │  │      IdGenerator + RwLock<HashMap>              │  │  score()      ││
//! │  └─────────────────────────────────────────────────┘  └───────────────┘│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Fixed defaults, see [`ApiConfig`]. The server listens on `0.0.0.0:8080`.

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use points_store::ReceiptStore;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;

/// Shared application state.
///
/// Cloned into every request; the store's internals are reference counted.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: ReceiptStore,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    /// Creates state with an empty store.
    pub fn new(config: ApiConfig) -> Self {
        AppState {
            store: ReceiptStore::new(),
            config: Arc::new(config),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/", get(handlers::usage))
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/{id}/points", get(handlers::get_points))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
