//! # Receipt API
//!
//! HTTP server exposing the receipt store.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt API Routes                              │
//! │                                                                         │
//! │  ┌──────────────────────────────┐  ┌────────────────────────────────┐  │
//! │  │  receipts                    │  │  health                        │  │
//! │  │                              │  │                                │  │
//! │  │ • POST /receipts/process     │  │ • GET /health                  │  │
//! │  │ • GET  /receipts/{id}/points │  │                                │  │
//! │  └──────────────────────────────┘  └────────────────────────────────┘  │
//! │                                                                         │
//! │  Layers: TraceLayer → DefaultBodyLimit → Handler                        │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  AppState                                                         │  │
//! │  │  • store: Arc<ReceiptStore>   (shared, internally synchronized)  │  │
//! │  │  • config: Arc<ApiConfig>                                        │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `RECEIPT_API_HOST` - Interface to bind (default: 0.0.0.0)
//! - `RECEIPT_API_PORT` - HTTP port (default: 8080)
//! - `RECEIPT_API_MAX_BODY_BYTES` - Request body limit (default: 1048576)
//! - `RECEIPT_API_LOG` - Log filter when `RUST_LOG` is unset

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use receipt_store::ReceiptStore;
use tower_http::trace::TraceLayer;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ReceiptStore>,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    /// Creates state with an empty store.
    pub fn new(config: ApiConfig) -> Self {
        AppState {
            store: Arc::new(ReceiptStore::new()),
            config: Arc::new(config),
        }
    }
}

/// Assemble the application router with all routes and layers.
pub fn app(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .merge(routes::receipts::router())
        .merge(routes::health::router())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
