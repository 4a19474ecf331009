//! # Receipt API
//!
//! HTTP server for submitting receipts and reading their points.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt API                                     │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  routes        │  │  handlers      │  │  ReceiptRepository         ││
//! │  │                │  │                │  │                            ││
//! │  │ • TraceLayer   │─►│ • process      │─►│ • submit (validate+store)  ││
//! │  │ • body limit   │  │ • points       │  │ • points (score+cache)     ││
//! │  │ • fallback 404 │  │ • breakdown    │  │ • breakdown                ││
//! │  └────────────────┘  └────────────────┘  └────────────────────────────┘│
//! │                              │                                          │
//! │                              ▼                                          │
//! │                      ApiError → {"error":{"code","message"}}            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `RECEIPT_API_CONFIG` - Optional TOML config file
//! - `RECEIPT_API_HOST` - Bind address (default: 0.0.0.0)
//! - `RECEIPT_API_PORT` - HTTP port (default: 3000)
//! - `RECEIPT_API_MAX_BODY_BYTES` - Request body limit (default: 1048576)
//! - `RECEIPT_API_LOG_LEVEL` - Log filter when `RUST_LOG` is unset (default: info)

use std::sync::Arc;

use receipt_store::ReceiptRepository;

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

// Re-exports
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult};
pub use routes::router;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub repository: ReceiptRepository,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    /// State with an empty repository.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_repository(config, ReceiptRepository::new())
    }

    /// State around an existing repository.
    pub fn with_repository(config: ApiConfig, repository: ReceiptRepository) -> Self {
        AppState {
            repository,
            config: Arc::new(config),
        }
    }
}
