//! # receipt-store: Receipt Storage for Receipt Points
//!
//! This crate holds the service's shared state: submitted receipts and the
//! points computed for them. Everything lives in memory for the lifetime of
//! the [`ReceiptRepository`] that owns it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Points Data Flow                            │
//! │                                                                         │
//! │  HTTP handler (POST /receipts/process)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  receipt-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  Repository   │    │ ReceiptStore  │    │ PointsCache  │  │   │
//! │  │   │(repository.rs)│    │ (receipts.rs) │    │ (points.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ submit        │───►│ insert-only   │    │ write-once   │  │   │
//! │  │   │ points        │───►│ id → Receipt  │    │ id → points  │  │   │
//! │  │   │ breakdown     │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  receipt-core (validation + rules, no I/O)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`repository`] - The state object handed to the HTTP layer
//! - [`receipts`] - Receipt storage by id
//! - [`points`] - Computed points by id
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use receipt_store::ReceiptRepository;
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let repo = ReceiptRepository::new();
//! let id = repo
//!     .submit(Some(&json!({
//!         "retailer": "Target",
//!         "purchaseDate": "2022-01-01",
//!         "purchaseTime": "13:01",
//!         "items": [{ "shortDescription": "Mountain Dew 12PK", "price": "6.49" }],
//!         "total": "6.49"
//!     })))
//!     .await
//!     .unwrap();
//!
//! let points = repo.points(&id.to_string()).await.unwrap();
//! assert_eq!(points, 12);
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod points;
pub mod receipts;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use points::PointsCache;
pub use receipts::{ReceiptStore, StoredReceipt};
pub use repository::{ReceiptRepository, RepositoryStats};
