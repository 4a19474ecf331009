//! # Store Error Types
//!
//! Error types for receipt storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (receipt-core)     unknown / malformed id             │
//! │       │                                   │                             │
//! │       ▼                                   ▼                             │
//! │  StoreError::Validation            StoreError::NotFound                │
//! │       │                                   │                             │
//! │       └──────────────┬────────────────────┘                             │
//! │                      ▼                                                  │
//! │  ApiError (in receipt-api) ← 400 / 404 response                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use receipt_core::{CoreError, ValidationError};
use thiserror::Error;

/// Receipt storage errors.
///
/// Both variants are expected outcomes, never server faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No receipt is stored under this id.
    ///
    /// ## When This Occurs
    /// - Id was never issued
    /// - Id is not a UUID at all (so it cannot have been issued)
    #[error("Receipt not found: {id}")]
    NotFound { id: String },

    /// Submission rejected; nothing was stored.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Creates a NotFound error for a given id.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }
}

/// Convert core errors to StoreError.
///
/// ## Error Mapping
/// ```text
/// CoreError::InvalidReceiptId  → StoreError::NotFound
/// CoreError::Validation        → StoreError::Validation
/// ```
impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidReceiptId(id) => StoreError::NotFound { id },
            CoreError::Validation(err) => StoreError::Validation(err),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
