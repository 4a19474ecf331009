//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Required-field failures on submission          │
//! │                                                                         │
//! │  receipt-store errors (separate crate)                                 │
//! │  └── StoreError       - Unknown receipt ids, rejected submissions      │
//! │                                                                         │
//! │  receipt-api errors (in app)                                           │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → ApiError → Client                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Validation messages are part of the public contract, keep them exact
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Receipt identifier is not a valid UUID.
    #[error("Invalid receipt id: {0}")]
    InvalidReceiptId(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Submission validation errors.
///
/// Checked in declaration order; the first failing check is the one
/// reported. The `Display` text is shown to API clients verbatim.
///
/// ## User Workflow
/// ```text
/// POST /receipts/process { "retailer": "   ", ... }
///      │
///      ▼
/// validate_receipt()
///      │
///      ▼
/// InvalidRetailer
///      │
///      ▼
/// 400 "Please provide a retailer name of at least 1 character"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No payload at all (empty body or JSON `null`).
    #[error("Receipt is required")]
    MissingReceipt,

    /// Retailer absent, not a string, or blank after trimming.
    #[error("Please provide a retailer name of at least 1 character")]
    InvalidRetailer,

    /// Purchase date absent or empty. Format is NOT checked here.
    #[error("Please provide a purchase date in the format YYYY-MM-DD")]
    InvalidPurchaseDate,

    /// Purchase time absent or empty. Format is NOT checked here.
    #[error("Please provide a purchase time in the format HH:MM")]
    InvalidPurchaseTime,

    /// Items absent, not an array, or empty.
    #[error("Please provide at least one item")]
    InvalidItems,

    /// Total absent or empty.
    #[error("Please provide a total amount in the format 0.00")]
    InvalidTotal,
}

impl ValidationError {
    /// Machine-readable code for API clients.
    pub const fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingReceipt => "MISSING_RECEIPT",
            ValidationError::InvalidRetailer => "INVALID_RETAILER",
            ValidationError::InvalidPurchaseDate => "INVALID_PURCHASE_DATE",
            ValidationError::InvalidPurchaseTime => "INVALID_PURCHASE_TIME",
            ValidationError::InvalidItems => "INVALID_ITEMS",
            ValidationError::InvalidTotal => "INVALID_TOTAL",
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
