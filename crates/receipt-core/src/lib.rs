//! # receipt-core: Pure Business Logic for Receipt Points
//!
//! This crate is the **heart** of Receipt Points. It validates submitted
//! receipts and scores them, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Points Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    receipt-api (axum)                           │   │
//! │  │    POST /receipts/process   GET /receipts/{id}/points           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                receipt-store (shared state)                     │   │
//! │  │        ReceiptStore  +  PointsCache  +  ReceiptRepository       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ receipt-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  amount   │  │   rules   │  │ validation│  │   │
//! │  │   │  Receipt  │  │  Amount   │  │  7 rules  │  │  required │  │   │
//! │  │   │   Item    │  │ parse_amt │  │ Breakdown │  │  fields   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • NO LOGGING • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Receipt, Item, ReceiptId, PointsBreakdown)
//! - [`amount`] - Lenient decimal parsing for totals and prices
//! - [`error`] - Domain error types
//! - [`validation`] - Required-field checks on submitted receipts
//! - [`rules`] - The points rule engine
//! - [`text`] - Whitespace trimming and UTF-16 length
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Total Scoring**: Malformed fields score zero, they never error
//! 4. **Explicit Errors**: Validation errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::rules::calculate_points;
//! use receipt_core::validation::validate_receipt;
//! use serde_json::json;
//!
//! let payload = json!({
//!     "retailer": "M&M Corner Market",
//!     "purchaseDate": "2022-03-20",
//!     "purchaseTime": "14:33",
//!     "items": [
//!         { "shortDescription": "Gatorade", "price": "2.25" },
//!         { "shortDescription": "Gatorade", "price": "2.25" },
//!         { "shortDescription": "Gatorade", "price": "2.25" },
//!         { "shortDescription": "Gatorade", "price": "2.25" }
//!     ],
//!     "total": "9.00"
//! });
//!
//! let receipt = validate_receipt(Some(&payload)).unwrap();
//! assert_eq!(calculate_points(&receipt), 109);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod error;
pub mod rules;
pub mod text;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use receipt_core::Receipt` instead of
// `use receipt_core::types::Receipt`

pub use amount::Amount;
pub use error::{CoreError, ValidationError};
pub use rules::{calculate_points, score_receipt};
pub use types::*;
pub use validation::validate_receipt;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Points for each ASCII letter or digit in the retailer name.
pub const POINTS_PER_RETAILER_CHAR: i64 = 1;

/// Points when the total is a whole number of dollars.
pub const ROUND_TOTAL_POINTS: i64 = 50;

/// Points when the total is a multiple of `QUARTER_CENTS`.
pub const QUARTER_TOTAL_POINTS: i64 = 25;

/// Granularity of the quarter-multiple rule, in cents.
pub const QUARTER_CENTS: i64 = 25;

/// Points for every two items on the receipt.
pub const POINTS_PER_ITEM_PAIR: i64 = 5;

/// Multiplier applied to the price of items with a qualifying description.
pub const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;

/// Points when the purchase day of month is odd.
pub const ODD_DAY_POINTS: i64 = 6;

/// Points for purchases strictly between 14:00 and 16:00.
pub const AFTERNOON_POINTS: i64 = 10;

/// Afternoon window bounds in minutes since midnight (both exclusive).
pub const AFTERNOON_START_MINUTES: u32 = 14 * 60;
pub const AFTERNOON_END_MINUTES: u32 = 16 * 60;
