//! # Domain Types
//!
//! Core domain types used throughout Receipt Points.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Receipt      │   │      Item       │   │ PointsBreakdown │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  retailer       │   │  short_desc?    │   │  one field per  │       │
//! │  │  purchase_date  │──►│  price?         │   │  scoring rule   │       │
//! │  │  purchase_time  │   └─────────────────┘   │  + total()      │       │
//! │  │  items[]        │                         └─────────────────┘       │
//! │  │  total          │   ┌─────────────────┐                             │
//! │  └─────────────────┘   │   ReceiptId     │  UUID v4, assigned by the   │
//! │                        │  ─────────────  │  store at insertion time    │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Raw Text Fields
//! Dates, times and amounts stay as the text the client sent. Submission
//! only checks that they are present; the rule engine parses them and
//! scores zero for anything it cannot read.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

// =============================================================================
// Receipt Id
// =============================================================================

/// Identifier assigned to a stored receipt.
///
/// Random 128-bit UUID v4. Serialized as the hyphenated lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        ReceiptId(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[inline]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        ReceiptId(uuid)
    }

    /// Returns the underlying UUID.
    #[inline]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ReceiptId {
    fn default() -> Self {
        ReceiptId::new()
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Accepts only the exact form handed out by [`Display`](fmt::Display):
/// hyphenated lowercase, no surrounding whitespace. Uppercase, simple,
/// braced and `urn:` spellings were never issued, so they are rejected.
impl FromStr for ReceiptId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidReceiptId(s.to_string());

        let uuid = Uuid::parse_str(s).map_err(|_| invalid())?;
        if uuid.hyphenated().to_string() != s {
            return Err(invalid());
        }

        Ok(ReceiptId(uuid))
    }
}

// =============================================================================
// Item
// =============================================================================

/// A line item on a receipt.
///
/// Both fields are optional: item shape is not validated on submission,
/// and a malformed item simply scores as if the field were absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Free-text description, trimmed before scoring.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub short_description: Option<String>,

    /// Price as decimal text, e.g. "6.49".
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub price: Option<String>,
}

impl Item {
    /// Creates an item with both fields set.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: Some(short_description.into()),
            price: Some(price.into()),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A receipt that passed submission checks.
///
/// The scoring view of a submission. The store keeps it next to the
/// payload as sent; neither is mutated after insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer name, non-blank.
    pub retailer: String,

    /// Expected `YYYY-MM-DD`.
    pub purchase_date: String,

    /// Expected `HH:MM`, 24-hour clock.
    pub purchase_time: String,

    /// At least one item.
    pub items: Vec<Item>,

    /// Decimal text, e.g. "35.35".
    pub total: String,
}

// =============================================================================
// Points Breakdown
// =============================================================================

/// Per-rule scores for one receipt.
///
/// ## Rules
/// ```text
/// retailer_name          1 per ASCII letter/digit
/// round_dollar_total     50 if total has no cents
/// quarter_multiple_total 25 if total is a multiple of 0.25
/// item_pairs             5 per two items
/// item_descriptions      ceil(price * 0.2) per item with trimmed length % 3 == 0
/// odd_purchase_day       6 if the day of month is odd
/// afternoon_purchase     10 if 14:00 < time < 16:00
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PointsBreakdown {
    pub retailer_name: i64,
    pub round_dollar_total: i64,
    pub quarter_multiple_total: i64,
    pub item_pairs: i64,
    pub item_descriptions: i64,
    pub odd_purchase_day: i64,
    pub afternoon_purchase: i64,
}

impl PointsBreakdown {
    /// Sum of all rule scores.
    pub fn total(&self) -> i64 {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_purchase_day,
            self.afternoon_purchase,
        ]
        .into_iter()
        .fold(0i64, i64::saturating_add)
    }
}

// =============================================================================
// API Responses
// =============================================================================

/// Response to a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProcessedReceipt {
    pub id: String,
}

impl From<ReceiptId> for ProcessedReceipt {
    fn from(id: ReceiptId) -> Self {
        ProcessedReceipt { id: id.to_string() }
    }
}

/// Points awarded to a stored receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PointsResponse {
    pub points: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
