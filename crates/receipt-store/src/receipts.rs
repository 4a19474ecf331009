//! # Receipt Store
//!
//! Insert-only map from [`ReceiptId`] to the receipt that was submitted.
//!
//! Each entry keeps the payload exactly as the client sent it (extra keys,
//! JSON types and all) next to the [`Receipt`] view the rules score.
//!
//! ## Receipt Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Receipt Lifecycle                                 │
//! │                                                                         │
//! │  1. INSERT                                                             │
//! │     └── insert() → fresh ReceiptId, payload stored verbatim            │
//! │                                                                         │
//! │  2. READ (any number of times)                                         │
//! │     └── get() → clone of the stored payload + scoring view             │
//! │                                                                         │
//! │  No update, no delete. The receipt lives as long as the store.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use receipt_core::{Receipt, ReceiptId};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// A submitted receipt as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredReceipt {
    /// The payload exactly as submitted.
    pub payload: Value,

    /// Validated view of the payload used for scoring.
    pub receipt: Receipt,
}

impl StoredReceipt {
    pub fn new(payload: Value, receipt: Receipt) -> Self {
        StoredReceipt { payload, receipt }
    }
}

/// Shared store of submitted receipts.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct ReceiptStore {
    receipts: Arc<RwLock<HashMap<ReceiptId, StoredReceipt>>>,
}

impl ReceiptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a receipt under a freshly generated id.
    ///
    /// The id is drawn while holding the write lock, so two concurrent
    /// inserts can never be handed the same id, and an existing entry is
    /// never overwritten.
    pub async fn insert(&self, stored: StoredReceipt) -> ReceiptId {
        let mut receipts = self.receipts.write().await;

        loop {
            let id = ReceiptId::new();
            if let Entry::Vacant(slot) = receipts.entry(id) {
                debug!(
                    id = %id,
                    retailer = %stored.receipt.retailer,
                    items = stored.receipt.items.len(),
                    "Storing receipt"
                );
                slot.insert(stored);
                return id;
            }
        }
    }

    /// Gets a receipt by id.
    pub async fn get(&self, id: &ReceiptId) -> StoreResult<StoredReceipt> {
        self.receipts
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id.to_string()))
    }

    /// Checks whether a receipt is stored under this id.
    pub async fn contains(&self, id: &ReceiptId) -> bool {
        self.receipts.read().await.contains_key(id)
    }

    /// Number of stored receipts.
    pub async fn len(&self) -> usize {
        self.receipts.read().await.len()
    }

    /// True when nothing has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.receipts.read().await.is_empty()
    }
}
