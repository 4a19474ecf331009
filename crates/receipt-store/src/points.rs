//! # Points Cache
//!
//! Write-once map from [`ReceiptId`] to the points computed for it.
//!
//! A score is a pure function of an immutable receipt, so the first value
//! written for an id is the only value it can ever have. Later writes for
//! the same id are ignored rather than replacing it.

use std::collections::HashMap;
use std::sync::Arc;

use receipt_core::ReceiptId;
use tokio::sync::RwLock;
use tracing::debug;

/// Shared cache of computed points.
#[derive(Debug, Clone, Default)]
pub struct PointsCache {
    points: Arc<RwLock<HashMap<ReceiptId, i64>>>,
}

impl PointsCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached points for a receipt, if already computed.
    pub async fn get(&self, id: &ReceiptId) -> Option<i64> {
        self.points.read().await.get(id).copied()
    }

    /// Caches points for a receipt unless a value is already present.
    ///
    /// Returns the value that ends up cached.
    pub async fn insert_once(&self, id: ReceiptId, points: i64) -> i64 {
        let mut cache = self.points.write().await;
        let cached = *cache.entry(id).or_insert(points);

        if cached != points {
            debug!(id = %id, cached, computed = points, "Points already cached, keeping first value");
        }

        cached
    }

    /// Number of cached scores.
    pub async fn len(&self) -> usize {
        self.points.read().await.len()
    }

    /// True when nothing has been cached yet.
    pub async fn is_empty(&self) -> bool {
        self.points.read().await.is_empty()
    }
}
