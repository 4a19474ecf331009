//! # Receipt Repository
//!
//! The application-level state object: one [`ReceiptStore`] plus one
//! [`PointsCache`], created once and injected into the HTTP layer.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      ReceiptRepository                                  │
//! │                                                                         │
//! │  submit(payload)                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_receipt ──Err──► StoreError::Validation (nothing stored)     │
//! │       │ Ok                                                              │
//! │       ▼                                                                 │
//! │  ReceiptStore::insert (payload + view) ──► ReceiptId                   │
//! │                                                                         │
//! │  points(id)                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PointsCache::get ──hit──► cached points                               │
//! │       │ miss                                                            │
//! │       ▼                                                                 │
//! │  ReceiptStore::get ──Err──► StoreError::NotFound                       │
//! │       │ Ok                                                              │
//! │       ▼                                                                 │
//! │  calculate_points (no lock held) ──► PointsCache::insert_once          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrent First Requests
//! Two requests for the same unscored receipt may both miss the cache and
//! both score it. Scoring is deterministic and the cache keeps the first
//! write, so both callers return the same number.

use receipt_core::{calculate_points, score_receipt, validate_receipt};
use receipt_core::{PointsBreakdown, ReceiptId};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::points::PointsCache;
use crate::receipts::{ReceiptStore, StoredReceipt};

/// Counts reported by [`ReceiptRepository::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryStats {
    pub receipts: usize,
    pub cached_scores: usize,
}

/// Shared receipt state for one application instance.
///
/// ## Usage in Handlers
/// ```rust,ignore
/// async fn get_points(
///     State(repo): State<ReceiptRepository>,
///     Path(id): Path<String>,
/// ) -> Result<Json<PointsResponse>, ApiError> {
///     let points = repo.points(&id).await?;
///     Ok(Json(PointsResponse { points }))
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReceiptRepository {
    receipts: ReceiptStore,
    points: PointsCache,
}

impl ReceiptRepository {
    /// Creates a repository with empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository around existing storage handles.
    pub fn with_storage(receipts: ReceiptStore, points: PointsCache) -> Self {
        ReceiptRepository { receipts, points }
    }

    /// Returns the receipt store.
    pub fn receipts(&self) -> &ReceiptStore {
        &self.receipts
    }

    /// Returns the points cache.
    pub fn points_cache(&self) -> &PointsCache {
        &self.points
    }

    /// Validates a submitted payload and stores it.
    ///
    /// ## Returns
    /// * `Ok(ReceiptId)` - Fresh id of the stored receipt
    /// * `Err(StoreError::Validation)` - First failed check; nothing stored
    pub async fn submit(&self, payload: Option<&Value>) -> StoreResult<ReceiptId> {
        let receipt = validate_receipt(payload)?;
        let payload = payload.cloned().unwrap_or_default();
        let id = self.receipts.insert(StoredReceipt::new(payload, receipt)).await;
        info!(id = %id, "Receipt accepted");
        Ok(id)
    }

    /// Gets a stored receipt exactly as it was submitted.
    pub async fn receipt(&self, id: &str) -> StoreResult<Value> {
        Ok(self.stored(id).await?.payload)
    }

    /// Points for a stored receipt, computed on first request.
    pub async fn points(&self, id: &str) -> StoreResult<i64> {
        let id = parse_id(id)?;

        if let Some(points) = self.points.get(&id).await {
            debug!(id = %id, points, "Points cache hit");
            return Ok(points);
        }

        let stored = self.receipts.get(&id).await?;
        let points = calculate_points(&stored.receipt);
        debug!(id = %id, points, "Points cache miss, scored receipt");

        Ok(self.points.insert_once(id, points).await)
    }

    /// Per-rule scores for a stored receipt. Not cached.
    pub async fn breakdown(&self, id: &str) -> StoreResult<PointsBreakdown> {
        let stored = self.stored(id).await?;
        Ok(score_receipt(&stored.receipt))
    }

    async fn stored(&self, id: &str) -> StoreResult<StoredReceipt> {
        let id = parse_id(id)?;
        self.receipts.get(&id).await
    }

    /// Current number of stored receipts and cached scores.
    pub async fn stats(&self) -> RepositoryStats {
        RepositoryStats {
            receipts: self.receipts.len().await,
            cached_scores: self.points.len().await,
        }
    }
}

/// Parses a client-supplied id. Anything that is not a UUID is unknown.
fn parse_id(id: &str) -> StoreResult<ReceiptId> {
    id.parse::<ReceiptId>().map_err(StoreError::from)
}

// =============================================================================
// Unit Tests
// =============================================================================
