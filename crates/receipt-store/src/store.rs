//! # Receipt Store
//!
//! Identifier-keyed, process-lifetime storage for submitted receipts.
//!
//! ## Receipt Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   submit(receipt) ──► Submitted ══► Scorable ──► score(id) (any times)  │
//! │                                                                         │
//! │   No update, no delete. Scores are recomputed on every call.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The map is a [`DashMap`]: sharded locks, so concurrent submits and
//! scores on different shards never contend. Callers share the store
//! behind an `Arc` and need no locking of their own.
//!
//! - Inserts go through the entry API, so a candidate id is checked and
//!   claimed under one shard lock. Two racing submits cannot both claim it.
//! - Receipts are stored as `Arc<Receipt>`; scoring clones the `Arc` out
//!   and releases the shard lock before evaluating rules.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use receipt_core::{rules, PointsBreakdown, Receipt};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::id::{IdGenerator, UuidGenerator};

/// In-memory receipt store.
///
/// ## Usage
/// ```rust,ignore
/// let store = Arc::new(ReceiptStore::new());
///
/// let id = store.submit(receipt);
/// let points = store.score(&id)?;
/// ```
pub struct ReceiptStore<G: IdGenerator = UuidGenerator> {
    receipts: DashMap<String, Arc<Receipt>>,
    generator: G,
}

impl ReceiptStore<UuidGenerator> {
    /// Creates an empty store issuing UUID v4 identifiers.
    pub fn new() -> Self {
        ReceiptStore::with_generator(UuidGenerator)
    }
}

impl Default for ReceiptStore<UuidGenerator> {
    fn default() -> Self {
        ReceiptStore::new()
    }
}

impl<G: IdGenerator> ReceiptStore<G> {
    /// Creates an empty store using the given identifier generator.
    pub fn with_generator(generator: G) -> Self {
        ReceiptStore {
            receipts: DashMap::new(),
            generator,
        }
    }

    /// Stores a receipt and returns its new identifier.
    ///
    /// The receipt is stored exactly as given: empty strings and an empty
    /// item list are accepted, and field parsing is deferred to [`score`].
    ///
    /// ## Collisions
    /// If the generator returns an id that is already taken, the store asks
    /// for another one until it gets a free id.
    ///
    /// [`score`]: ReceiptStore::score
    pub fn submit(&self, receipt: Receipt) -> String {
        let receipt = Arc::new(receipt);

        loop {
            let candidate = self.generator.generate();

            match self.receipts.entry(candidate) {
                Entry::Occupied(entry) => {
                    warn!(id = %entry.key(), "Generated receipt id already in use, regenerating");
                }
                Entry::Vacant(entry) => {
                    let id = entry.key().clone();
                    entry.insert(Arc::clone(&receipt));
                    info!(%id, retailer = %receipt.retailer, items = receipt.items.len(), "Stored receipt");
                    return id;
                }
            }
        }
    }

    /// Returns the receipt stored under `id`, if any.
    pub fn get(&self, id: &str) -> Option<Arc<Receipt>> {
        self.receipts.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// Evaluates every rule against the stored receipt.
    ///
    /// ## Errors
    /// - [`StoreError::NotFound`] if no receipt has this id
    /// - [`StoreError::Validation`] if a stored field does not parse
    pub fn breakdown(&self, id: &str) -> StoreResult<PointsBreakdown> {
        let receipt = self.get(id).ok_or_else(|| {
            warn!(%id, "Receipt not found");
            StoreError::not_found(id)
        })?;

        let breakdown = rules::score_receipt(&receipt).map_err(|e| {
            warn!(%id, error = %e, "Receipt failed validation during scoring");
            StoreError::from(e)
        })?;

        debug!(%id, ?breakdown, "Points breakdown");
        Ok(breakdown)
    }

    /// Returns the points for the receipt stored under `id`.
    ///
    /// Recomputed on every call; nothing is cached.
    pub fn score(&self, id: &str) -> StoreResult<u64> {
        let points = self.breakdown(id)?.total();
        info!(%id, points, "Calculated points");
        Ok(points)
    }

    /// Number of stored receipts.
    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    /// Checks if no receipt has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
