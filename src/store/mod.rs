//! Synchronous key/value store capability.
//!
//! DESIGN
//! ======
//! The store is passed to every cell explicitly as `Arc<dyn Store>` rather
//! than reached through a global, so tests substitute `MemoryStore` or a
//! failing fake. A missing store is `None`, which is how server-side
//! rendering and other non-browser contexts are modelled.
//!
//! AVAILABILITY
//! ============
//! `probe` writes and deletes a throwaway key. Any error means the store is
//! unusable for the lifetime of the cell that asked; it is never re-probed.
//!
//! If the write succeeds and the delete fails, the probe entry stays in the
//! store. The next successful probe with the same key removes it.


pub mod memory;
#[cfg(feature = "hydrate")]
pub mod web;

use tracing::debug;

/// Error returned by a [`Store`] operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store does not exist or refuses access in this context.
    #[error("storage is not available")]
    Unavailable,
    /// The write would exceed the store's quota.
    #[error("storage quota exceeded")]
    QuotaExceeded,
    /// Any other backend failure, with the backend's description.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// A synchronous string-to-string store.
///
/// Implementations must be cheap to call and must not block on I/O.
pub trait Store: Send + Sync {
    /// Read the entry for `key`. `Ok(None)` means the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any existing entry.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the entry for `key`. Deleting an absent key succeeds.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// Check whether `store` accepts a write and delete of `probe_key`.
pub fn probe(store: &dyn Store, probe_key: &str) -> bool {
    if let Err(e) = store.set(probe_key, probe_key) {
        debug!(error = %e, "storage probe failed; persistence disabled");
        return false;
    }
    if let Err(e) = store.delete(probe_key) {
        debug!(error = %e, key = probe_key, "storage probe entry left behind; persistence disabled");
        return false;
    }
    true
}

// =============================================================================
// TEST HELPERS
// =============================================================================
