//! Plain (non-reactive) persistent state cell.
//!
//! A `PersistentCell` owns its value. Reads come from memory; every change
//! is committed in memory first and then written through its `Slot`. When the
//! store was unavailable at construction the cell is an ordinary mutable
//! value holder.

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;

use std::fmt;
use std::sync::Arc;

use crate::codec::{Codec, JsonCodec};
use crate::config::StateOptions;
use crate::fallback::Fallback;
use crate::slot::Slot;
use crate::store::Store;

/// A new value, or a function of the previous one.
pub enum Update<T> {
    Replace(T),
    With(Box<dyn FnOnce(&T) -> T>),
}

impl<T> Update<T> {
    pub fn with<F>(f: F) -> Self
    where
        F: FnOnce(&T) -> T + 'static,
    {
        Self::With(Box::new(f))
    }

    /// Compute the next value from `prev`.
    pub fn apply(self, prev: &T) -> T {
        match self {
            Self::Replace(value) => value,
            Self::With(f) => f(prev),
        }
    }
}

impl<T> From<T> for Update<T> {
    fn from(value: T) -> Self {
        Self::Replace(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Update<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replace(value) => f.debug_tuple("Replace").field(value).finish(),
            Self::With(_) => f.write_str("With(..)"),
        }
    }
}

pub struct PersistentCell<T, C = JsonCodec> {
    slot: Slot<C>,
    fallback: Fallback<T>,
    value: T,
}

impl<T> PersistentCell<T>
where
    T: Clone,
    JsonCodec: Codec<T>,
{
    /// JSON-encoded cell with default options.
    pub fn new(identifier: &str, fallback: impl Into<Fallback<T>>, store: Arc<dyn Store>) -> Self {
        Self::create(identifier, fallback, Some(store), StateOptions::default())
    }
}

impl<T, C> PersistentCell<T, C>
where
    T: Clone,
    C: Codec<T>,
{
    /// Probe `store`, then initialize from the stored entry or `fallback`.
    ///
    /// Never fails: an absent or unusable store yields a non-persistent cell,
    /// and an unreadable entry yields the fallback.
    pub fn create(
        identifier: &str,
        fallback: impl Into<Fallback<T>>,
        store: Option<Arc<dyn Store>>,
        options: StateOptions<C>,
    ) -> Self {
        let slot = Slot::open(identifier, store, options);
        let fallback = fallback.into();
        let value = slot.load(&fallback);
        Self { slot, fallback, value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    /// Whether the store passed the availability probe at construction.
    pub fn is_persistent(&self) -> bool {
        self.slot.is_persistent()
    }

    pub fn key(&self) -> &str {
        self.slot.key()
    }

    pub fn set(&mut self, value: T) {
        self.apply(Update::Replace(value));
    }

    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(&self.value);
        self.commit(next);
    }

    pub fn apply(&mut self, update: impl Into<Update<T>>) {
        let next = update.into().apply(&self.value);
        self.commit(next);
    }

    /// Delete the stored entry and reset to a freshly resolved fallback.
    pub fn remove(&mut self) {
        self.slot.clear();
        self.value = self.fallback.resolve();
    }

    fn commit(&mut self, next: T) {
        self.value = next;
        self.slot.save(&self.value);
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PersistentCell<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistentCell")
            .field("key", &self.slot.key())
            .field("value", &self.value)
            .field("persistent", &self.slot.is_persistent())
            .finish()
    }
}
