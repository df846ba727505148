//! Leptos hook surface.
//!
//! `use_persistent_state` returns a read signal, a setter and the
//! availability flag. The setter commits to the signal first, so the new
//! value is visible to the view, and then writes through the slot.
//!
//! Without the `hydrate` feature there is no browser store, so server
//! rendering always gets a plain signal holding the fallback.

#[cfg(test)]
#[path = "hook_test.rs"]
mod hook_test;

use std::sync::Arc;

use leptos::prelude::{ReadSignal, RwSignal, Set, WithUntracked};
use tracing::debug;

use crate::cell::Update;
use crate::codec::{Codec, JsonCodec};
use crate::config::StateOptions;
use crate::fallback::Fallback;
use crate::slot::Slot;
use crate::store::Store;

/// Store used by [`use_persistent_state`]: `localStorage` in the browser.
pub fn default_store() -> Option<Arc<dyn Store>> {
    #[cfg(feature = "hydrate")]
    {
        let store: Arc<dyn Store> = Arc::new(crate::store::web::WebStorage::Local);
        Some(store)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Writes to a persistent signal.
pub struct PersistentSetter<T, C = JsonCodec> {
    signal: RwSignal<T>,
    slot: Arc<Slot<C>>,
    fallback: Fallback<T>,
}

impl<T: Clone + 'static, C> Clone for PersistentSetter<T, C> {
    fn clone(&self) -> Self {
        Self { signal: self.signal, slot: Arc::clone(&self.slot), fallback: self.fallback.clone() }
    }
}

impl<T, C> PersistentSetter<T, C>
where
    T: Clone + Send + Sync + 'static,
    C: Codec<T>,
{
    pub fn set(&self, value: T) {
        self.commit(value);
    }

    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let Some(next) = self.signal.try_with_untracked(f) else {
            self.dropped();
            return;
        };
        self.commit(next);
    }

    pub fn apply(&self, update: impl Into<Update<T>>) {
        let update = update.into();
        let Some(next) = self.signal.try_with_untracked(|prev| update.apply(prev)) else {
            self.dropped();
            return;
        };
        self.commit(next);
    }

    /// Delete the stored entry and reset the signal to the fallback.
    pub fn remove(&self) {
        if self.signal.try_set(self.fallback.resolve()).is_some() {
            self.dropped();
            return;
        }
        self.slot.clear();
    }

    pub fn is_persistent(&self) -> bool {
        self.slot.is_persistent()
    }

    fn commit(&self, next: T) {
        let committed = self.signal.try_set(next).is_none()
            && self.signal.try_with_untracked(|value| self.slot.save(value)).is_some();
        if !committed {
            self.dropped();
        }
    }

    fn dropped(&self) {
        debug!(key = self.slot.key(), "signal disposed; setter call ignored");
    }
}

/// Persistent state in browser `localStorage`, JSON encoded.
pub fn use_persistent_state<T>(
    identifier: &str,
    fallback: impl Into<Fallback<T>>,
) -> (ReadSignal<T>, PersistentSetter<T>, bool)
where
    T: Clone + Send + Sync + 'static,
    JsonCodec: Codec<T>,
{
    use_persistent_state_with(identifier, fallback, default_store(), StateOptions::default())
}

/// Persistent state with an explicit store and options.
pub fn use_persistent_state_with<T, C>(
    identifier: &str,
    fallback: impl Into<Fallback<T>>,
    store: Option<Arc<dyn Store>>,
    options: StateOptions<C>,
) -> (ReadSignal<T>, PersistentSetter<T, C>, bool)
where
    T: Clone + Send + Sync + 'static,
    C: Codec<T>,
{
    let slot = Slot::open(identifier, store, options);
    let fallback = fallback.into();
    let signal = RwSignal::new(slot.load(&fallback));
    let persistent = slot.is_persistent();

    let setter = PersistentSetter { signal, slot: Arc::new(slot), fallback };
    (signal.read_only(), setter, persistent)
}

/// Fix identifier, fallback, store and options for several call sites.
///
/// Each call of the returned closure creates an independent signal seeded
/// from the store at that moment.
pub fn bind_persistent_state<T, C>(
    identifier: impl Into<String>,
    fallback: impl Into<Fallback<T>>,
    store: Option<Arc<dyn Store>>,
    options: StateOptions<C>,
) -> impl Fn() -> (ReadSignal<T>, PersistentSetter<T, C>, bool)
where
    T: Clone + Send + Sync + 'static,
    C: Codec<T> + Clone,
{
    let identifier = identifier.into();
    let fallback = fallback.into();
    move || use_persistent_state_with(&identifier, fallback.clone(), store.clone(), options.clone())
}
