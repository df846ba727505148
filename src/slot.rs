//! Synchronization policy for one store key.
//!
//! DESIGN
//! ======
//! A `Slot` is opened once per binding. Opening probes the store; if the
//! probe fails the store handle is dropped, so a non-persistent slot cannot
//! touch the store afterwards no matter what the caller does. The
//! availability decision is never revisited.
//!
//! A store key equal to the probe key would be wiped by the probe before
//! the first read, so such a slot is opened without a store.
//!
//! `load` runs at construction, `save` after every committed change, and
//! `clear` on removal. All three report failures to the sink and return
//! normally.

#[cfg(test)]
#[path = "slot_test.rs"]
mod slot_test;

use std::sync::Arc;

use tracing::debug;

use crate::codec::{Codec, JsonCodec};
use crate::config::StateOptions;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::fallback::Fallback;
use crate::store::{Store, probe};

pub struct Slot<C = JsonCodec> {
    key: String,
    store: Option<Arc<dyn Store>>,
    codec: C,
    sink: Arc<dyn DiagnosticSink>,
}

impl<C> Slot<C> {
    /// Bind `identifier` to `store`, probing availability once.
    pub fn open(identifier: &str, store: Option<Arc<dyn Store>>, options: StateOptions<C>) -> Self {
        let StateOptions { config, codec, sink } = options;
        let key = config.store_key(identifier);
        let store = if key == config.probe_key {
            debug!(key = %key, "store key collides with probe key; persistence disabled");
            None
        } else {
            store.filter(|s| probe(&**s, &config.probe_key))
        };
        Self { key, store, codec, sink }
    }

    /// Store key, including any configured prefix.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_persistent(&self) -> bool {
        self.store.is_some()
    }

    /// Read the stored value, or resolve `fallback` when there is none.
    pub fn load<T>(&self, fallback: &Fallback<T>) -> T
    where
        T: Clone,
        C: Codec<T>,
    {
        let Some(store) = &self.store else {
            return fallback.resolve();
        };

        match store.get(&self.key) {
            Ok(Some(text)) => match self.codec.decode(&text) {
                Ok(value) => value,
                Err(source) => {
                    self.report(Diagnostic::DecodeFailed { key: self.key.clone(), source });
                    fallback.resolve()
                }
            },
            Ok(None) => fallback.resolve(),
            Err(source) => {
                self.report(Diagnostic::ReadFailed { key: self.key.clone(), source });
                fallback.resolve()
            }
        }
    }

    /// Write `value` to the store. A failed write leaves nothing to undo.
    pub fn save<T>(&self, value: &T)
    where
        C: Codec<T>,
    {
        let Some(store) = &self.store else {
            return;
        };

        let text = match self.codec.encode(value) {
            Ok(text) => text,
            Err(source) => {
                self.report(Diagnostic::EncodeFailed { key: self.key.clone(), source });
                return;
            }
        };

        if let Err(source) = store.set(&self.key, &text) {
            self.report(Diagnostic::WriteFailed { key: self.key.clone(), source });
        }
    }

    /// Delete the stored entry.
    pub fn clear(&self) {
        let Some(store) = &self.store else {
            return;
        };

        if let Err(source) = store.delete(&self.key) {
            self.report(Diagnostic::RemoveFailed { key: self.key.clone(), source });
        }
    }

    fn report(&self, diagnostic: Diagnostic) {
        self.sink.report(&diagnostic);
    }
}
