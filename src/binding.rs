//! Derived-binding factory.
//!
//! `bind_identifier` fixes the identifier, fallback, store and options once
//! and hands out fresh cells on demand. Every `access` is a separate binding:
//! it probes, reads the current store entry, and owns its own value. Cells
//! from the same `Binding` share the store entry, not memory, so one cell's
//! update is visible to another only through a new `access`.

#[cfg(test)]
#[path = "binding_test.rs"]
mod binding_test;

use std::sync::Arc;

use crate::cell::PersistentCell;
use crate::codec::{Codec, JsonCodec};
use crate::config::StateOptions;
use crate::fallback::Fallback;
use crate::store::Store;

#[derive(Clone)]
pub struct Binding<T, C = JsonCodec> {
    identifier: String,
    fallback: Fallback<T>,
    store: Option<Arc<dyn Store>>,
    options: StateOptions<C>,
}

pub fn bind_identifier<T, C>(
    identifier: impl Into<String>,
    fallback: impl Into<Fallback<T>>,
    store: Option<Arc<dyn Store>>,
    options: StateOptions<C>,
) -> Binding<T, C>
where
    T: Clone,
    C: Codec<T> + Clone,
{
    Binding { identifier: identifier.into(), fallback: fallback.into(), store, options }
}

impl<T, C> Binding<T, C>
where
    T: Clone,
    C: Codec<T> + Clone,
{
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Create a new cell bound to the shared identifier.
    pub fn access(&self) -> PersistentCell<T, C> {
        PersistentCell::create(&self.identifier, self.fallback.clone(), self.store.clone(), self.options.clone())
    }

    /// Turn the binding into a zero-argument accessor.
    pub fn into_accessor(self) -> impl Fn() -> PersistentCell<T, C> {
        move || self.access()
    }
}
