#[cfg(test)]
#[path = "fallback_test.rs"]
mod fallback_test;

use std::fmt;
use std::sync::Arc;

/// Value used when the store has nothing usable for a key.
///
/// A `Producer` is only called when the fallback is actually needed, so an
/// expensive default costs nothing when a stored value decodes.
pub enum Fallback<T> {
    Literal(T),
    Producer(Arc<dyn Fn() -> T + Send + Sync>),
}

impl<T> Fallback<T> {
    pub fn from_fn<F>(producer: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::Producer(Arc::new(producer))
    }
}

impl<T: Clone> Fallback<T> {
    /// Produce the fallback value.
    pub fn resolve(&self) -> T {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Producer(producer) => producer(),
        }
    }
}

impl<T> From<T> for Fallback<T> {
    fn from(value: T) -> Self {
        Self::Literal(value)
    }
}

impl<T: Clone> Clone for Fallback<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Literal(value) => Self::Literal(value.clone()),
            Self::Producer(producer) => Self::Producer(Arc::clone(producer)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Fallback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}
