//! Persistence configuration.
//!
//! `PersistConfig::from_env` mirrors the env-driven config used on the
//! server side; in the browser no variables exist and the defaults apply.
//!
//! - `PERSISTENT_STATE_KEY_PREFIX`: prepended to every identifier (default empty)
//! - `PERSISTENT_STATE_PROBE_KEY`: key used by the availability probe

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::Arc;

use crate::codec::JsonCodec;
use crate::diagnostics::{DiagnosticSink, TracingSink};

pub const DEFAULT_PROBE_KEY: &str = "__persistent_state_probe__";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistConfig {
    pub key_prefix: String,
    /// Key written and deleted by the availability probe. A binding whose
    /// store key equals it is never persistent.
    pub probe_key: String,
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self { key_prefix: String::new(), probe_key: DEFAULT_PROBE_KEY.to_string() }
    }
}

impl PersistConfig {
    pub fn from_env() -> Self {
        Self {
            key_prefix: env_string("PERSISTENT_STATE_KEY_PREFIX", ""),
            probe_key: env_string("PERSISTENT_STATE_PROBE_KEY", DEFAULT_PROBE_KEY),
        }
    }

    /// Full store key for `identifier`.
    pub fn store_key(&self, identifier: &str) -> String {
        format!("{}{identifier}", self.key_prefix)
    }
}

/// Unset or empty variables fall back to `default`.
pub(crate) fn env_string(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

/// Everything a cell needs besides its identifier, fallback and store.
#[derive(Clone)]
pub struct StateOptions<C = JsonCodec> {
    pub config: PersistConfig,
    pub codec: C,
    pub sink: Arc<dyn DiagnosticSink>,
}

impl Default for StateOptions<JsonCodec> {
    fn default() -> Self {
        Self { config: PersistConfig::default(), codec: JsonCodec, sink: Arc::new(TracingSink) }
    }
}

impl<C> StateOptions<C> {
    #[must_use]
    pub fn with_config(self, config: PersistConfig) -> Self {
        Self { config, ..self }
    }

    #[must_use]
    pub fn with_sink<K>(self, sink: K) -> Self
    where
        K: DiagnosticSink + 'static,
    {
        Self { sink: Arc::new(sink), ..self }
    }

    #[must_use]
    pub fn with_codec<D>(self, codec: D) -> StateOptions<D> {
        StateOptions { config: self.config, codec, sink: self.sink }
    }
}
