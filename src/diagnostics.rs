//! Non-fatal conditions reported while persisting state.
//!
//! ERROR HANDLING
//! ==============
//! Nothing in this crate fails the caller because storage misbehaved. Decode,
//! read, encode, write and remove failures become a [`Diagnostic`] handed to
//! the configured [`DiagnosticSink`], and the in-memory value carries on.

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;

use tracing::warn;

use crate::codec::CodecError;
use crate::store::StoreError;

/// A recoverable persistence failure for one store key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    #[error("could not read `{key}`: {source}")]
    ReadFailed { key: String, source: StoreError },
    #[error("stored value for `{key}` is not decodable: {source}")]
    DecodeFailed { key: String, source: CodecError },
    #[error("could not encode value for `{key}`: {source}")]
    EncodeFailed { key: String, source: CodecError },
    #[error("could not write `{key}`: {source}")]
    WriteFailed { key: String, source: StoreError },
    #[error("could not remove `{key}`: {source}")]
    RemoveFailed { key: String, source: StoreError },
}

impl Diagnostic {
    /// Store key the condition applies to.
    pub fn key(&self) -> &str {
        match self {
            Self::ReadFailed { key, .. }
            | Self::DecodeFailed { key, .. }
            | Self::EncodeFailed { key, .. }
            | Self::WriteFailed { key, .. }
            | Self::RemoveFailed { key, .. } => key,
        }
    }
}

/// Receiver for [`Diagnostic`]s.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic) + Send + Sync,
{
    fn report(&self, diagnostic: &Diagnostic) {
        self(diagnostic);
    }
}

/// Default sink: one `warn` event per diagnostic.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        warn!(key = diagnostic.key(), error = %diagnostic, "persistent state diagnostic");
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
