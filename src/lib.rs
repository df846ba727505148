//! # persistent-state
//!
//! A Leptos state hook that mirrors a value into a synchronous key/value
//! store (browser `localStorage` under the `hydrate` feature) so the value
//! survives page reloads.
//!
//! The crate is split into the persistence policy (`slot`), a plain mutable
//! cell built on it (`cell`, `binding`), and the reactive hook surface
//! (`hook`). Storage and serialization are injected capabilities (`store`,
//! `codec`), and every recoverable failure is reported to a `DiagnosticSink`
//! instead of surfacing to the caller.

pub mod binding;
pub mod cell;
pub mod codec;
pub mod config;
pub mod diagnostics;
pub mod fallback;
pub mod hook;
pub mod slot;
pub mod store;

pub use binding::{Binding, bind_identifier};
pub use cell::{PersistentCell, Update};
pub use codec::{Codec, CodecError, FromStrCodec, JsonCodec};
pub use config::{PersistConfig, StateOptions};
pub use diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
pub use fallback::Fallback;
pub use hook::{PersistentSetter, bind_persistent_state, default_store, use_persistent_state, use_persistent_state_with};
pub use slot::Slot;
pub use store::memory::MemoryStore;
pub use store::{Store, StoreError};
