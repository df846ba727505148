use super::test_helpers::CollectingSink;
use super::*;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn decode_failed() -> Diagnostic {
    Diagnostic::DecodeFailed { key: "prefs".into(), source: CodecError::Decode("expected value".into()) }
}

// =============================================================
// Diagnostic
// =============================================================

#[test]
fn key_is_exposed_for_every_variant() {
    let variants = [
        Diagnostic::ReadFailed { key: "a".into(), source: StoreError::Unavailable },
        Diagnostic::DecodeFailed { key: "b".into(), source: CodecError::Decode(String::new()) },
        Diagnostic::EncodeFailed { key: "c".into(), source: CodecError::Encode(String::new()) },
        Diagnostic::WriteFailed { key: "d".into(), source: StoreError::QuotaExceeded },
        Diagnostic::RemoveFailed { key: "e".into(), source: StoreError::Backend(String::new()) },
    ];
    let keys: Vec<&str> = variants.iter().map(Diagnostic::key).collect();
    assert_eq!(keys, ["a", "b", "c", "d", "e"]);
}

#[test]
fn message_names_key_and_cause() {
    let msg = decode_failed().to_string();
    assert!(msg.contains("`prefs`"), "{msg}");
    assert!(msg.contains("expected value"), "{msg}");
}

#[test]
fn write_failed_message_mentions_quota() {
    let diagnostic = Diagnostic::WriteFailed { key: "big".into(), source: StoreError::QuotaExceeded };
    assert_eq!(diagnostic.to_string(), "could not write `big`: storage quota exceeded");
}

#[test]
fn source_is_chained() {
    use std::error::Error as _;
    let diagnostic = decode_failed();
    assert!(diagnostic.source().is_some());
}

// =============================================================
// Sinks
// =============================================================

#[test]
fn closure_is_a_sink() {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let sink = move |_: &Diagnostic| {
        counter.fetch_add(1, Ordering::SeqCst);
    };
    sink.report(&decode_failed());
    sink.report(&decode_failed());
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn collecting_sink_keeps_order() {
    let sink = CollectingSink::new();
    sink.report(&decode_failed());
    sink.report(&Diagnostic::WriteFailed { key: "x".into(), source: StoreError::Unavailable });
    let seen = sink.diagnostics();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], decode_failed());
    assert_eq!(seen[1].key(), "x");
}

#[test]
fn tracing_sink_does_not_panic_without_subscriber() {
    TracingSink.report(&decode_failed());
}
