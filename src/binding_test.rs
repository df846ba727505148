use super::*;

use crate::store::memory::MemoryStore;
use crate::store::test_helpers::{CountingStore, as_store, memory, unavailable_store};

fn count_binding(mem: &MemoryStore) -> Binding<i32> {
    bind_identifier("count", 0_i32, memory(mem), StateOptions::default())
}

#[test]
fn binding_keeps_identifier() {
    let binding = count_binding(&MemoryStore::new());
    assert_eq!(binding.identifier(), "count");
}

#[test]
fn fresh_binding_returns_fallback() {
    let binding = count_binding(&MemoryStore::new());
    assert_eq!(*binding.access().get(), 0);
}

#[test]
fn call_sites_hold_independent_snapshots() {
    let mem = MemoryStore::new();
    let binding = count_binding(&mem);
    let mut first = binding.access();
    let second = binding.access();

    first.set(5);

    // No implicit push into an existing snapshot.
    assert_eq!(*second.get(), 0);
    // A fresh read observes the write.
    assert_eq!(*binding.access().get(), 5);
}

#[test]
fn separate_bindings_share_store_entry() {
    let mem = MemoryStore::new();
    let a = count_binding(&mem);
    let b = count_binding(&mem);

    a.access().set(11);

    assert_eq!(*b.access().get(), 11);
}

#[test]
fn last_write_wins() {
    let mem = MemoryStore::new();
    let binding = count_binding(&mem);
    let mut first = binding.access();
    let mut second = binding.access();

    first.set(1);
    second.set(2);

    assert_eq!(*binding.access().get(), 2);
    assert_eq!(*first.get(), 1);
}

#[test]
fn accessor_closure_reads_fresh() {
    let mem = MemoryStore::new();
    let access = count_binding(&mem).into_accessor();

    access().update(|n| n + 3);

    assert_eq!(*access().get(), 3);
}

#[test]
fn producer_fallback_is_reused_per_access() {
    let binding: Binding<String> = bind_identifier(
        "greeting",
        Fallback::from_fn(|| String::from("hello")),
        memory(&MemoryStore::new()),
        StateOptions::default(),
    );
    assert_eq!(binding.access().get(), "hello");
    assert_eq!(binding.access().get(), "hello");
}

#[test]
fn each_access_probes_once() {
    let store = Arc::new(CountingStore::new());
    let binding: Binding<i32> = bind_identifier("count", 0_i32, as_store(&store), StateOptions::default());

    binding.access();
    binding.access();

    // probe write per access, nothing else written
    assert_eq!(store.sets(), 2);
}

#[test]
fn unavailable_store_yields_plain_holders() {
    let store = Arc::new(unavailable_store());
    let binding: Binding<i32> = bind_identifier("count", 4_i32, as_store(&store), StateOptions::default());

    let mut cell = binding.access();
    cell.set(9);

    assert!(!cell.is_persistent());
    assert_eq!(*binding.access().get(), 4);
}
