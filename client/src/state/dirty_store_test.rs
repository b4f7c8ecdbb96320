use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::state::dirty::{DIRTY_SECTIONS_KEY, DIRTY_STATE_KEY};
use crate::util::storage::{KeyValueStore, MemoryStorage};

fn store_with_memory() -> (DirtyStore, MemoryStorage) {
    let memory = MemoryStorage::new();
    (DirtyStore::new(Arc::new(memory.clone())), memory)
}

fn section_list(store: &DirtyStore) -> Vec<String> {
    store.snapshot().sections().iter().cloned().collect()
}

// =============================================================
// Mark / unmark
// =============================================================

#[test]
fn mark_a_then_b_makes_store_dirty_with_both_sections() {
    let (store, memory) = store_with_memory();
    store.mark("a");
    store.mark("b");
    assert!(store.is_dirty());
    assert_eq!(section_list(&store), ["a", "b"]);
    assert_eq!(memory.get(DIRTY_STATE_KEY).as_deref(), Some("true"));
    assert_eq!(memory.get(DIRTY_SECTIONS_KEY).as_deref(), Some(r#"["a","b"]"#));
}

#[test]
fn unmarking_both_sections_makes_store_clean() {
    let (store, memory) = store_with_memory();
    store.mark("a");
    store.mark("b");
    store.unmark("a");
    store.unmark("b");
    assert!(!store.is_dirty());
    assert!(section_list(&store).is_empty());
    assert_eq!(memory.get(DIRTY_STATE_KEY).as_deref(), Some("false"));
    assert_eq!(memory.get(DIRTY_SECTIONS_KEY).as_deref(), Some("[]"));
}

#[test]
fn clones_share_state() {
    let (store, _memory) = store_with_memory();
    let other = store.clone();
    other.mark("education");
    assert!(store.is_dirty());
}

#[test]
fn track_without_section_flags_whole_form() {
    let (store, _memory) = store_with_memory();
    store.track(true, None);
    assert!(store.is_dirty());
    assert!(section_list(&store).is_empty());
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_after_marks_clears_state_and_storage_keys() {
    let (store, memory) = store_with_memory();
    store.mark("a");
    store.track(true, None);
    store.mark("b");
    store.unmark("a");
    store.reset();
    assert!(!store.is_dirty());
    assert!(section_list(&store).is_empty());
    assert!(!memory.contains(DIRTY_STATE_KEY));
    assert!(!memory.contains(DIRTY_SECTIONS_KEY));
}

#[test]
fn reset_on_clean_store_still_removes_keys() {
    let memory = MemoryStorage::new();
    memory.set(DIRTY_STATE_KEY, "false");
    memory.set(DIRTY_SECTIONS_KEY, "[]");
    let store = DirtyStore::new(Arc::new(memory.clone()));
    store.reset();
    assert!(memory.is_empty());
}

#[test]
fn clean_tracking_after_reset_keeps_keys_absent() {
    let (store, memory) = store_with_memory();
    store.mark("summary");
    store.reset();
    store.track(false, Some("summary"));
    store.track(false, Some("skills"));
    assert!(!store.is_dirty());
    assert!(memory.is_empty());
}

#[test]
fn clean_tracking_rewrites_keys_that_are_still_present() {
    let memory = MemoryStorage::new();
    memory.set(DIRTY_STATE_KEY, "false");
    let store = DirtyStore::new(Arc::new(memory.clone()));
    store.track(false, Some("summary"));
    assert_eq!(memory.get(DIRTY_STATE_KEY).as_deref(), Some("false"));
    assert_eq!(memory.get(DIRTY_SECTIONS_KEY).as_deref(), Some("[]"));
}

#[test]
fn marking_after_reset_persists_again() {
    let (store, memory) = store_with_memory();
    store.reset();
    store.mark("skills");
    assert_eq!(memory.get(DIRTY_STATE_KEY).as_deref(), Some("true"));
}

// =============================================================
// Loading
// =============================================================

#[test]
fn new_store_restores_persisted_sections() {
    let memory = MemoryStorage::new();
    memory.set(DIRTY_STATE_KEY, "true");
    memory.set(DIRTY_SECTIONS_KEY, r#"["skills"]"#);
    let store = DirtyStore::new(Arc::new(memory));
    assert!(store.is_dirty());
    assert_eq!(section_list(&store), ["skills"]);
}

// =============================================================
// Subscriptions
// =============================================================

#[test]
fn subscribers_are_notified_once_per_change() {
    let (store, _memory) = store_with_memory();
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    store.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    store.mark("a");
    store.mark("a");
    store.unmark("missing");
    store.unmark("a");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn subscribers_receive_latest_state() {
    let (store, _memory) = store_with_memory();
    let last = Arc::new(std::sync::Mutex::new(None::<bool>));
    let sink = Arc::clone(&last);
    store.subscribe(move |state| {
        *sink.lock().unwrap() = Some(state.is_dirty());
    });

    store.mark("summary");
    assert_eq!(*last.lock().unwrap(), Some(true));
    store.reset();
    assert_eq!(*last.lock().unwrap(), Some(false));
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let (store, _memory) = store_with_memory();
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let id = store.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    store.unsubscribe(id);
    store.mark("a");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn listener_may_read_store_during_notification() {
    let (store, _memory) = store_with_memory();
    let reader = store.clone();
    let observed = Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = Arc::clone(&observed);
    store.subscribe(move |_| {
        sink.lock().unwrap().push(reader.is_dirty());
    });
    store.mark("a");
    store.reset();
    assert_eq!(*observed.lock().unwrap(), vec![true, false]);
}

#[test]
fn subscriber_count_follows_subscribe_and_unsubscribe() {
    let (store, _memory) = store_with_memory();
    let id = store.subscribe(|_| {});
    assert_eq!(store.subscriber_count(), 1);
    store.unsubscribe(id);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn subscription_ids_are_distinct() {
    let (store, _memory) = store_with_memory();
    let a = store.subscribe(|_| {});
    let b = store.subscribe(|_| {});
    assert_ne!(a, b);
}
