use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    assert_eq!(store.get("k"), None);
    store.set("k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));
    store.remove("k");
    assert!(!store.contains("k"));
    assert!(store.is_empty());
}

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set("shared", "1");
    assert_eq!(b.get("shared").as_deref(), Some("1"));
    assert_eq!(b.len(), 1);
}

#[test]
fn json_helpers_round_trip_through_store() {
    let store = MemoryStorage::new();
    save_json(&store, "list", &vec!["a", "b"]);
    assert_eq!(store.get("list").as_deref(), Some(r#"["a","b"]"#));
    let loaded: Option<Vec<String>> = load_json(&store, "list");
    assert_eq!(loaded, Some(vec!["a".to_owned(), "b".to_owned()]));
}

#[test]
fn load_json_ignores_malformed_values() {
    let store = MemoryStorage::new();
    store.set("broken", "{not json");
    let loaded: Option<Vec<String>> = load_json(&store, "broken");
    assert!(loaded.is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_outside_the_browser() {
    let store = BrowserStorage;
    store.set("k", "v");
    assert_eq!(store.get("k"), None);
    store.remove("k");
}
