use super::*;

#[test]
fn unload_prompt_intercepts_when_enabled_and_dirty() {
    let prompt = unload_prompt(true, true);
    assert_eq!(prompt, Some(UNLOAD_WARNING));
    assert!(!UNLOAD_WARNING.is_empty());
}

#[test]
fn unload_prompt_allows_unload_when_clean() {
    assert_eq!(unload_prompt(true, false), None);
}

#[test]
fn unload_prompt_allows_unload_when_disabled() {
    assert_eq!(unload_prompt(false, true), None);
    assert_eq!(unload_prompt(false, false), None);
}

#[test]
fn global_dirty_subscribes_while_mounted_and_releases_on_cleanup() {
    use std::sync::Arc;

    use crate::util::storage::MemoryStorage;

    let store = DirtyStore::new(Arc::new(MemoryStorage::new()));
    let owner = Owner::new();
    owner.with(|| {
        provide_context(store.clone());
        let dirty = use_global_dirty();
        assert_eq!(store.subscriber_count(), 1);
        assert!(!dirty.get_untracked());

        store.mark("summary");
        assert!(dirty.get_untracked());
        store.reset();
        assert!(!dirty.get_untracked());
    });

    owner.cleanup();
    assert_eq!(store.subscriber_count(), 0);
}
