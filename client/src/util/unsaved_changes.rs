//! Component-facing hooks over the shared [`DirtyStore`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Editors report their dirty status here, layout chrome reads the aggregate
//! flag, and the page installs a `beforeunload` guard so unsaved edits are not
//! lost to an accidental tab close or reload.

#[cfg(test)]
#[path = "unsaved_changes_test.rs"]
mod unsaved_changes_test;

use leptos::prelude::*;

use crate::state::dirty_store::DirtyStore;

/// Confirmation text handed to the browser's "leave page?" prompt.
pub const UNLOAD_WARNING: &str = "You have unsaved changes. Are you sure you want to leave?";

/// Imperative dirty-state actions for event handlers.
#[derive(Clone, Copy)]
pub struct DirtyActions {
    pub mark: Callback<String>,
    pub unmark: Callback<String>,
    pub reset: Callback<()>,
}

/// Prompt text for an unload attempt, or `None` to let it proceed.
pub fn unload_prompt(enabled: bool, dirty: bool) -> Option<&'static str> {
    (enabled && dirty).then_some(UNLOAD_WARNING)
}

/// The store provided by the root `App`.
pub fn use_dirty_store() -> DirtyStore {
    expect_context::<DirtyStore>()
}

/// Mirror `is_dirty` into the store for `section`, or for the whole form
/// when `section` is `None`. Re-runs whenever `is_dirty` changes.
pub fn use_dirty_tracking(is_dirty: impl Into<Signal<bool>>, section: Option<String>) {
    let store = use_dirty_store();
    let is_dirty = is_dirty.into();
    Effect::new(move || {
        store.track(is_dirty.get(), section.as_deref());
    });
}

pub fn use_dirty_actions() -> DirtyActions {
    let store = use_dirty_store();
    let mark_store = store.clone();
    let unmark_store = store.clone();
    DirtyActions {
        mark: Callback::new(move |section: String| mark_store.mark(&section)),
        unmark: Callback::new(move |section: String| unmark_store.unmark(&section)),
        reset: Callback::new(move |()| store.reset()),
    }
}

/// Aggregate dirty flag, pushed by the store on every change.
///
/// Starts `false` so server and client render the same markup; the real value
/// is read once the component is live in the browser.
pub fn use_global_dirty() -> ReadSignal<bool> {
    let store = use_dirty_store();
    let (dirty, set_dirty) = signal(false);

    let id = store.subscribe(move |state| set_dirty.set(state.is_dirty()));
    let initial = store.clone();
    Effect::new(move || set_dirty.set(initial.is_dirty()));
    on_cleanup(move || store.unsubscribe(id));

    dirty
}

/// Block page unload while `enabled` is true and the store is dirty.
///
/// Both values are read when the event fires, so the guard reflects edits made
/// by any component after it was installed.
pub fn use_unload_guard(enabled: impl Into<Signal<bool>>) {
    let enabled = enabled.into();
    #[cfg(feature = "hydrate")]
    {
        let store = use_dirty_store();
        let handle = window_event_listener(leptos::ev::beforeunload, move |ev| {
            let Some(message) = unload_prompt(enabled.get_untracked(), store.is_dirty()) else {
                return;
            };
            log::debug!("blocking unload with unsaved changes");
            ev.prevent_default();
            ev.set_return_value(message);
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
