//! Unsaved-edit model for the resume editor.
//!
//! DESIGN
//! ======
//! A form is dirty when any named section has unsaved edits, or when the
//! whole form was flagged without naming a section. Both inputs are kept
//! side by side so the aggregate flag is always derived, never overridden.

#[cfg(test)]
#[path = "dirty_test.rs"]
mod dirty_test;

use std::collections::BTreeSet;

use crate::util::storage::{self, KeyValueStore};

/// `"true"`/`"false"` mirror of [`DirtyState::is_dirty`].
pub const DIRTY_STATE_KEY: &str = "resume_dirty_state";
/// JSON array of dirty section identifiers.
pub const DIRTY_SECTIONS_KEY: &str = "resume_dirty_sections";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirtyState {
    sections: BTreeSet<String>,
    whole_form: bool,
}

impl DirtyState {
    /// Whether anything has unsaved edits.
    pub fn is_dirty(&self) -> bool {
        self.whole_form || !self.sections.is_empty()
    }

    /// Dirty sections in sorted order.
    pub fn sections(&self) -> &BTreeSet<String> {
        &self.sections
    }

    pub fn is_section_dirty(&self, section: &str) -> bool {
        self.sections.contains(section)
    }

    /// Set or clear dirty status for `section`, or for the whole form when
    /// no section is named.
    pub fn track(&mut self, is_dirty: bool, section: Option<&str>) {
        match section {
            Some(name) if is_dirty => {
                self.sections.insert(name.to_owned());
            }
            Some(name) => {
                self.sections.remove(name);
            }
            None => self.whole_form = is_dirty,
        }
    }

    pub fn mark(&mut self, section: &str) {
        self.track(true, Some(section));
    }

    pub fn unmark(&mut self, section: &str) {
        self.track(false, Some(section));
    }

    pub fn clear(&mut self) {
        self.sections.clear();
        self.whole_form = false;
    }

    /// Write both storage keys.
    pub fn persist(&self, store: &dyn KeyValueStore) {
        store.set(DIRTY_STATE_KEY, if self.is_dirty() { "true" } else { "false" });
        storage::save_json(store, DIRTY_SECTIONS_KEY, &self.sections);
    }

    /// Restore from storage.
    ///
    /// The whole-form flag has no key of its own: it comes back only when the
    /// stored flag is set and no sections were stored.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let sections: BTreeSet<String> = storage::load_json(store, DIRTY_SECTIONS_KEY).unwrap_or_default();
        let flagged = store.get(DIRTY_STATE_KEY).is_some_and(|raw| raw == "true");
        let whole_form = flagged && sections.is_empty();
        Self { sections, whole_form }
    }

    /// Whether either storage key is present.
    pub fn is_persisted(store: &dyn KeyValueStore) -> bool {
        store.get(DIRTY_STATE_KEY).is_some() || store.get(DIRTY_SECTIONS_KEY).is_some()
    }

    /// Remove both storage keys.
    pub fn clear_persisted(store: &dyn KeyValueStore) {
        store.remove(DIRTY_STATE_KEY);
        store.remove(DIRTY_SECTIONS_KEY);
    }
}
