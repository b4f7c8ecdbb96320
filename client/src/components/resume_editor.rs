//! Resume draft editor with per-section unsaved-change tracking.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each text section reports its own dirty status to the shared store by
//! comparing the live draft with the last saved copy. The template picker has
//! no saved comparison of its own, so it marks and unmarks its section
//! imperatively. Saving writes the draft to local storage and resets the store.
//! Loading does the same reset: a freshly loaded draft equals its saved copy,
//! so any dirty sections restored from the last visit are stale.

#[cfg(test)]
#[path = "resume_editor_test.rs"]
mod resume_editor_test;

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::components::toast_host::notify;
use crate::components::unsaved_badge::UnsavedBadge;
use crate::state::dirty_store::DirtyStore;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::storage::{self, KeyValueStore};
use crate::util::unsaved_changes::{use_dirty_actions, use_dirty_store, use_dirty_tracking, use_unload_guard};

/// Storage key for the saved draft.
pub const DRAFT_KEY: &str = "resume_draft";
/// Draft key and dirty-section id for the template picker.
pub const TEMPLATE_SECTION: &str = "template";
const DEFAULT_TEMPLATE: &str = "classic";

/// Editable text sections as `(section id, label)`.
pub const RESUME_SECTIONS: [(&str, &str); 3] =
    [("summary", "Summary"), ("experience", "Experience"), ("skills", "Skills")];

const TEMPLATES: [(&str, &str); 3] = [("classic", "Classic"), ("modern", "Modern"), ("compact", "Compact")];

/// Section id to text.
pub type ResumeDraft = BTreeMap<String, String>;

fn section_text<'a>(draft: &'a ResumeDraft, section: &str) -> &'a str {
    draft.get(section).map_or("", String::as_str)
}

/// Whether `section` differs between the live draft and the saved copy.
/// A missing entry counts as empty text.
pub fn section_changed(draft: &ResumeDraft, saved: &ResumeDraft, section: &str) -> bool {
    section_text(draft, section) != section_text(saved, section)
}

fn saved_template(saved: &ResumeDraft) -> String {
    saved
        .get(TEMPLATE_SECTION)
        .filter(|name| !name.is_empty())
        .cloned()
        .unwrap_or_else(|| DEFAULT_TEMPLATE.to_owned())
}

/// Read the saved draft and drop dirty state left over from a previous visit.
pub fn load_draft(store: &dyn KeyValueStore, dirty: &DirtyStore) -> ResumeDraft {
    let loaded = storage::load_json(store, DRAFT_KEY).unwrap_or_default();
    dirty.reset();
    loaded
}

#[component]
pub fn ResumeEditor() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let actions = use_dirty_actions();
    let store = storage::browser();

    let saved = RwSignal::new(ResumeDraft::new());
    let draft = RwSignal::new(ResumeDraft::new());
    let template = RwSignal::new(DEFAULT_TEMPLATE.to_owned());

    // Load the saved draft once the editor is live in the browser.
    let load_store = store.clone();
    let dirty = use_dirty_store();
    Effect::new(move || {
        let loaded = load_draft(load_store.as_ref(), &dirty);
        template.set(saved_template(&loaded));
        draft.set(loaded.clone());
        saved.set(loaded);
    });

    use_unload_guard(true);

    let on_template_change = move |ev: leptos::ev::Event| {
        let choice = event_target_value(&ev);
        let changed = choice != saved_template(&saved.get_untracked());
        template.set(choice);
        if changed {
            actions.mark.run(TEMPLATE_SECTION.to_owned());
        } else {
            actions.unmark.run(TEMPLATE_SECTION.to_owned());
        }
    };

    let on_save = move |_| {
        let mut next = draft.get_untracked();
        next.insert(TEMPLATE_SECTION.to_owned(), template.get_untracked());
        storage::save_json(store.as_ref(), DRAFT_KEY, &next);
        draft.set(next.clone());
        saved.set(next);
        actions.reset.run(());
        notify(toasts, ToastKind::Info, "Draft saved.");
    };

    let on_discard = move |_| {
        let last = saved.get_untracked();
        template.set(saved_template(&last));
        draft.set(last);
        actions.reset.run(());
    };

    view! {
        <section class="resume-editor">
            <header class="resume-editor__header">
                <h2>"Resume draft"</h2>
                <UnsavedBadge/>
            </header>
            <label class="resume-field">
                <span class="resume-field__label">"Template"</span>
                <select class="resume-field__select" prop:value=move || template.get() on:change=on_template_change>
                    {TEMPLATES
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
            </label>
            {RESUME_SECTIONS
                .iter()
                .map(|(section, label)| view! { <SectionField section=*section label=*label draft=draft saved=saved/> })
                .collect_view()}
            <div class="resume-editor__actions">
                <button class="btn" on:click=on_discard>
                    "Discard changes"
                </button>
                <button class="btn btn--primary" on:click=on_save>
                    "Save draft"
                </button>
            </div>
        </section>
    }
}

#[component]
fn SectionField(
    section: &'static str,
    label: &'static str,
    draft: RwSignal<ResumeDraft>,
    saved: RwSignal<ResumeDraft>,
) -> impl IntoView {
    let is_dirty = Signal::derive(move || draft.with(|d| saved.with(|s| section_changed(d, s, section))));
    use_dirty_tracking(is_dirty, Some(section.to_owned()));

    view! {
        <label class="resume-field">
            <span class="resume-field__label">{label}</span>
            <textarea
                class="resume-field__input"
                rows="6"
                prop:value=move || draft.with(|d| section_text(d, section).to_owned())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    draft.update(|d| {
                        d.insert(section.to_owned(), text);
                    });
                }
            ></textarea>
        </label>
    }
}
