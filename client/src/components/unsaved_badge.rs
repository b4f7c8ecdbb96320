//! "Unsaved changes" indicator driven by the shared dirty store.

use leptos::prelude::*;

use crate::util::unsaved_changes::use_global_dirty;

#[component]
pub fn UnsavedBadge() -> impl IntoView {
    let dirty = use_global_dirty();

    view! {
        <Show when=move || dirty.get()>
            <span class="unsaved-badge" title="You have unsaved changes">
                "Unsaved changes"
            </span>
        </Show>
    }
}
