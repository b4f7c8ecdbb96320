//! Authenticated landing page hosting the resume draft editor.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is where a completed sign-in lands. Visitors without a stored session
//! are sent back to `/login`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::resume_editor::ResumeEditor;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let greeting = move || {
        auth.get()
            .display_name()
            .map_or_else(|| "Welcome back".to_owned(), |name| format!("Welcome back, {name}"))
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"Resume Studio"</h1>
                <p class="dashboard-header__greeting">{greeting}</p>
            </header>
            <Show when=move || auth.get().is_signed_in()>
                <ResumeEditor/>
            </Show>
        </div>
    }
}
