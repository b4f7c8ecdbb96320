//! Root route: sends visitors to the dashboard or the login page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::{DASHBOARD_PATH, LOGIN_PATH};
use crate::state::auth::AuthState;

/// Destination for the root route, once the stored session has been read.
pub fn home_target(state: &AuthState) -> Option<&'static str> {
    if state.loading {
        None
    } else if state.is_signed_in() {
        Some(DASHBOARD_PATH)
    } else {
        Some(LOGIN_PATH)
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(target) = home_target(&auth.get()) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <div class="home-page">
            <p class="home-page__loading">"Loading..."</p>
        </div>
    }
}
