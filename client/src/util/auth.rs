//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior once the stored
//! session has been read.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::pages::{DASHBOARD_PATH, LOGIN_PATH};
use crate::state::auth::{AuthState, should_redirect_unauth};

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if should_redirect_unauth(&state) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Redirect to `/dashboard` whenever auth has loaded and a user is present.
pub fn install_signed_in_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.is_signed_in() {
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    });
}
