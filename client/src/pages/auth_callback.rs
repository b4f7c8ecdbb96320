//! OAuth redirect target that finalizes a sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider sends the browser here after an external sign-in.
//! The page either surfaces the provider's error or stores the new session,
//! then leaves for `/login` or `/dashboard`. Every failure is terminal: the
//! user starts over from the login page.

#[cfg(test)]
#[path = "auth_callback_test.rs"]
mod auth_callback_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::{DASHBOARD_PATH, LOGIN_PATH};
use crate::components::toast_host::notify;
use crate::net::identity::{SessionProvider, SupabaseAuth, parse_params, provider_error};
use crate::net::types::{ProviderError, Session};
use crate::state::auth::AuthState;
use crate::state::session::persist_session;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::storage::{self, KeyValueStore};

pub const PENDING_STATUS: &str = "Completing sign-in...";
pub const SIGNED_IN_STATUS: &str = "Signed in. Redirecting...";

/// Why a callback visit did not produce a session. `Display` is the text
/// shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallbackError {
    #[error("{0}")]
    Provider(ProviderError),
    #[error("Sign-in failed. Please try again.")]
    MissingSession,
    #[error("Sign-in failed. Please try again.")]
    SessionFetch(String),
}

/// Resolve a callback visit and persist the session on success.
///
/// A provider-reported error short-circuits before the provider is asked for
/// a session.
///
/// # Errors
///
/// Returns the provider's error, a fetch failure, or `MissingSession` when the
/// provider has nothing for this visit.
pub async fn complete_sign_in<P: SessionProvider>(
    reported: Option<ProviderError>,
    provider: &P,
    store: &dyn KeyValueStore,
) -> Result<Session, CallbackError> {
    if let Some(err) = reported {
        return Err(CallbackError::Provider(err));
    }
    let session = provider
        .current_session()
        .await
        .map_err(CallbackError::SessionFetch)?
        .ok_or(CallbackError::MissingSession)?;
    persist_session(store, &session);
    Ok(session)
}

/// Route the browser leaves to once the callback is resolved.
pub fn redirect_target(result: &Result<Session, CallbackError>) -> &'static str {
    if result.is_ok() { DASHBOARD_PATH } else { LOGIN_PATH }
}

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let location = use_location();
    let navigate = use_navigate();
    let status = RwSignal::new(PENDING_STATUS.to_owned());

    Effect::new(move || {
        let fragment = location.hash.get_untracked();
        let reported = provider_error(&parse_params(&location.search.get_untracked()), &parse_params(&fragment));
        let provider = SupabaseAuth::from_fragment(&fragment);
        let navigate = navigate.clone();

        leptos::task::spawn_local(async move {
            let store = storage::browser();
            let result = complete_sign_in(reported, &provider, store.as_ref()).await;
            match &result {
                Ok(session) => {
                    log::info!("sign-in complete");
                    status.set(SIGNED_IN_STATUS.to_owned());
                    auth.set(AuthState { user: Some(session.user.clone()), loading: false });
                }
                Err(err) => {
                    log::warn!("sign-in callback failed: {err:?}");
                    notify(toasts, ToastKind::Error, err.to_string());
                }
            }
            // Replace so the token-bearing callback URL leaves no history entry.
            navigate(redirect_target(&result), NavigateOptions { replace: true, ..NavigateOptions::default() });
        });
    });

    view! {
        <div class="callback-page">
            <div class="callback-card">
                <div class="spinner" aria-hidden="true"></div>
                <p class="callback-card__status">{move || status.get()}</p>
            </div>
        </div>
    }
}
