//! Login page that hands off to the identity provider's OAuth screens.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::CALLBACK_PATH;
use crate::state::auth::AuthState;
use crate::util::auth::install_signed_in_redirect;

/// OAuth providers offered on the login page as `(provider id, label)`.
pub const OAUTH_PROVIDERS: [(&str, &str); 2] = [("github", "GitHub"), ("google", "Google")];

/// Status line shown when sign-in cannot start.
pub fn unavailable_message(reason: &str) -> String {
    format!("Sign-in unavailable: {reason}")
}

/// Absolute callback URL for the current origin.
pub fn callback_url(origin: &str) -> String {
    format!("{}{CALLBACK_PATH}", origin.trim_end_matches('/'))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_signed_in_redirect(auth, use_navigate());

    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let start_sign_in = move |provider: &'static str| {
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set("Redirecting to sign-in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_provider_config().await {
                Ok(config) => {
                    let Some(window) = web_sys::window() else {
                        info.set(unavailable_message("no browser window"));
                        busy.set(false);
                        return;
                    };
                    let origin = window.location().origin().unwrap_or_default();
                    let target = crate::net::identity::authorize_url(&config.url, provider, &callback_url(&origin));
                    if let Err(e) = window.location().set_href(&target) {
                        log::warn!("redirect to identity provider failed: {e:?}");
                        info.set(unavailable_message("could not open the provider page"));
                        busy.set(false);
                    }
                }
                Err(e) => {
                    log::warn!("provider config unavailable: {e}");
                    info.set(unavailable_message(&e));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = provider;
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Resume Studio"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                {OAUTH_PROVIDERS
                    .iter()
                    .map(move |(provider, label)| {
                        let provider = *provider;
                        view! {
                            <button
                                class="login-button"
                                disabled=move || busy.get()
                                on:click=move |_| start_sign_in(provider)
                            >
                                {format!("Sign in with {label}")}
                            </button>
                        }
                    })
                    .collect_view()}
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
