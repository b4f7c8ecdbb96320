//! Fallback screen for routes that match nothing.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::HOME_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Let crawlers and the host see a real 404 on server-rendered misses.
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    let navigate = use_navigate();

    view! {
        <div class="not-found-page">
            <div class="not-found-card">
                <h1 class="not-found-card__code">"404"</h1>
                <p class="not-found-card__title">"Page not found"</p>
                <p class="not-found-card__body">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <div class="not-found-card__actions">
                    <a class="btn btn--primary" href=HOME_PATH>
                        "Go to home"
                    </a>
                    <button class="btn" on:click=move |_| navigate(HOME_PATH, NavigateOptions::default())>
                        "Go back"
                    </button>
                </div>
            </div>
        </div>
    }
}
