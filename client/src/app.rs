//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{
    auth_callback::AuthCallbackPage, dashboard::DashboardPage, home::HomePage, login::LoginPage,
    not_found::NotFoundPage,
};
use crate::state::{auth::AuthState, dirty_store::DirtyStore, session::load_session, toast::ToastState};
use crate::util::storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the shared stores: auth, toasts, and the unsaved-changes tracker.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = storage::browser();
    let auth = RwSignal::new(AuthState::pending());
    let toasts = RwSignal::new(ToastState::default());
    let dirty = DirtyStore::new(store.clone());

    provide_context(auth);
    provide_context(toasts);
    provide_context(dirty);

    // Storage is only readable in the browser, so the session is loaded after hydration.
    Effect::new(move || {
        auth.set(AuthState::from_stored(load_session(store.as_ref())));
    });

    view! {
        <Title text="Resume Studio"/>

        <Router>
            <ToastHost/>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=AuthCallbackPage/>
                </Routes>
            </main>
        </Router>
    }
}
