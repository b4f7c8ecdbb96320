//! # client
//!
//! Leptos + WASM frontend for Resume Studio's sign-in and editing flow.
//!
//! This crate contains the OAuth callback page, the not-found view, the
//! unsaved-changes tracker shared by editor components, and the small state
//! and network layers they rely on.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
