//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no per-user data; it only knows which identity provider the
//! browser should talk to.

use client::net::types::ProviderConfig;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub provider: Option<ProviderConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(provider: Option<ProviderConfig>) -> Self {
        Self { provider }
    }
}
