//! REST helpers for talking to the host.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a missing provider
//! configuration degrades to a sign-in error instead of crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ProviderConfig;

/// Host route serving the identity-provider public settings.
pub const PROVIDER_CONFIG_PATH: &str = "/api/auth/provider";

#[cfg(any(test, feature = "hydrate"))]
fn provider_config_failed_message(status: u16) -> String {
    format!("provider config request failed: {status}")
}

/// Fetch the identity-provider URL and anon key from the host.
///
/// # Errors
///
/// Returns an error string if the request fails or the host has no provider
/// configured.
pub async fn fetch_provider_config() -> Result<ProviderConfig, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PROVIDER_CONFIG_PATH)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(provider_config_failed_message(resp.status()));
        }
        resp.json::<ProviderConfig>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
