//! Supabase Auth client used by the OAuth callback and login pages.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): session lookup reports an error since the redirect
//! fragment only exists in the browser.
//!
//! The provider uses the implicit flow: after sign-in it redirects to
//! `/auth/callback#access_token=...&refresh_token=...`, or reports failure
//! through `error` / `error_description` in the query string or fragment.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::collections::HashMap;
use std::future::Future;

use url::form_urlencoded;

use super::types::{ProviderError, Session};

/// Source of the session produced by a completed external sign-in.
pub trait SessionProvider {
    /// `Ok(None)` when the provider has no session for this visit.
    fn current_session(&self) -> impl Future<Output = Result<Option<Session>, String>>;
}

/// Tokens carried in the redirect fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<u64>,
    pub token_type: Option<String>,
}

/// Decode a `?query` or `#fragment` string into key/value pairs.
pub fn parse_params(raw: &str) -> HashMap<String, String> {
    let trimmed = raw.trim_start_matches(['?', '#']);
    form_urlencoded::parse(trimmed.as_bytes()).into_owned().collect()
}

fn non_empty(params: &HashMap<String, String>, key: &str) -> Option<String> {
    params.get(key).filter(|value| !value.is_empty()).cloned()
}

/// Provider error reported in either the query string or the fragment.
pub fn provider_error(query: &HashMap<String, String>, fragment: &HashMap<String, String>) -> Option<ProviderError> {
    [query, fragment].into_iter().find_map(|params| {
        let code = non_empty(params, "error");
        let description = non_empty(params, "error_description");
        (code.is_some() || description.is_some()).then_some(ProviderError { code, description })
    })
}

/// Session tokens from the redirect fragment; `None` without an access token.
pub fn fragment_tokens(fragment: &HashMap<String, String>) -> Option<FragmentTokens> {
    Some(FragmentTokens {
        access_token: non_empty(fragment, "access_token")?,
        refresh_token: non_empty(fragment, "refresh_token"),
        expires_in: fragment.get("expires_in").and_then(|raw| raw.parse().ok()),
        token_type: non_empty(fragment, "token_type"),
    })
}

fn base_url(url: &str) -> &str {
    url.trim_end_matches('/')
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(url: &str) -> String {
    format!("{}/auth/v1/user", base_url(url))
}

#[cfg(any(test, feature = "hydrate"))]
fn user_request_failed_message(status: u16) -> String {
    format!("user request failed: {status}")
}

/// Provider page that starts an OAuth sign-in and returns to `redirect_to`.
pub fn authorize_url(url: &str, provider: &str, redirect_to: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("provider", provider)
        .append_pair("redirect_to", redirect_to)
        .finish();
    format!("{}/auth/v1/authorize?{query}", base_url(url))
}

/// Session lookup against Supabase Auth for the current redirect.
#[derive(Clone, Debug)]
pub struct SupabaseAuth {
    fragment: HashMap<String, String>,
}

impl SupabaseAuth {
    /// Build from the raw `#fragment` of the callback URL.
    pub fn from_fragment(raw: &str) -> Self {
        Self { fragment: parse_params(raw) }
    }
}

impl SessionProvider for SupabaseAuth {
    async fn current_session(&self) -> Result<Option<Session>, String> {
        let Some(tokens) = fragment_tokens(&self.fragment) else {
            return Ok(None);
        };

        #[cfg(feature = "hydrate")]
        {
            let config = super::api::fetch_provider_config().await?;
            let resp = gloo_net::http::Request::get(&user_endpoint(&config.url))
                .header("apikey", &config.anon_key)
                .header("Authorization", &format!("Bearer {}", tokens.access_token))
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(user_request_failed_message(resp.status()));
            }
            let user: serde_json::Value = resp.json().await.map_err(|e| e.to_string())?;
            Ok(Some(Session {
                access_token: tokens.access_token,
                refresh_token: tokens.refresh_token,
                expires_in: tokens.expires_in,
                token_type: tokens.token_type,
                user,
            }))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = tokens;
            Err("not available on server".to_owned())
        }
    }
}
