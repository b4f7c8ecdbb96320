//! DTOs exchanged with the host and the identity provider.
//!
//! DESIGN
//! ======
//! The user record is kept as raw JSON: the app stores and displays it but
//! never depends on its exact shape, which belongs to the provider.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Signed-in session returned by the identity provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Token lifetime in seconds, when the provider reports it.
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: serde_json::Value,
}

/// Public identity-provider settings served by the host at `/api/auth/provider`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub url: String,
    pub anon_key: String,
}

/// Error reported by the provider on the redirect back to the app.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProviderError {
    pub code: Option<String>,
    pub description: Option<String>,
}

impl ProviderError {
    /// Text shown to the user: description, else code, else a generic line.
    pub fn message(&self) -> String {
        [self.description.as_deref(), self.code.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| !text.trim().is_empty())
            .map_or_else(|| "Authentication failed.".to_owned(), str::to_owned)
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
