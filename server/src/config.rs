//! Host configuration parsed from environment variables.

use client::net::types::ProviderConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("{missing} must be set together with {present}")]
    IncompleteProvider { missing: &'static str, present: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// `None` disables sign-in: the provider endpoint answers 503.
    pub provider: Option<ProviderConfig>,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SUPABASE_URL` + `SUPABASE_ANON_KEY`: both or neither
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_port(lookup("PORT").as_deref())?;
        let provider = parse_provider(lookup("SUPABASE_URL"), lookup("SUPABASE_ANON_KEY"))?;
        Ok(Self { port, provider })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_provider(url: Option<String>, anon_key: Option<String>) -> Result<Option<ProviderConfig>, ConfigError> {
    let url = url.filter(|value| !value.trim().is_empty());
    let anon_key = anon_key.filter(|value| !value.trim().is_empty());
    match (url, anon_key) {
        (Some(url), Some(anon_key)) => Ok(Some(ProviderConfig {
            url: url.trim().trim_end_matches('/').to_owned(),
            anon_key: anon_key.trim().to_owned(),
        })),
        (None, None) => Ok(None),
        (None, Some(_)) => Err(ConfigError::IncompleteProvider { missing: "SUPABASE_URL", present: "SUPABASE_ANON_KEY" }),
        (Some(_), None) => Err(ConfigError::IncompleteProvider { missing: "SUPABASE_ANON_KEY", present: "SUPABASE_URL" }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
