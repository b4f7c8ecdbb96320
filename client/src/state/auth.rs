//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::StoredSession;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<serde_json::Value>,
    pub loading: bool,
}

impl AuthState {
    /// State for a page load, before storage has been read.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// State after reading whatever session storage holds.
    pub fn from_stored(stored: Option<StoredSession>) -> Self {
        let user = stored.map(|session| session.user.unwrap_or(serde_json::Value::Null));
        Self { user, loading: false }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Best label for the signed-in user: email, then name, then id.
    pub fn display_name(&self) -> Option<String> {
        let user = self.user.as_ref()?;
        ["email", "name", "id"].iter().find_map(|key| match user.get(*key)? {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }
}

/// Whether a guarded page should bounce the visitor to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}
