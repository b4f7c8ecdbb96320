//! Client-side session persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The OAuth callback writes the provider session here and the rest of the app
//! reads it back to decide whether the visitor is signed in. Each new sign-in
//! overwrites the previous one; nothing in the app deletes it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Session;
use crate::util::storage::{self, KeyValueStore};

pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_KEY: &str = "user";

/// Tokens and user record as stored between page loads.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredSession {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub user: Option<serde_json::Value>,
}

/// Write `session` to the three session keys.
///
/// A session without a refresh token drops any refresh token left by an
/// earlier sign-in.
pub fn persist_session(store: &dyn KeyValueStore, session: &Session) {
    store.set(AUTH_TOKEN_KEY, &session.access_token);
    match session.refresh_token.as_deref() {
        Some(token) => store.set(REFRESH_TOKEN_KEY, token),
        None => store.remove(REFRESH_TOKEN_KEY),
    }
    storage::save_json(store, USER_KEY, &session.user);
}

/// Read the persisted session, if an access token is present.
pub fn load_session(store: &dyn KeyValueStore) -> Option<StoredSession> {
    let access_token = store.get(AUTH_TOKEN_KEY).filter(|token| !token.is_empty())?;
    Some(StoredSession {
        access_token,
        refresh_token: store.get(REFRESH_TOKEN_KEY),
        user: storage::load_json(store, USER_KEY),
    })
}
