//! Auth routes: public identity-provider settings for the browser.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

/// `GET /api/auth/provider`: provider URL and anon key, or 503 when sign-in is not configured.
pub async fn provider_config(State(state): State<AppState>) -> Response {
    match &state.provider {
        Some(config) => Json(config.clone()).into_response(),
        None => {
            tracing::warn!("provider config requested but SUPABASE_URL/SUPABASE_ANON_KEY are unset");
            (StatusCode::SERVICE_UNAVAILABLE, "identity provider not configured").into_response()
        }
    }
}
