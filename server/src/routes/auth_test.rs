use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use client::net::api::PROVIDER_CONFIG_PATH;
use client::net::types::ProviderConfig;
use tower::ServiceExt;

use crate::routes::api_routes;
use crate::state::AppState;

fn provider_request() -> Request<Body> {
    Request::builder().uri(PROVIDER_CONFIG_PATH).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn provider_config_returns_configured_values() {
    let config = ProviderConfig { url: "https://x.supabase.co".to_owned(), anon_key: "anon".to_owned() };
    let app = api_routes(AppState::new(Some(config.clone())));

    let response = app.oneshot(provider_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let returned: ProviderConfig = serde_json::from_slice(&body).unwrap();
    assert_eq!(returned, config);
}

#[tokio::test]
async fn provider_config_unavailable_when_unset() {
    let app = api_routes(AppState::default());
    let response = app.oneshot(provider_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = api_routes(AppState::default());
    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
