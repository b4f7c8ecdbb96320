use super::*;

#[test]
fn provider_config_failed_message_formats_status() {
    assert_eq!(provider_config_failed_message(503), "provider config request failed: 503");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_provider_config_is_unavailable_outside_the_browser() {
    let result = futures::executor::block_on(fetch_provider_config());
    assert_eq!(result, Err("not available on server".to_owned()));
}
