use std::time::Duration;

use crate::{ClientConfig, Error, DEFAULT_TIMEOUT};

#[test]
fn defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    assert_eq!(config.timeout(), Duration::from_secs(10));
    assert!(config.base_address().is_none());
    assert!(config.cache_enabled());
    assert!(!config.proxy_enabled());
}

#[test]
fn negative_timeout_keeps_previous_value() {
    let mut config = ClientConfig::default();
    assert!(config.set_timeout_secs(5));
    assert!(!config.set_timeout_secs(-1));
    assert_eq!(config.timeout(), Duration::from_secs(5));
}

#[test]
fn zero_timeout_is_accepted() {
    let mut config = ClientConfig::default();
    assert!(config.set_timeout_secs(0));
    assert_eq!(config.timeout(), Duration::ZERO);
}

#[test]
fn enable_cache_is_idempotent() {
    let mut config = ClientConfig::default();
    config.disable_cache();
    config.enable_cache();
    config.enable_cache();
    assert!(config.cache_enabled());

    config.disable_cache();
    config.disable_cache();
    assert!(!config.cache_enabled());
}

#[test]
fn empty_base_address_is_rejected() {
    let mut config = ClientConfig::default();
    config.set_base_address("http://example.test/").unwrap();

    assert!(!config.set_base_address("").unwrap());
    assert_eq!(
        config.base_address().map(|url| url.as_str()),
        Some("http://example.test/")
    );
}

#[test]
fn malformed_base_address_is_an_error() {
    let mut config = ClientConfig::default();
    let err = config.set_base_address("not a url").unwrap_err();
    assert!(matches!(err, Error::MalformedTarget { .. }));
    assert!(config.base_address().is_none());
}

#[test]
fn clear_base_address() {
    let mut config = ClientConfig::default();
    config.set_base_url("http://example.test".parse().unwrap());
    config.clear_base_address();
    assert!(config.base_address().is_none());
}
