mod common;

use common::env_from;
use imggen::config::{DEFAULT_API_ENDPOINT, DEFAULT_TIMEOUT};
use imggen::{ImggenError, Settings};
use std::time::Duration;

#[test]
fn test_defaults() {
    let settings = Settings::from_lookup(env_from(&[("IMGGEN_API_KEY", "k".to_string())])).unwrap();
    assert_eq!(settings.api_key, "k");
    assert_eq!(settings.endpoint, DEFAULT_API_ENDPOINT);
    assert_eq!(settings.timeout, DEFAULT_TIMEOUT);
}

#[test]
fn test_overrides() {
    let settings = Settings::from_lookup(env_from(&[
        ("IMGGEN_API_KEY", "k".to_string()),
        ("IMGGEN_API_ENDPOINT", "http://localhost:8080/v1".to_string()),
        ("IMGGEN_TIMEOUT", "5".to_string()),
    ]))
    .unwrap();
    assert_eq!(settings.endpoint, "http://localhost:8080/v1");
    assert_eq!(settings.timeout, Duration::from_secs(5));
}

#[test]
fn test_empty_values_count_as_unset() {
    let err = Settings::from_lookup(env_from(&[("IMGGEN_API_KEY", String::new())])).unwrap_err();
    assert!(matches!(err, ImggenError::MissingApiKey));

    let settings = Settings::from_lookup(env_from(&[
        ("IMGGEN_API_KEY", "k".to_string()),
        ("IMGGEN_API_ENDPOINT", String::new()),
    ]))
    .unwrap();
    assert_eq!(settings.endpoint, DEFAULT_API_ENDPOINT);
}

#[test]
fn test_zero_timeout_is_rejected() {
    let err = Settings::from_lookup(env_from(&[
        ("IMGGEN_API_KEY", "k".to_string()),
        ("IMGGEN_TIMEOUT", "0".to_string()),
    ]))
    .unwrap_err();
    assert!(matches!(err, ImggenError::InvalidTimeout(ref raw) if raw == "0"));
}

// The only test in this binary that touches the process environment.
#[test]
fn test_from_env() {
    std::env::set_var("IMGGEN_API_KEY", "env_key");
    std::env::remove_var("IMGGEN_API_ENDPOINT");
    std::env::remove_var("IMGGEN_TIMEOUT");
    let settings = Settings::from_env().unwrap();
    assert_eq!(settings.api_key, "env_key");
    assert_eq!(settings.endpoint, DEFAULT_API_ENDPOINT);
}
