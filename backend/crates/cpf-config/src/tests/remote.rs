use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Remote identity service
// =========================================================================

#[test]
#[serial]
fn given_remote_enabled_without_base_url_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _enabled = EnvGuard::set("CPF_REMOTE_ENABLED", "true");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("remote.base_url"));
}

#[test]
#[serial]
fn given_remote_enabled_with_non_http_url_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _enabled = EnvGuard::set("CPF_REMOTE_ENABLED", "1");
    let _url = EnvGuard::set("CPF_REMOTE_BASE_URL", "ftp://identity.local");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("http://"));
}

#[test]
#[serial]
fn given_remote_enabled_with_https_url_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _enabled = EnvGuard::set("CPF_REMOTE_ENABLED", "true");
    let _url = EnvGuard::set("CPF_REMOTE_BASE_URL", "https://identity.example.com");
    let _key = EnvGuard::set("CPF_REMOTE_API_KEY", "secret");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_remote_disabled_without_base_url_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _enabled = EnvGuard::set("CPF_REMOTE_ENABLED", "false");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_zero_timeout_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("CPF_REMOTE_TIMEOUT_SECS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("remote.timeout_secs"));
}
