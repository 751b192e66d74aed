use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Session
// =========================================================================

#[test]
#[serial]
fn given_lifetime_below_minimum_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _lifetime = EnvGuard::set("CPF_SESSION_LIFETIME_SECS", "59");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("session.lifetime_secs"));
}

#[test]
#[serial]
fn given_lifetime_at_minimum_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _lifetime = EnvGuard::set("CPF_SESSION_LIFETIME_SECS", "60");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_lifetime_above_thirty_days_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _lifetime = EnvGuard::set("CPF_SESSION_LIFETIME_SECS", "2592001");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_storage_dir_with_traversal_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _dir = EnvGuard::set("CPF_SESSION_STORAGE_DIR", "../../etc");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring(".."));
}

#[test]
#[serial]
fn given_absolute_storage_dir_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _dir = EnvGuard::set("CPF_SESSION_STORAGE_DIR", "/tmp/storage");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_empty_storage_dir_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _dir = EnvGuard::set("CPF_SESSION_STORAGE_DIR", "");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("cannot be empty"));
}
