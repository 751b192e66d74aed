use crate::{RequiredRole, Role, Route};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Courtier.as_str(), "courtier");
    assert_eq!(Role::Client.as_str(), "client");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("courtier").unwrap(), Role::Courtier);
    assert_eq!(Role::from_str("client").unwrap(), Role::Client);
    assert!(Role::from_str("admin").is_err());
    assert!(Role::from_str("Courtier").is_err());
}

#[test]
fn test_role_landing_route() {
    assert_eq!(Role::Courtier.landing_route(), Route::Dashboard);
    assert_eq!(Role::Client.landing_route(), Route::EspaceClient);
}

#[test]
fn test_role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Courtier).unwrap(), "\"courtier\"");
    assert_eq!(
        serde_json::from_str::<Role>("\"client\"").unwrap(),
        Role::Client
    );
}

#[test]
fn test_required_role_from_str() {
    assert_eq!(RequiredRole::from_str("any").unwrap(), RequiredRole::Any);
    assert_eq!(
        RequiredRole::from_str("courtier").unwrap(),
        RequiredRole::Courtier
    );
    assert!(RequiredRole::from_str("").is_err());
}

#[test]
fn test_required_role_default_is_any() {
    assert_eq!(RequiredRole::default(), RequiredRole::Any);
}

#[test]
fn test_required_role_admits() {
    assert!(RequiredRole::Any.admits(Role::Courtier));
    assert!(RequiredRole::Any.admits(Role::Client));
    assert!(RequiredRole::Courtier.admits(Role::Courtier));
    assert!(!RequiredRole::Courtier.admits(Role::Client));
    assert!(RequiredRole::Client.admits(Role::Client));
    assert!(!RequiredRole::Client.admits(Role::Courtier));
}

#[test]
fn test_required_role_from_role() {
    assert_eq!(RequiredRole::from(Role::Client), RequiredRole::Client);
    assert_eq!(RequiredRole::from(Role::Courtier), RequiredRole::Courtier);
}
