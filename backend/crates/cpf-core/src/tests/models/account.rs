use crate::{
    Account, AccountId, CoreError, DEFAULT_COMPANY, DEFAULT_DISPLAY_NAME, Profile, Role,
    display_name_from_email, display_name_or_default,
};

use chrono::Utc;
use googletest::prelude::*;
use proptest::{prop_assert, proptest};

#[test]
fn given_courtier_when_fabricated_then_gets_default_company() {
    let account = Account::fabricate("a@x.com", "Alice", Role::Courtier, Utc::now());

    assert_that!(account.profile.company.as_deref(), some(eq(DEFAULT_COMPANY)));
    assert_that!(account.profile.display_name, eq("Alice"));
    assert_that!(account.user.id, eq(&account.profile.id));
    assert_that!(
        account.user.user_metadata.role,
        some(eq(Role::Courtier))
    );
}

#[test]
fn given_client_when_fabricated_then_has_no_company() {
    let account = Account::fabricate("b@x.com", "b", Role::Client, Utc::now());

    assert_that!(account.profile.company, none());
    assert_that!(account.role(), eq(Role::Client));
    assert_that!(account.email(), eq("b@x.com"));
}

#[test]
fn given_mismatched_ids_when_from_parts_then_account_mismatch() {
    let a = Account::fabricate("a@x.com", "a", Role::Client, Utc::now());
    let b = Account::fabricate("a@x.com", "a", Role::Client, Utc::now());

    let result = Account::from_parts(a.user, b.profile);

    assert!(matches!(result, Err(CoreError::AccountMismatch { .. })));
}

#[test]
fn given_matching_ids_when_from_parts_then_ok() {
    let a = Account::fabricate("a@x.com", "a", Role::Client, Utc::now());

    let joined = Account::from_parts(a.user.clone(), a.profile.clone()).unwrap();

    assert_that!(joined, eq(&a));
}

#[test]
fn given_account_when_matching_then_compares_email_and_role_only() {
    let account = Account::fabricate("a@x.com", "a", Role::Courtier, Utc::now());

    assert!(account.matches("a@x.com", Role::Courtier));
    assert!(!account.matches("a@x.com", Role::Client));
    assert!(!account.matches("A@x.com", Role::Courtier));
}

#[test]
fn test_display_name_from_email() {
    assert_eq!(display_name_from_email("b@x.com"), "b");
    assert_eq!(display_name_from_email("first.last@x.com"), "first.last");
    assert_eq!(display_name_from_email("no-at-sign"), "no-at-sign");
    assert_eq!(display_name_from_email("@x.com"), DEFAULT_DISPLAY_NAME);
    assert_eq!(display_name_from_email(""), DEFAULT_DISPLAY_NAME);
}

#[test]
fn test_display_name_or_default() {
    assert_eq!(display_name_or_default(Some("Alice")), "Alice");
    assert_eq!(display_name_or_default(Some("  Alice ")), "  Alice ");
    assert_eq!(display_name_or_default(Some("")), DEFAULT_DISPLAY_NAME);
    assert_eq!(display_name_or_default(Some("   ")), DEFAULT_DISPLAY_NAME);
    assert_eq!(display_name_or_default(None), DEFAULT_DISPLAY_NAME);
}

#[test]
fn given_stored_browser_profile_when_deserialized_then_fields_map() {
    let json = r#"{
        "id": "mock-1700000000000-abc123xyz",
        "nom": "Alice",
        "email": "a@x.com",
        "role": "courtier",
        "telephone": "",
        "entreprise": "Mon Entreprise"
    }"#;

    let profile: Profile = serde_json::from_str(json).unwrap();

    assert_that!(profile.id, eq(&AccountId::new("mock-1700000000000-abc123xyz")));
    assert_that!(profile.display_name, eq("Alice"));
    assert_that!(profile.phone.as_deref(), some(eq("")));
    assert_that!(profile.photo, none());
}

proptest! {
    #[test]
    fn display_name_from_email_never_contains_at_or_is_empty(email in "[a-z@.]{0,20}") {
        let name = display_name_from_email(&email);

        prop_assert!(!name.is_empty());
        prop_assert!(!name.contains('@'));
    }
}
