use crate::{Account, MOCK_ACCESS_TOKEN, Role, Session};

use chrono::{TimeDelta, Utc};
use googletest::prelude::*;

#[test]
fn given_mock_session_when_created_then_expires_after_lifetime() {
    let now = Utc::now();
    let account = Account::fabricate("a@x.com", "a", Role::Client, now);

    let session = Session::mock(account.user.clone(), TimeDelta::seconds(3600), now);

    assert_that!(session.access_token, eq(MOCK_ACCESS_TOKEN));
    assert_that!(session.token_type, eq("bearer"));
    assert_that!(session.expires_in, eq(3600));
    assert_that!(session.expires_at, eq(now + TimeDelta::seconds(3600)));
    assert_that!(session.user, eq(&account.user));
}

#[test]
fn given_mock_session_when_checking_expiry_then_boundary_is_expired() {
    let now = Utc::now();
    let account = Account::fabricate("a@x.com", "a", Role::Client, now);
    let session = Session::mock(account.user, TimeDelta::seconds(60), now);

    assert!(!session.is_expired(now));
    assert!(!session.is_expired(now + TimeDelta::seconds(59)));
    assert!(session.is_expired(now + TimeDelta::seconds(60)));
    assert_that!(
        session.remaining(now + TimeDelta::seconds(120)),
        eq(TimeDelta::zero())
    );
}

#[test]
fn given_remote_session_json_without_issued_at_when_deserialized_then_defaults() {
    let json = r#"{
        "access_token": "abc",
        "token_type": "bearer",
        "expires_in": 3600,
        "expires_at": 1893456000,
        "user": {
            "id": "2f1c5a0e-0000-0000-0000-000000000001",
            "email": "remote@x.com",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }
    }"#;

    let session: Session = serde_json::from_str(json).unwrap();

    assert_that!(session.refresh_token, none());
    assert_that!(session.user.email, eq("remote@x.com"));
    assert_that!(session.expires_at.timestamp(), eq(1893456000));
    assert!(!session.user.is_anonymous);
}
