use crate::AccountId;

use std::collections::HashSet;

use chrono::Utc;
use googletest::prelude::*;

#[test]
fn given_generated_id_when_inspected_then_has_mock_prefix_and_suffix() {
    let id = AccountId::generate(Utc::now());

    let parts: Vec<&str> = id.as_str().split('-').collect();

    assert_that!(parts.len(), eq(3));
    assert_that!(parts[0], eq("mock"));
    assert_that!(parts[1].parse::<i64>().is_ok(), eq(true));
    assert_that!(parts[2].len(), eq(9));
    assert!(
        parts[2]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
    );
}

#[test]
fn given_same_instant_when_generating_many_ids_then_all_unique() {
    let now = Utc::now();

    let ids: HashSet<AccountId> = (0..1_000).map(|_| AccountId::generate(now)).collect();

    assert_that!(ids.len(), eq(1_000));
}

#[test]
fn given_id_when_serialized_then_is_plain_string() {
    let id = AccountId::new("mock-1-abcdefghi");

    let json = serde_json::to_string(&id).unwrap();

    assert_that!(json, eq("\"mock-1-abcdefghi\""));
}
