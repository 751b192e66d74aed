use crate::{AccountId, Role, UserMetadata};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Auth-side user record, persisted under the `mock_user` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: AccountId,
    pub email: String,
    #[serde(default)]
    pub email_confirmed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_sign_in_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
    #[serde(default)]
    pub is_anonymous: bool,
}

impl User {
    pub fn new(id: AccountId, email: &str, display_name: &str, role: Role, now: DateTime<Utc>) -> Self {
        Self {
            id,
            email: email.to_string(),
            email_confirmed_at: Some(now),
            last_sign_in_at: Some(now),
            created_at: now,
            updated_at: now,
            user_metadata: UserMetadata {
                display_name: Some(display_name.to_string()),
                role: Some(role),
            },
            is_anonymous: false,
        }
    }
}
