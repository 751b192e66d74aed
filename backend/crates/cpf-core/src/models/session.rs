use crate::{BEARER_TOKEN_TYPE, MOCK_ACCESS_TOKEN, MOCK_REFRESH_TOKEN, User};

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated session for exactly one [`User`].
///
/// Tokens minted locally are placeholders with no cryptographic meaning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default = "Utc::now")]
    pub issued_at: DateTime<Utc>,
    /// Lifetime in seconds.
    pub expires_in: i64,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,
    pub user: User,
}

impl Session {
    pub fn mock(user: User, lifetime: TimeDelta, now: DateTime<Utc>) -> Self {
        Self {
            access_token: MOCK_ACCESS_TOKEN.to_string(),
            token_type: BEARER_TOKEN_TYPE.to_string(),
            refresh_token: Some(MOCK_REFRESH_TOKEN.to_string()),
            issued_at: now,
            expires_in: lifetime.num_seconds(),
            expires_at: now + lifetime,
            user,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Time left before expiry, zero once expired.
    pub fn remaining(&self, now: DateTime<Utc>) -> TimeDelta {
        (self.expires_at - now).max(TimeDelta::zero())
    }
}
