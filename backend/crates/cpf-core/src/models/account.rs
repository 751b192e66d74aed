use crate::{
    AccountId, CoreError, CoreResult, DEFAULT_COMPANY, DEFAULT_DISPLAY_NAME, Profile, Role, User,
};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// The persisted `(User, Profile)` pair. Both halves share one id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub user: User,
    pub profile: Profile,
}

impl Account {
    /// Fabricates a brand-new account with a fresh id.
    pub fn fabricate(email: &str, display_name: &str, role: Role, now: DateTime<Utc>) -> Self {
        let id = AccountId::generate(now);

        let profile = Profile {
            id: id.clone(),
            display_name: display_name.to_string(),
            email: email.to_string(),
            role,
            phone: None,
            company: match role {
                Role::Courtier => Some(DEFAULT_COMPANY.to_string()),
                Role::Client => None,
            },
            photo: None,
        };

        Self {
            user: User::new(id, email, display_name, role, now),
            profile,
        }
    }

    /// Joins a user and profile loaded separately, rejecting mismatched halves.
    #[track_caller]
    pub fn from_parts(user: User, profile: Profile) -> CoreResult<Self> {
        if user.id != profile.id {
            return Err(CoreError::AccountMismatch {
                user_id: user.id.to_string(),
                profile_id: profile.id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { user, profile })
    }

    pub fn id(&self) -> &AccountId {
        &self.profile.id
    }

    pub fn email(&self) -> &str {
        &self.profile.email
    }

    pub fn role(&self) -> Role {
        self.profile.role
    }

    /// Whether a sign-in with these credentials should resume this account.
    /// Only email and role are compared.
    pub fn matches(&self, email: &str, role: Role) -> bool {
        self.profile.email == email && self.profile.role == role
    }
}

/// Display name derived from an email: the text before the first `@`,
/// or [`DEFAULT_DISPLAY_NAME`] when that is empty.
pub fn display_name_from_email(email: &str) -> String {
    let local_part = email.split('@').next().unwrap_or_default();
    if local_part.is_empty() {
        DEFAULT_DISPLAY_NAME.to_string()
    } else {
        local_part.to_string()
    }
}

/// The supplied display name, unchanged, or [`DEFAULT_DISPLAY_NAME`] when
/// blank or absent.
pub fn display_name_or_default(display_name: Option<&str>) -> String {
    match display_name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => DEFAULT_DISPLAY_NAME.to_string(),
    }
}
