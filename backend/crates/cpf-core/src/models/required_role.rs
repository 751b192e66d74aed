use crate::{CoreError, CoreResult, Role};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Role requirement attached to a guarded route.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequiredRole {
    Courtier,
    Client,
    /// Any authenticated account.
    #[default]
    Any,
}

impl RequiredRole {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Courtier => "courtier",
            Self::Client => "client",
            Self::Any => "any",
        }
    }

    pub fn admits(&self, role: Role) -> bool {
        match self {
            Self::Any => true,
            Self::Courtier => role == Role::Courtier,
            Self::Client => role == Role::Client,
        }
    }
}

impl From<Role> for RequiredRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Courtier => Self::Courtier,
            Role::Client => Self::Client,
        }
    }
}

impl FromStr for RequiredRole {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "courtier" => Ok(Self::Courtier),
            "client" => Ok(Self::Client),
            "any" => Ok(Self::Any),
            _ => Err(CoreError::InvalidRequiredRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
