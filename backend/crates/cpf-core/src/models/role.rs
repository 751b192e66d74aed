use crate::{CoreError, CoreResult, Route};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Closed set of account roles. Fixed at account creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Broker / tradesperson operating the back office.
    Courtier,
    /// End customer with access to the customer space only.
    Client,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Courtier => "courtier",
            Self::Client => "client",
        }
    }

    /// Default landing route for an authenticated account of this role.
    pub fn landing_route(&self) -> Route {
        match self {
            Self::Courtier => Route::Dashboard,
            Self::Client => Route::EspaceClient,
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "courtier" => Ok(Self::Courtier),
            "client" => Ok(Self::Client),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
