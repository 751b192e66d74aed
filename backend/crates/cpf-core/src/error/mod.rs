use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid required role: {value} {location}")]
    InvalidRequiredRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Account mismatch: user '{user_id}' does not match profile '{profile_id}' {location}")]
    AccountMismatch {
        user_id: String,
        profile_id: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
