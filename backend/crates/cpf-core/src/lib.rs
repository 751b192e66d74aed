pub mod error;
pub mod models;
pub mod routes;

pub use error::{CoreError, Result as CoreResult};
pub use models::account::{Account, display_name_from_email, display_name_or_default};
pub use models::account_id::AccountId;
pub use models::profile::Profile;
pub use models::required_role::RequiredRole;
pub use models::role::Role;
pub use models::session::Session;
pub use models::user::User;
pub use models::user_metadata::UserMetadata;
pub use routes::{Route, RouteAccess};

/// Display name used when neither the caller nor the email provides one.
pub const DEFAULT_DISPLAY_NAME: &str = "Utilisateur";

/// Company assigned to freshly fabricated `courtier` accounts.
pub const DEFAULT_COMPANY: &str = "Mon Entreprise";

/// Placeholder tokens minted by the local session path.
pub const MOCK_ACCESS_TOKEN: &str = "mock-token";
pub const MOCK_REFRESH_TOKEN: &str = "mock-refresh";
pub const BEARER_TOKEN_TYPE: &str = "bearer";

#[cfg(test)]
mod tests;
