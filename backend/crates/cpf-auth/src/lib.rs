//! Session lifecycle for Courtier Pro Flow: account persistence, sign-in,
//! sign-up, sign-out, and role-based route guarding.

pub mod account_lookup;
pub mod account_store;
pub mod auth_state;
pub mod error;
pub mod identity_service;
pub mod load_result;
pub mod route_guard;
pub mod session_manager;
pub mod session_settings;
pub mod storage;

pub use account_lookup::AccountLookup;
pub use account_store::{AccountStore, MOCK_PROFILE_KEY, MOCK_USER_KEY};
pub use auth_state::{AuthState, CurrentSession};
pub use error::{AuthError, Result};
pub use identity_service::{HttpIdentityService, IdentityService, NoopIdentityService};
pub use load_result::LoadResult;
pub use route_guard::{GuardDecision, Resolution};
pub use session_manager::SessionManager;
pub use session_settings::SessionSettings;
pub use storage::{FileStore, KeyValueStore, MemoryStore};

#[cfg(test)]
mod tests;
