pub(crate) mod http;
pub(crate) mod noop;

pub use http::HttpIdentityService;
pub use noop::NoopIdentityService;

use crate::Result as AuthResult;

use cpf_core::{AccountId, Profile, Session};

use async_trait::async_trait;
use tokio::sync::watch;

/// Capability interface over an optional remote identity backend.
///
/// The session manager only consults it when no local account is stored and
/// on sign-out. Every failure is logged by the caller and never blocks the
/// local flow.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Whether a backend is actually wired in. `false` skips all remote calls.
    fn is_configured(&self) -> bool;

    /// The session the backend currently holds for this client, if any.
    async fn current_session(&self) -> AuthResult<Option<Session>>;

    /// The profile record belonging to `user_id`.
    async fn fetch_profile(&self, user_id: &AccountId) -> AuthResult<Profile>;

    async fn sign_out(&self) -> AuthResult<()>;

    /// Push channel of session changes, for backends that have one.
    fn subscribe(&self) -> Option<watch::Receiver<Option<Session>>>;
}
