use crate::{AuthError, IdentityService, Result as AuthResult};

use cpf_core::{AccountId, Profile, Session};

use async_trait::async_trait;
use tokio::sync::watch;

/// Stand-in used when no remote identity backend is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopIdentityService;

#[async_trait]
impl IdentityService for NoopIdentityService {
    fn is_configured(&self) -> bool {
        false
    }

    async fn current_session(&self) -> AuthResult<Option<Session>> {
        Ok(None)
    }

    async fn fetch_profile(&self, _user_id: &AccountId) -> AuthResult<Profile> {
        Err(AuthError::remote_not_configured())
    }

    async fn sign_out(&self) -> AuthResult<()> {
        Ok(())
    }

    fn subscribe(&self) -> Option<watch::Receiver<Option<Session>>> {
        None
    }
}
