use crate::{AuthError, IdentityService, Result as AuthResult};

use cpf_config::RemoteConfig;
use cpf_core::{AccountId, Profile, Session};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde::Deserialize;
use tokio::sync::watch;

#[derive(Deserialize)]
struct SessionEnvelope {
    session: Option<Session>,
}

#[derive(Deserialize)]
struct ProfileEnvelope {
    profile: Profile,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

/// JSON-over-HTTP identity backend.
///
/// Endpoints, relative to `base_url`:
/// - `GET /session` -> `{"session": Session | null}`
/// - `GET /profiles/{id}` -> `{"profile": Profile}`
/// - `POST /sign-out`
///
/// Failures come back as `{"error": {"code", "message"}}`.
pub struct HttpIdentityService {
    base_url: String,
    api_key: Option<String>,
    client: ReqwestClient,
}

impl HttpIdentityService {
    /// # Arguments
    /// * `base_url` - Service URL (e.g., "http://127.0.0.1:9000")
    /// * `api_key` - Optional bearer token sent with every request
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, api_key: Option<&str>, timeout: Duration) -> AuthResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(1)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(String::from),
            client,
        })
    }

    /// Builds the service from configuration, or `None` when remote is disabled.
    pub fn from_config(config: &RemoteConfig) -> AuthResult<Option<Self>> {
        match (config.enabled, config.base_url.as_deref()) {
            (true, Some(base_url)) => Ok(Some(Self::new(
                base_url,
                config.api_key.as_deref(),
                config.timeout(),
            )?)),
            _ => Ok(None),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let req = self.client.request(method, &url);

        match &self.api_key {
            Some(key) => req.bearer_auth(key),
            None => req,
        }
    }

    /// Sends the request and returns the body of a successful response.
    async fn execute(&self, req: RequestBuilder) -> AuthResult<Vec<u8>> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        if !status.is_success() {
            return Err(match serde_json::from_slice::<ErrorEnvelope>(&body) {
                Ok(envelope) => AuthError::remote_api(envelope.error.code, envelope.error.message),
                Err(_) => AuthError::remote_api(format!("HTTP_{}", status.as_u16()), status.to_string()),
            });
        }

        Ok(body)
    }

    fn parse<T: serde::de::DeserializeOwned>(body: &[u8]) -> AuthResult<T> {
        serde_json::from_slice(body).map_err(|e| AuthError::remote_response(e.to_string()))
    }
}

#[async_trait]
impl IdentityService for HttpIdentityService {
    fn is_configured(&self) -> bool {
        true
    }

    async fn current_session(&self) -> AuthResult<Option<Session>> {
        let body = self.execute(self.request(Method::GET, "/session")).await?;
        let envelope: SessionEnvelope = Self::parse(&body)?;

        debug!(
            "Remote session: {}",
            envelope
                .session
                .as_ref()
                .map(|s| s.user.id.to_string())
                .unwrap_or_else(|| "none".into())
        );
        Ok(envelope.session)
    }

    async fn fetch_profile(&self, user_id: &AccountId) -> AuthResult<Profile> {
        let path = format!("/profiles/{user_id}");
        let body = self.execute(self.request(Method::GET, &path)).await?;
        let envelope: ProfileEnvelope = Self::parse(&body)?;

        Ok(envelope.profile)
    }

    async fn sign_out(&self) -> AuthResult<()> {
        self.execute(self.request(Method::POST, "/sign-out")).await?;
        Ok(())
    }

    fn subscribe(&self) -> Option<watch::Receiver<Option<Session>>> {
        None
    }
}
