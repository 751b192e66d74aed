use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_REMOTE_ENABLED, DEFAULT_REMOTE_TIMEOUT_SECS,
    MAX_REMOTE_TIMEOUT_SECS, MIN_REMOTE_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Optional remote identity service consulted when no local account is stored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub enabled: bool,
    pub base_url: Option<String>,
    /// Upper bound on every remote call
    pub timeout_secs: u64,
    /// Sent as a bearer token. Never logged.
    pub api_key: Option<String>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_REMOTE_ENABLED,
            base_url: None,
            timeout_secs: DEFAULT_REMOTE_TIMEOUT_SECS,
            api_key: None,
        }
    }
}

impl RemoteConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_REMOTE_TIMEOUT_SECS..=MAX_REMOTE_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::remote(format!(
                "remote.timeout_secs must be {}-{}, got {}",
                MIN_REMOTE_TIMEOUT_SECS, MAX_REMOTE_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if !self.enabled {
            return Ok(());
        }

        match self.base_url.as_deref() {
            None | Some("") => Err(ConfigError::remote(
                "remote.base_url is required when remote.enabled = true",
            )),
            Some(url) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                Err(ConfigError::remote(format!(
                    "remote.base_url must start with http:// or https://, got {url}"
                )))
            }
            Some(_) => Ok(()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
