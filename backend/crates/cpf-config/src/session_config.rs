use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SESSION_LIFETIME_SECS, DEFAULT_STORAGE_DIR,
    MAX_SESSION_LIFETIME_SECS, MIN_SESSION_LIFETIME_SECS,
};

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Lifetime of a minted session, counted from issuance
    pub lifetime_secs: u64,
    /// Directory holding the persisted account, relative to the config directory
    pub storage_dir: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            lifetime_secs: DEFAULT_SESSION_LIFETIME_SECS,
            storage_dir: String::from(DEFAULT_STORAGE_DIR),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_SESSION_LIFETIME_SECS..=MAX_SESSION_LIFETIME_SECS).contains(&self.lifetime_secs) {
            return Err(ConfigError::session(format!(
                "session.lifetime_secs must be {}-{}, got {}",
                MIN_SESSION_LIFETIME_SECS, MAX_SESSION_LIFETIME_SECS, self.lifetime_secs
            )));
        }

        if self.storage_dir.is_empty() {
            return Err(ConfigError::session("session.storage_dir cannot be empty"));
        }

        if Path::new(&self.storage_dir).is_absolute() || self.storage_dir.contains("..") {
            return Err(ConfigError::session(
                "session.storage_dir must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    pub fn lifetime(&self) -> Duration {
        Duration::from_secs(self.lifetime_secs)
    }
}
