use cpf_config::Config;

use std::time::Duration;

use chrono::TimeDelta;

const DEFAULT_SESSION_LIFETIME_SECS: i64 = 3600;
const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(3);

/// Runtime knobs of the session manager.
#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    /// Lifetime of every minted session
    pub session_lifetime: TimeDelta,
    /// Upper bound on each remote identity call
    pub remote_timeout: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            session_lifetime: TimeDelta::seconds(DEFAULT_SESSION_LIFETIME_SECS),
            remote_timeout: DEFAULT_REMOTE_TIMEOUT,
        }
    }
}

impl From<&Config> for SessionSettings {
    fn from(config: &Config) -> Self {
        let session_lifetime = TimeDelta::from_std(config.session.lifetime())
            .unwrap_or_else(|_| TimeDelta::seconds(DEFAULT_SESSION_LIFETIME_SECS));

        Self {
            session_lifetime,
            remote_timeout: config.remote.timeout(),
        }
    }
}
