mod config;
mod error;
mod log_level;
mod logging_config;
mod remote_config;
mod session_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use remote_config::RemoteConfig;
pub use session_config::SessionConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "CPF_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".cpf";
const CONFIG_FILENAME: &str = "config.toml";

// Session
const DEFAULT_SESSION_LIFETIME_SECS: u64 = 3600;
const MIN_SESSION_LIFETIME_SECS: u64 = 60;
const MAX_SESSION_LIFETIME_SECS: u64 = 30 * 24 * 3600;
const DEFAULT_STORAGE_DIR: &str = "storage";

// Remote identity service
const DEFAULT_REMOTE_ENABLED: bool = false;
const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 3;
const MIN_REMOTE_TIMEOUT_SECS: u64 = 1;
const MAX_REMOTE_TIMEOUT_SECS: u64 = 30;

// Logging
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
