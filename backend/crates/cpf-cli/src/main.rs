//! cpf - Courtier Pro Flow session CLI
//!
//! Drives the session lifecycle against the account stored under the
//! configured storage directory.
//!
//! # Examples
//!
//! ```bash
//! # Create an account
//! cpf sign-up --email a@x.com --name Alice --role courtier
//!
//! # Inspect the restored session
//! cpf status --pretty
//!
//! # Check where a path leads
//! cpf open /espace-client
//! ```

use cpf_auth::{
    FileStore, HttpIdentityService, IdentityService, NoopIdentityService, SessionManager,
    SessionSettings,
};
use cpf_cli::{Cli, CliResult, Commands, logger, runner};
use cpf_config::Config;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let Cli { command, pretty } = Cli::parse();

    let result = run(command).await;

    match result {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> CliResult<serde_json::Value> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let identity_service: Arc<dyn IdentityService> =
        match HttpIdentityService::from_config(&config.remote)? {
            Some(service) => Arc::new(service),
            None => Arc::new(NoopIdentityService),
        };

    let manager = SessionManager::new(
        Arc::new(FileStore::new(config.storage_path()?)),
        identity_service,
        SessionSettings::from(&config),
    );
    manager.initialize().await;

    runner::run(&manager, command).await
}
