//! cpf-cli library
//!
//! Command definitions and the runner that applies them to a session manager.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod runner;


pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
