//! Applies a parsed command to a session manager and renders the outcome as JSON.

use crate::{CliResult, Commands};

use cpf_auth::{AccountLookup, AuthState, Resolution, SessionManager};
use cpf_core::{Role, Route};

use log::debug;
use serde_json::{Value, json};

/// Runs `command` against an initialized `manager`.
pub async fn run(manager: &SessionManager, command: Commands) -> CliResult<Value> {
    debug!("Running {command:?}");

    match command {
        Commands::Status => Ok(status(&manager.state())),

        Commands::SignIn {
            email,
            password,
            role,
        } => {
            let role: Role = role.parse()?;
            let lookup = manager.sign_in(&email, &password, role).await?;
            let outcome = match lookup {
                AccountLookup::Found(_) => "found",
                AccountLookup::Created(_) => "created",
            };
            let account = lookup.into_account();

            Ok(json!({
                "outcome": outcome,
                "profile": account.profile,
                "landing_route": account.role().landing_route().path(),
            }))
        }

        Commands::SignUp {
            email,
            password,
            name,
            role,
        } => {
            let role: Role = role.parse()?;
            let account = manager
                .sign_up(&email, &password, name.as_deref(), role)
                .await?;

            Ok(json!({
                "outcome": "created",
                "profile": account.profile,
                "landing_route": account.role().landing_route().path(),
            }))
        }

        Commands::SignOut => {
            let target = manager.sign_out().await?;
            Ok(json!({ "redirect": target.path() }))
        }

        Commands::Open { path } => Ok(open(&path, manager.resolve(&path))),
    }
}

fn status(state: &AuthState) -> Value {
    let session = state.session().map(|session| {
        json!({
            "token_type": session.token_type,
            "issued_at": session.issued_at.to_rfc3339(),
            "expires_at": session.expires_at.to_rfc3339(),
            "expires_in": session.expires_in,
        })
    });

    json!({
        "state": state.as_str(),
        "profile": state.profile(),
        "session": session,
    })
}

fn open(path: &str, resolution: Resolution) -> Value {
    let (outcome, route): (&str, Option<Route>) = match resolution {
        Resolution::Render(route) => ("render", Some(route)),
        Resolution::Loading => ("loading", None),
        Resolution::Redirect(route) => ("redirect", Some(route)),
        Resolution::NotFound => ("not_found", None),
    };

    json!({
        "path": path,
        "resolution": outcome,
        "route": route.map(|route| route.path()),
    })
}
