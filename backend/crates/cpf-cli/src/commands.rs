use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the current session state
    Status,

    /// Sign in (any password is accepted)
    SignIn {
        /// Account email
        #[arg(long)]
        email: String,
        /// Password (not checked)
        #[arg(long, default_value = "")]
        password: String,
        /// Role: courtier or client
        #[arg(long, value_parser = ["courtier", "client"])]
        role: String,
    },

    /// Create a new account, replacing the stored one
    SignUp {
        /// Account email
        #[arg(long)]
        email: String,
        /// Password (not checked)
        #[arg(long, default_value = "")]
        password: String,
        /// Display name (defaults to "Utilisateur")
        #[arg(long)]
        name: Option<String>,
        /// Role: courtier or client
        #[arg(long, value_parser = ["courtier", "client"])]
        role: String,
    },

    /// Sign out and clear the stored account
    SignOut,

    /// Resolve an application path against the current session
    Open {
        /// Path, e.g. /dashboard
        path: String,
    },
}
