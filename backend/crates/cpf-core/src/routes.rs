//! Application route table.
//!
//! Every route the application serves, with the access rule the router
//! applies before rendering it.

use crate::RequiredRole;

/// A known application route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`, immediately forwarded to the sign-in page.
    Root,
    /// `/auth`, the unauthenticated entry route.
    Auth,
    Dashboard,
    Prospects,
    Dossiers,
    Relances,
    Documents,
    Partenaires,
    Commissions,
    Automatisations,
    Analyses,
    Parametres,
    /// `/espace-client`, the customer landing route.
    EspaceClient,
}

/// Access rule attached to a [`Route`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Always forwarded elsewhere.
    Redirect(Route),
    /// Rendered for everyone.
    Public,
    /// Rendered only for an authenticated account satisfying the requirement.
    Protected(RequiredRole),
}

impl Route {
    pub const ALL: [Route; 13] = [
        Route::Root,
        Route::Auth,
        Route::Dashboard,
        Route::Prospects,
        Route::Dossiers,
        Route::Relances,
        Route::Documents,
        Route::Partenaires,
        Route::Commissions,
        Route::Automatisations,
        Route::Analyses,
        Route::Parametres,
        Route::EspaceClient,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Auth => "/auth",
            Self::Dashboard => "/dashboard",
            Self::Prospects => "/prospects",
            Self::Dossiers => "/dossiers",
            Self::Relances => "/relances",
            Self::Documents => "/documents",
            Self::Partenaires => "/partenaires",
            Self::Commissions => "/commissions",
            Self::Automatisations => "/automatisations",
            Self::Analyses => "/analyses",
            Self::Parametres => "/parametres",
            Self::EspaceClient => "/espace-client",
        }
    }

    /// Looks a path up in the table. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let normalized = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(trimmed) => trimmed,
        };

        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    pub fn access(&self) -> RouteAccess {
        match self {
            Self::Root => RouteAccess::Redirect(Self::Auth),
            Self::Auth => RouteAccess::Public,
            Self::EspaceClient => RouteAccess::Protected(RequiredRole::Client),
            Self::Dashboard
            | Self::Prospects
            | Self::Dossiers
            | Self::Relances
            | Self::Documents
            | Self::Partenaires
            | Self::Commissions
            | Self::Automatisations
            | Self::Analyses
            | Self::Parametres => RouteAccess::Protected(RequiredRole::Courtier),
        }
    }
}
