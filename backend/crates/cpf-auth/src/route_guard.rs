//! Role-based routing decisions.

use crate::AuthState;

use cpf_core::{RequiredRole, Route, RouteAccess};

/// What a guarded route should do for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Initialization still running: show a loading indicator, do not navigate.
    Loading,
    Redirect(Route),
    Allow,
}

/// Outcome of navigating to an arbitrary path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Loading,
    Redirect(Route),
    NotFound,
}

/// Decides access to content guarded by `required`.
///
/// A signed-in account lacking the role is sent to its own landing route,
/// never back to the sign-in page.
pub fn evaluate(state: &AuthState, required: RequiredRole) -> GuardDecision {
    if state.is_loading() {
        return GuardDecision::Loading;
    }

    let Some(profile) = state.profile() else {
        return GuardDecision::Redirect(Route::Auth);
    };

    if !required.admits(profile.role) {
        return GuardDecision::Redirect(profile.role.landing_route());
    }

    GuardDecision::Allow
}

/// Where the sign-in page forwards an already authenticated visitor.
pub fn auth_page_redirect(state: &AuthState) -> Option<Route> {
    state.profile().map(|profile| profile.role.landing_route())
}

/// Resolves `path` against the route table and the current state.
pub fn resolve(path: &str, state: &AuthState) -> Resolution {
    let Some(route) = Route::from_path(path) else {
        return Resolution::NotFound;
    };

    match route.access() {
        RouteAccess::Redirect(target) => Resolution::Redirect(target),
        RouteAccess::Public => match auth_page_redirect(state) {
            Some(target) if route == Route::Auth => Resolution::Redirect(target),
            _ => Resolution::Render(route),
        },
        RouteAccess::Protected(required) => match evaluate(state, required) {
            GuardDecision::Loading => Resolution::Loading,
            GuardDecision::Redirect(target) => Resolution::Redirect(target),
            GuardDecision::Allow => Resolution::Render(route),
        },
    }
}
