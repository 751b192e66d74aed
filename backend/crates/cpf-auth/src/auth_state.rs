use cpf_core::{Account, Profile, Session, User};

/// The account and session that are current after a successful transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentSession {
    pub account: Account,
    pub session: Session,
}

/// Observable authentication state.
///
/// `Uninitialized -> Loading -> {Authenticated | Unauthenticated}`, then
/// `Authenticated <-> Unauthenticated` through sign-in, sign-up and sign-out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Uninitialized,
    Loading,
    Authenticated(Box<CurrentSession>),
    Unauthenticated,
}

impl AuthState {
    pub fn authenticated(current: CurrentSession) -> Self {
        Self::Authenticated(Box::new(current))
    }

    /// True until initialization has resolved.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Uninitialized | Self::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn current(&self) -> Option<&CurrentSession> {
        match self {
            Self::Authenticated(current) => Some(current),
            _ => None,
        }
    }

    pub fn account(&self) -> Option<&Account> {
        self.current().map(|current| &current.account)
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.account().map(|account| &account.profile)
    }

    pub fn user(&self) -> Option<&User> {
        self.account().map(|account| &account.user)
    }

    pub fn session(&self) -> Option<&Session> {
        self.current().map(|current| &current.session)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Loading => "loading",
            Self::Authenticated(_) => "authenticated",
            Self::Unauthenticated => "unauthenticated",
        }
    }
}
