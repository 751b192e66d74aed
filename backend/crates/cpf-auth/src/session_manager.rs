use crate::{
    AccountLookup, AccountStore, AuthError, AuthState, CurrentSession, GuardDecision,
    IdentityService, KeyValueStore, LoadResult, MemoryStore, NoopIdentityService, Resolution,
    Result as AuthResult, SessionSettings, route_guard,
};

use cpf_core::{
    Account, Profile, RequiredRole, Role, Route, Session, display_name_or_default,
};

use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;

/// Owns the single current account and its persistence.
///
/// Responsibilities:
/// - Restore a stored account (or a remote session) once at startup
/// - Sign in, sign up and sign out, mirroring every change into storage
/// - Publish each state transition to subscribers
/// - Answer route-guard questions against the current state
///
/// Mutating operations are serialized; concurrent callers observe
/// last-write-wins on both the stored and the in-memory account.
pub struct SessionManager {
    accounts: AccountStore,
    identity_service: Arc<dyn IdentityService>,
    settings: SessionSettings,
    state_tx: watch::Sender<AuthState>,
    operation_lock: Mutex<()>,
}

impl SessionManager {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        identity_service: Arc<dyn IdentityService>,
        settings: SessionSettings,
    ) -> Self {
        let (state_tx, _) = watch::channel(AuthState::Uninitialized);

        Self {
            accounts: AccountStore::new(store),
            identity_service,
            settings,
            state_tx,
            operation_lock: Mutex::new(()),
        }
    }

    /// Local-only manager over an in-memory store.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStore::new()),
            Arc::new(NoopIdentityService),
            SessionSettings::default(),
        )
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state_tx.subscribe()
    }

    pub fn state(&self) -> AuthState {
        self.state_tx.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state_tx.borrow().is_loading()
    }

    pub fn current_profile(&self) -> Option<Profile> {
        self.state_tx.borrow().profile().cloned()
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Restores the previous session, once.
    ///
    /// Order: stored account, then the remote identity service (if
    /// configured). Always resolves to `Authenticated` or `Unauthenticated`;
    /// every failure along the way is logged and treated as absence.
    /// Later calls return the current state untouched.
    pub async fn initialize(&self) -> AuthState {
        let _guard = self.operation_lock.lock().await;

        if !matches!(*self.state_tx.borrow(), AuthState::Uninitialized) {
            debug!("Session manager already initialized");
            return self.state();
        }

        self.set_state(AuthState::Loading);

        let restored = match self.restore_stored() {
            Some(current) => Some(current),
            None => self.restore_remote().await,
        };

        let resolved = match restored {
            Some(current) => AuthState::authenticated(current),
            None => AuthState::Unauthenticated,
        };

        self.set_state(resolved.clone());
        resolved
    }

    /// Signs in with any credentials.
    ///
    /// The stored account is resumed when email and role match; otherwise a
    /// new account is fabricated and stored. The password is never checked.
    pub async fn sign_in(
        &self,
        email: &str,
        _password: &str,
        role: Role,
    ) -> AuthResult<AccountLookup> {
        let _guard = self.operation_lock.lock().await;
        let now = Utc::now();

        let lookup = self.accounts.find_or_create(email, role, now)?;

        match &lookup {
            AccountLookup::Found(account) => info!("Resumed account {}", account.id()),
            AccountLookup::Created(account) => info!(
                "Created account {} for {} ({})",
                account.id(),
                account.email(),
                role.as_str()
            ),
        }

        let current = self.mint(lookup.account().clone(), now);
        self.set_state(AuthState::authenticated(current));

        Ok(lookup)
    }

    /// Always creates a new account, replacing whatever was stored.
    /// A blank or missing display name falls back to `Utilisateur`.
    pub async fn sign_up(
        &self,
        email: &str,
        _password: &str,
        display_name: Option<&str>,
        role: Role,
    ) -> AuthResult<Account> {
        let _guard = self.operation_lock.lock().await;
        let now = Utc::now();

        let account = Account::fabricate(email, &display_name_or_default(display_name), role, now);
        self.accounts.save(&account)?;

        info!(
            "Signed up account {} for {} ({})",
            account.id(),
            account.email(),
            role.as_str()
        );

        let current = self.mint(account.clone(), now);
        self.set_state(AuthState::authenticated(current));

        Ok(account)
    }

    /// Signs out and returns the route to navigate to.
    ///
    /// The remote sign-out is best effort. In-memory state is cleared even
    /// if removing the stored records fails; that failure is still returned.
    pub async fn sign_out(&self) -> AuthResult<Route> {
        let _guard = self.operation_lock.lock().await;

        if self.identity_service.is_configured()
            && let Err(e) = self
                .call_remote("sign_out", self.identity_service.sign_out())
                .await
        {
            warn!("Remote sign-out failed (ignored): {e}");
        }

        let cleared = self.accounts.clear();
        self.set_state(AuthState::Unauthenticated);
        cleared?;

        info!("Signed out");
        Ok(Route::Root)
    }

    /// Applies a session change pushed by the remote identity service.
    ///
    /// `None`, or a session whose profile cannot be fetched, clears the
    /// current account. Storage is left untouched. Pushes arriving before
    /// initialization has resolved are ignored.
    pub async fn apply_remote_session(&self, session: Option<Session>) -> AuthState {
        let _guard = self.operation_lock.lock().await;

        if self.state_tx.borrow().is_loading() {
            debug!("Ignoring remote session change before initialization");
            return self.state();
        }

        let next = match session {
            Some(session) => match self.load_remote_account(session).await {
                Some(current) => AuthState::authenticated(current),
                None => AuthState::Unauthenticated,
            },
            None => AuthState::Unauthenticated,
        };

        self.set_state(next.clone());
        next
    }

    /// Forwards remote session changes into this manager until the service
    /// drops its sender. `None` if the service has no push channel.
    pub fn spawn_remote_listener(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let mut changes = self.identity_service.subscribe()?;
        let manager = Arc::clone(self);

        Some(tokio::spawn(async move {
            info!("Remote session listener started");
            while changes.changed().await.is_ok() {
                let session = changes.borrow_and_update().clone();
                manager.apply_remote_session(session).await;
            }
            debug!("Remote session listener stopped");
        }))
    }

    /// Guard decision for content requiring `required`.
    pub fn guard(&self, required: RequiredRole) -> GuardDecision {
        route_guard::evaluate(&self.state_tx.borrow(), required)
    }

    /// Resolves a navigation to `path`.
    pub fn resolve(&self, path: &str) -> Resolution {
        route_guard::resolve(path, &self.state_tx.borrow())
    }

    fn set_state(&self, next: AuthState) {
        let previous = self.state_tx.send_replace(next);
        debug!(
            "Auth state: {} -> {}",
            previous.as_str(),
            self.state_tx.borrow().as_str()
        );
    }

    fn mint(&self, account: Account, now: DateTime<Utc>) -> CurrentSession {
        let session = Session::mock(account.user.clone(), self.settings.session_lifetime, now);
        CurrentSession { account, session }
    }

    fn restore_stored(&self) -> Option<CurrentSession> {
        match self.accounts.load() {
            Ok(LoadResult {
                account: Some(account),
                ..
            }) => {
                info!(
                    "Restored stored account {} ({})",
                    account.id(),
                    account.role().as_str()
                );
                Some(self.mint(account, Utc::now()))
            }
            Ok(LoadResult {
                corruption_error: Some(message),
                ..
            }) => {
                warn!("Stored account unreadable, starting signed out: {message}");
                if let Err(e) = self.accounts.quarantine() {
                    warn!("Failed to quarantine stored account: {e}");
                }
                None
            }
            Ok(_) => {
                info!("No stored account (first launch)");
                None
            }
            Err(e) => {
                warn!("Failed to read stored account: {e}");
                None
            }
        }
    }

    async fn restore_remote(&self) -> Option<CurrentSession> {
        if !self.identity_service.is_configured() {
            debug!("No remote identity service configured");
            return None;
        }

        let session = match self
            .call_remote("current_session", self.identity_service.current_session())
            .await
        {
            Ok(Some(session)) => session,
            Ok(None) => {
                info!("No remote session");
                return None;
            }
            Err(e) => {
                warn!("Remote session lookup failed: {e}");
                return None;
            }
        };

        self.load_remote_account(session).await
    }

    async fn load_remote_account(&self, session: Session) -> Option<CurrentSession> {
        let profile = match self
            .call_remote(
                "fetch_profile",
                self.identity_service.fetch_profile(&session.user.id),
            )
            .await
        {
            Ok(profile) => profile,
            Err(e) => {
                warn!("Remote profile fetch failed for {}: {e}", session.user.id);
                return None;
            }
        };

        match Account::from_parts(session.user.clone(), profile) {
            Ok(account) => {
                info!(
                    "Restored remote session for {} ({})",
                    account.id(),
                    account.role().as_str()
                );
                Some(CurrentSession { account, session })
            }
            Err(e) => {
                warn!("Remote profile does not match session user: {e}");
                None
            }
        }
    }

    async fn call_remote<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = AuthResult<T>>,
    ) -> AuthResult<T> {
        let timeout = self.settings.remote_timeout;

        match tokio::time::timeout(timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(AuthError::remote_timeout(
                operation,
                u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            )),
        }
    }
}
