
use crate::{
    AuthError, IdentityService, KeyValueStore, MemoryStore, NoopIdentityService,
    Result as AuthResult, SessionManager, SessionSettings,
};

use cpf_core::{Account, AccountId, Profile, Role, Session};

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use tokio::sync::watch;

pub(crate) fn test_settings() -> SessionSettings {
    SessionSettings {
        session_lifetime: TimeDelta::seconds(3600),
        remote_timeout: Duration::from_millis(100),
    }
}

/// Manager over `store` with no remote backend.
pub(crate) fn local_manager(store: Arc<MemoryStore>) -> SessionManager {
    SessionManager::new(store, Arc::new(NoopIdentityService), test_settings())
}

pub(crate) fn remote_manager(
    store: Arc<MemoryStore>,
    remote: Arc<ScriptedIdentityService>,
) -> SessionManager {
    SessionManager::new(store, remote, test_settings())
}

/// Remote account together with a session for it.
pub(crate) fn remote_account(email: &str, role: Role) -> (Account, Session) {
    let now = Utc::now();
    let account = Account::fabricate(email, "Remote", role, now);
    let session = Session::mock(account.user.clone(), TimeDelta::seconds(600), now);
    (account, session)
}

/// Store whose writes and removals can be switched to fail.
#[derive(Default)]
pub(crate) struct FailingStore {
    inner: MemoryStore,
    pub(crate) fail_writes: AtomicBool,
    pub(crate) fail_removes: AtomicBool,
    failing_key: Mutex<Option<&'static str>>,
}

impl FailingStore {
    /// Makes writes to `key` alone fail.
    pub(crate) fn fail_writes_to(&self, key: &'static str) {
        *self.failing_key.lock().unwrap() = Some(key);
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> AuthResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> AuthResult<()> {
        if self.fail_writes.load(Ordering::SeqCst)
            || self
                .failing_key
                .lock()
                .unwrap()
                .is_some_and(|failing| failing == key)
        {
            return Err(AuthError::storage_unavailable("write refused"));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> AuthResult<()> {
        if self.fail_removes.load(Ordering::SeqCst) {
            return Err(AuthError::storage_unavailable("remove refused"));
        }
        self.inner.remove(key)
    }
}

/// Remote backend with scripted answers.
pub(crate) struct ScriptedIdentityService {
    session: Mutex<Option<Session>>,
    profile: Mutex<Option<Profile>>,
    pub(crate) hang: AtomicBool,
    pub(crate) fail_sign_out: AtomicBool,
    pub(crate) sign_out_calls: AtomicUsize,
    pub(crate) session_calls: AtomicUsize,
    changes: watch::Sender<Option<Session>>,
}

impl ScriptedIdentityService {
    pub(crate) fn new() -> Self {
        let (changes, _) = watch::channel(None);
        Self {
            session: Mutex::new(None),
            profile: Mutex::new(None),
            hang: AtomicBool::new(false),
            fail_sign_out: AtomicBool::new(false),
            sign_out_calls: AtomicUsize::new(0),
            session_calls: AtomicUsize::new(0),
            changes,
        }
    }

    pub(crate) fn with_account(account: &Account, session: Session) -> Self {
        let service = Self::new();
        *service.session.lock().unwrap() = Some(session);
        *service.profile.lock().unwrap() = Some(account.profile.clone());
        service
    }

    pub(crate) fn set_profile(&self, profile: Option<Profile>) {
        *self.profile.lock().unwrap() = profile;
    }

    /// Pushes a session change to subscribers.
    pub(crate) fn push(&self, session: Option<Session>) {
        self.changes.send_replace(session);
    }

    async fn maybe_hang(&self) {
        if self.hang.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
    }
}

#[async_trait]
impl IdentityService for ScriptedIdentityService {
    fn is_configured(&self) -> bool {
        true
    }

    async fn current_session(&self) -> AuthResult<Option<Session>> {
        self.session_calls.fetch_add(1, Ordering::SeqCst);
        self.maybe_hang().await;
        Ok(self.session.lock().unwrap().clone())
    }

    async fn fetch_profile(&self, user_id: &AccountId) -> AuthResult<Profile> {
        self.maybe_hang().await;
        self.profile
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| AuthError::remote_api("NOT_FOUND", format!("no profile {user_id}")))
    }

    async fn sign_out(&self) -> AuthResult<()> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        self.maybe_hang().await;
        if self.fail_sign_out.load(Ordering::SeqCst) {
            return Err(AuthError::remote_api("UNAVAILABLE", "sign-out refused"));
        }
        Ok(())
    }

    fn subscribe(&self) -> Option<watch::Receiver<Option<Session>>> {
        Some(self.changes.subscribe())
    }
}
