use crate::{AccountLookup, KeyValueStore, LoadResult, Result as AuthResult};

use cpf_core::{Account, Profile, Role, User, display_name_from_email};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

/// Storage key of the serialized [`User`].
pub const MOCK_USER_KEY: &str = "mock_user";
/// Storage key of the serialized [`Profile`].
pub const MOCK_PROFILE_KEY: &str = "mock_profile";

/// Typed access to the single persisted account slot.
///
/// The slot holds at most one account: saving a new one overwrites the
/// previous one.
#[derive(Clone)]
pub struct AccountStore {
    store: Arc<dyn KeyValueStore>,
}

impl AccountStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Loads the stored account.
    ///
    /// Returns:
    /// - `Ok(LoadResult { account: Some(...), .. })` - both records present and consistent
    /// - `Ok(LoadResult { account: None, corruption_error: None })` - nothing (or only half) stored
    /// - `Ok(LoadResult { account: None, corruption_error: Some(...) })` - records unreadable
    /// - `Err(..)` - the underlying store failed
    pub fn load(&self) -> AuthResult<LoadResult> {
        let stored_user = self.store.get(MOCK_USER_KEY)?;
        let stored_profile = self.store.get(MOCK_PROFILE_KEY)?;

        let (Some(user_json), Some(profile_json)) = (stored_user, stored_profile) else {
            debug!("No complete stored account");
            return Ok(LoadResult::empty());
        };

        let profile = match serde_json::from_str::<Profile>(&profile_json) {
            Ok(profile) => profile,
            Err(e) => return Ok(LoadResult::corrupted(format!("{MOCK_PROFILE_KEY}: {e}"))),
        };

        let user = match serde_json::from_str::<User>(&user_json) {
            Ok(user) => user,
            Err(e) => return Ok(LoadResult::corrupted(format!("{MOCK_USER_KEY}: {e}"))),
        };

        match Account::from_parts(user, profile) {
            Ok(account) => {
                debug!("Loaded stored account {}", account.id());
                Ok(LoadResult::loaded(account))
            }
            Err(e) => Ok(LoadResult::corrupted(e.to_string())),
        }
    }

    /// Persists both records, replacing whatever account was stored.
    ///
    /// If the profile write fails, the previous user record is put back so
    /// the slot keeps holding one consistent account.
    pub fn save(&self, account: &Account) -> AuthResult<()> {
        let user_json = serde_json::to_string(&account.user)?;
        let profile_json = serde_json::to_string(&account.profile)?;

        let previous_user = self.store.get(MOCK_USER_KEY)?;
        self.store.set(MOCK_USER_KEY, &user_json)?;

        if let Err(e) = self.store.set(MOCK_PROFILE_KEY, &profile_json) {
            self.roll_back_user(previous_user.as_deref());
            return Err(e);
        }

        info!("Saved account {} ({})", account.id(), account.role().as_str());
        Ok(())
    }

    fn roll_back_user(&self, previous: Option<&str>) {
        let restored = match previous {
            Some(json) => self.store.set(MOCK_USER_KEY, json),
            None => self.store.remove(MOCK_USER_KEY),
        };

        match restored {
            Ok(()) => debug!("Rolled back '{MOCK_USER_KEY}' after failed profile write"),
            Err(e) => warn!("Failed to roll back '{MOCK_USER_KEY}': {e}"),
        }
    }

    /// Removes both records. Both removals are attempted even if the first fails.
    pub fn clear(&self) -> AuthResult<()> {
        let user_removed = self.store.remove(MOCK_USER_KEY);
        let profile_removed = self.store.remove(MOCK_PROFILE_KEY);

        user_removed?;
        profile_removed?;

        debug!("Cleared stored account");
        Ok(())
    }

    /// Takes unreadable records out of circulation.
    pub fn quarantine(&self) -> AuthResult<()> {
        let user_quarantined = self.store.quarantine(MOCK_USER_KEY);
        let profile_quarantined = self.store.quarantine(MOCK_PROFILE_KEY);

        user_quarantined?;
        profile_quarantined?;

        warn!("Quarantined unreadable stored account");
        Ok(())
    }

    /// Resumes the stored account when email and role both match, otherwise
    /// fabricates and persists a new one named after the email's local part.
    ///
    /// Unreadable stored records count as "no match".
    pub fn find_or_create(
        &self,
        email: &str,
        role: Role,
        now: DateTime<Utc>,
    ) -> AuthResult<AccountLookup> {
        let loaded = self.load()?;

        if let Some(message) = &loaded.corruption_error {
            warn!("Ignoring unreadable stored account: {message}");
        }

        if let Some(account) = loaded.account
            && account.matches(email, role)
        {
            return Ok(AccountLookup::Found(account));
        }

        let account = Account::fabricate(email, &display_name_from_email(email), role, now);
        self.save(&account)?;

        Ok(AccountLookup::Created(account))
    }
}
