use cpf_core::Account;

/// Outcome of resolving sign-in credentials against the stored account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountLookup {
    /// The stored account matched on email and role.
    Found(Account),
    /// No match: a new account was fabricated and persisted.
    Created(Account),
}

impl AccountLookup {
    pub fn account(&self) -> &Account {
        match self {
            Self::Found(account) | Self::Created(account) => account,
        }
    }

    pub fn into_account(self) -> Account {
        match self {
            Self::Found(account) | Self::Created(account) => account,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}
