use cpf_core::Account;

/// Result of loading the stored account - distinguishes "not found" from corruption.
#[derive(Debug, Default)]
pub struct LoadResult {
    pub account: Option<Account>,
    /// Present if records exist but could not be parsed or do not belong together
    pub corruption_error: Option<String>,
}

impl LoadResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn loaded(account: Account) -> Self {
        Self {
            account: Some(account),
            corruption_error: None,
        }
    }

    pub fn corrupted(message: impl Into<String>) -> Self {
        Self {
            account: None,
            corruption_error: Some(message.into()),
        }
    }
}
