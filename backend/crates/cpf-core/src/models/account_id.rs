use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

const ID_PREFIX: &str = "mock";
const SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Last millisecond component handed out, so two ids minted in the same
/// millisecond still differ.
static LAST_ISSUED_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Opaque account identifier shared by a [`crate::User`] and its [`crate::Profile`].
///
/// Locally fabricated ids look like `mock-<unix-millis>-<9 base-36 chars>`;
/// ids coming from a remote identity service are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mints a fresh id. Unique for the lifetime of the process.
    pub fn generate(now: DateTime<Utc>) -> Self {
        let millis = next_millis(now.timestamp_millis());

        let mut rng = rand::rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
            .collect();

        Self(format!("{ID_PREFIX}-{millis}-{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn next_millis(now: i64) -> i64 {
    let mut previous = LAST_ISSUED_MILLIS.load(Ordering::SeqCst);
    loop {
        let candidate = if now > previous { now } else { previous + 1 };
        match LAST_ISSUED_MILLIS.compare_exchange_weak(
            previous,
            candidate,
            Ordering::SeqCst,
            Ordering::SeqCst,
        ) {
            Ok(_) => return candidate,
            Err(actual) => previous = actual,
        }
    }
}
