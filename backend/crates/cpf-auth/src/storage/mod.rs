pub(crate) mod file_store;
pub(crate) mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

use crate::Result as AuthResult;

/// Minimal durable key/value store holding serialized account records.
///
/// Access is sequential from the session manager; implementations only need
/// to make each individual call atomic.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> AuthResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> AuthResult<()>;

    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> AuthResult<()>;

    /// Takes a corrupt value out of circulation. Defaults to removal.
    fn quarantine(&self, key: &str) -> AuthResult<()> {
        self.remove(key)
    }
}
