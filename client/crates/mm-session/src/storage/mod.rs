pub mod file_store;
pub mod memory_store;

use crate::StorageErrorResult;

/// Key holding the serialized identity of the signed-in user.
pub const IDENTITY_KEY: &str = "x-user";
/// Key holding the in-progress selection.
pub const SELECTION_KEY: &str = "x-selection";
/// Key holding likes submitted from this client, for the pending matches view.
pub const PENDING_LIKES_KEY: &str = "x-likes";

/// String key-value store that outlives the process.
///
/// No transactional guarantees are made across keys.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageErrorResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> StorageErrorResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> StorageErrorResult<()>;

    /// Removes every key owned by this store.
    fn clear(&mut self) -> StorageErrorResult<()>;

    /// Takes an unreadable value out of service.
    ///
    /// The default simply removes it; stores that can keep a copy for
    /// inspection override this.
    fn quarantine(&mut self, key: &str) -> StorageErrorResult<()> {
        self.remove(key)
    }
}
