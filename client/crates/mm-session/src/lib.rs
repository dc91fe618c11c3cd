//! Client-side session state: who is using this client, durable across restarts.

pub mod error;
pub mod session_store;
pub mod storage;

#[cfg(test)]
mod tests;

pub use error::{SessionError, SessionErrorResult, StorageError, StorageErrorResult};
pub use session_store::SessionStore;
pub use storage::{
    IDENTITY_KEY, KeyValueStore, PENDING_LIKES_KEY, SELECTION_KEY, file_store::FileStore,
    memory_store::MemoryStore,
};
