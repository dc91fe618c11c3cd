//! Single source of truth for the signed-in identity.

use crate::{
    IDENTITY_KEY, KeyValueStore, PENDING_LIKES_KEY, SELECTION_KEY, SessionError,
    SessionErrorResult,
};

use mm_core::{Candidate, Identity, Selection};

use log::{debug, info, warn};
use serde::Serialize;
use tokio::sync::watch;

/// Holds the current identity in memory and mirrors it to durable storage.
///
/// Consumers observe changes through [`SessionStore::subscribe`]; a receiver
/// sees the new value as soon as `login`, `logout` or `restore` returns.
/// Storage failures never fail an operation: they are logged and the session
/// carries on in memory only.
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
    identity: watch::Sender<Option<Identity>>,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        let (identity, _) = watch::channel(None);
        Self { storage, identity }
    }

    /// Loads a persisted identity, if there is a readable one.
    ///
    /// Absent or unreadable data leaves the in-memory state as it was.
    /// Unreadable data is quarantined so the next start does not trip on it.
    pub fn restore(&mut self) -> Option<Identity> {
        let raw = match self.storage.get(IDENTITY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("No persisted session");
                return self.current();
            }
            Err(e) => {
                warn!("Failed to read persisted session: {e} ({})", e.recovery_hint());
                return self.current();
            }
        };

        let mut identity = match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) if !identity.is_empty() => identity,
            Ok(_) => {
                warn!("Persisted session has no id or username, ignoring it");
                self.quarantine_identity();
                return self.current();
            }
            Err(e) => {
                warn!("Persisted session is malformed, ignoring it: {e}");
                self.quarantine_identity();
                return self.current();
            }
        };

        if identity.strip_secrets() {
            warn!("Persisted session contained secret fields, rewriting without them");
            self.persist(IDENTITY_KEY, &identity);
        }

        info!("Restored session for {} ({})", identity.username, identity.role);
        self.identity.send_replace(Some(identity.clone()));
        Some(identity)
    }

    /// Replaces the current identity and persists it.
    ///
    /// Rejects an empty identity without touching any state. Switching to a
    /// different user discards the previous user's selection and pending likes.
    pub fn login(&mut self, mut identity: Identity) -> SessionErrorResult<()> {
        if identity.is_empty() {
            return Err(SessionError::empty_identity());
        }

        if identity.strip_secrets() {
            warn!("Secret fields passed to login were dropped before storing");
        }

        let previous = self.current();
        if previous.as_ref().is_some_and(|p| p.id != identity.id) {
            self.remove_key(SELECTION_KEY);
            self.remove_key(PENDING_LIKES_KEY);
        }

        self.identity.send_replace(Some(identity.clone()));
        self.persist(IDENTITY_KEY, &identity);

        info!("Logged in as {} ({})", identity.username, identity.role);
        Ok(())
    }

    /// Clears the identity and every piece of persisted session data.
    pub fn logout(&mut self) {
        self.identity.send_replace(None);

        if let Err(e) = self.storage.clear() {
            warn!("Failed to clear session storage: {e}; removing known keys");
            for key in [IDENTITY_KEY, SELECTION_KEY, PENDING_LIKES_KEY] {
                self.remove_key(key);
            }
        }

        info!("Logged out, session data cleared");
    }

    pub fn current(&self) -> Option<Identity> {
        self.identity.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.borrow().is_some()
    }

    /// Receiver that always holds the latest identity.
    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.identity.subscribe()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// The persisted in-progress selection, bounded to `capacity`.
    pub fn load_selection(&self, capacity: usize) -> Selection {
        self.load_selection_bounded(capacity).0
    }

    /// Same as [`SessionStore::load_selection`], also returning how many
    /// stored entries did not fit the capacity.
    pub fn load_selection_bounded(&self, capacity: usize) -> (Selection, usize) {
        let members = self.read_list(SELECTION_KEY);
        let (selection, dropped) = Selection::from_members(members, capacity);
        if dropped > 0 {
            warn!("Dropped {dropped} stored selection entries over capacity {capacity}");
        }
        (selection, dropped)
    }

    pub fn save_selection(&mut self, selection: &Selection) {
        if selection.is_empty() {
            self.remove_key(SELECTION_KEY);
        } else {
            self.persist(SELECTION_KEY, &selection.members());
        }
    }

    pub fn clear_selection(&mut self) {
        self.remove_key(SELECTION_KEY);
    }

    // =========================================================================
    // Pending likes
    // =========================================================================

    /// Appends submitted candidates to the locally kept like history.
    pub fn record_pending_likes(&mut self, liked: &[Candidate]) {
        let mut pending = self.pending_likes();
        for candidate in liked {
            if !pending.iter().any(|p| p.id == candidate.id) {
                pending.push(candidate.clone());
            }
        }
        self.persist(PENDING_LIKES_KEY, &pending);
    }

    pub fn pending_likes(&self) -> Vec<Candidate> {
        self.read_list(PENDING_LIKES_KEY)
    }

    pub fn clear_pending_likes(&mut self) {
        self.remove_key(PENDING_LIKES_KEY);
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    // =========================================================================
    // Storage helpers
    // =========================================================================

    fn read_list(&self, key: &str) -> Vec<Candidate> {
        match self.storage.get(key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Stored '{key}' is malformed, ignoring it: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read '{key}': {e}");
                Vec::new()
            }
        }
    }

    fn persist<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize '{key}', keeping it in memory only: {e}");
                return;
            }
        };

        match self.storage.set(key, &json) {
            Ok(()) => debug!("Persisted '{key}'"),
            Err(e) => warn!(
                "Failed to persist '{key}', keeping it in memory only: {e} ({})",
                e.recovery_hint()
            ),
        }
    }

    fn remove_key(&mut self, key: &str) {
        if let Err(e) = self.storage.remove(key) {
            warn!("Failed to remove '{key}': {e}");
        }
    }

    fn quarantine_identity(&mut self) {
        if let Err(e) = self.storage.quarantine(IDENTITY_KEY) {
            warn!("Failed to set aside unreadable session: {e}");
        }
    }
}
