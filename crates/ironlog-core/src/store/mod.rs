//! Durable storage for the active session snapshot.
//!
//! Two layers live here:
//!
//! - [`KeyValueStore`]: a raw string slot store (`get`/`set`/`remove`) that
//!   reports failures as errors. Implemented by [`SqliteKeyValueStore`] for
//!   on-disk durability and [`MemoryKeyValueStore`] for tests and embedding.
//! - [`SessionStore`]: JSON persistence of one [`SessionSnapshot`] under a
//!   fixed key. It never fails towards its caller: write errors are logged
//!   and unreadable data is treated as absent, so losing durability never
//!   takes the in-memory session down with it.
//!
//! ```rust
//! use ironlog_core::store::{MemoryKeyValueStore, SessionStore};
//!
//! let store = SessionStore::new(MemoryKeyValueStore::new());
//! assert!(store.load().is_none());
//! store.clear(); // idempotent
//! ```

use log::{debug, warn};

use crate::{error::Result, models::SessionSnapshot};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;

/// Key under which the active session snapshot is stored.
pub const SESSION_KEY: &str = "ironlog.session";

/// String key-value storage backend.
pub trait KeyValueStore: Send {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for Box<K> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Single-slot JSON persistence for [`SessionSnapshot`].
pub struct SessionStore<K> {
    backend: K,
    key: String,
}

impl<K: KeyValueStore> SessionStore<K> {
    /// Wraps a backend, using [`SESSION_KEY`] as the slot name.
    pub fn new(backend: K) -> Self {
        Self::with_key(backend, SESSION_KEY)
    }

    /// Wraps a backend with a custom slot name.
    pub fn with_key(backend: K, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Serializes and writes the full snapshot. Failures are logged only.
    pub fn save(&self, snapshot: &SessionSnapshot) {
        let json = match encode(snapshot) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize session snapshot: {e}");
                return;
            }
        };

        match self.backend.set(&self.key, &json) {
            Ok(()) => debug!("Persisted session snapshot ({} bytes)", json.len()),
            Err(e) => warn!("Failed to persist session snapshot: {e}"),
        }
    }

    /// Reads the stored snapshot.
    ///
    /// Returns `None` when nothing is stored, when the backend cannot be
    /// read, or when the stored data is not a consistent snapshot. Data of
    /// the last kind is removed from the slot.
    pub fn load(&self) -> Option<SessionSnapshot> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read session snapshot: {e}");
                return None;
            }
        };

        match decode(&raw) {
            Ok(snapshot) if snapshot.is_consistent() => Some(snapshot),
            Ok(_) => {
                warn!(
                    "Discarding stored session snapshot with an out-of-range index \
                     or duplicate entries"
                );
                self.clear();
                None
            }
            Err(e) => {
                warn!("Discarding unreadable session snapshot: {e}");
                self.clear();
                None
            }
        }
    }

    /// Removes the stored snapshot. Idempotent; failures are logged only.
    pub fn clear(&self) {
        match self.backend.remove(&self.key) {
            Ok(()) => debug!("Cleared stored session snapshot"),
            Err(e) => warn!("Failed to clear session snapshot: {e}"),
        }
    }

    /// The underlying backend.
    pub fn backend(&self) -> &K {
        &self.backend
    }
}

fn encode(snapshot: &SessionSnapshot) -> Result<String> {
    Ok(serde_json::to_string(snapshot)?)
}

fn decode(raw: &str) -> Result<SessionSnapshot> {
    Ok(serde_json::from_str(raw)?)
}
