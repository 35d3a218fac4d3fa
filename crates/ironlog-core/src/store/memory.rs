//! In-process key-value store.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use super::KeyValueStore;
use crate::error::{Result, SessionError};

/// Map-backed [`KeyValueStore`].
///
/// Clones share the same map, so a caller can keep a handle to inspect what
/// a [`crate::session::WorkoutContext`] persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.slots.lock().map_err(|_| SessionError::Persistence {
            message: "memory store lock poisoned".to_string(),
        })
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.slots()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.slots()?.remove(key);
        Ok(())
    }
}
