use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use todo_types::{Entry, EntryId};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::EntryRepository;

/// In-memory, HashMap-based entry repository.
///
/// Entries are kept as JSON payloads behind a `RwLock` and live as long as
/// the repository value does. Reads share the lock; writes take it
/// exclusively, so operations on the same key never interleave.
pub struct InMemoryEntryRepository {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryEntryRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read_map()?.len())
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read_map()?.is_empty())
    }

    /// Returns `true` if a payload is stored under `id`.
    pub fn contains(&self, id: &str) -> StoreResult<bool> {
        Ok(self.read_map()?.contains_key(id))
    }

    /// Remove all entries.
    pub fn clear(&self) -> StoreResult<()> {
        self.write_map()?.clear();
        Ok(())
    }

    /// Sorted list of every stored id.
    pub fn ids(&self) -> StoreResult<Vec<String>> {
        let map = self.read_map()?;
        let mut ids: Vec<String> = map.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    /// The raw payload stored under `id`, if any.
    pub fn payload(&self, id: &str) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.read_map()?.get(id).cloned())
    }

    /// Store a raw payload under `id` without encoding it.
    ///
    /// Used to seed fixtures, including payloads that will not decode.
    pub fn insert_raw(&self, id: impl Into<String>, payload: Vec<u8>) -> StoreResult<()> {
        let id = id.into();
        if !EntryId::is_valid_key(&id) {
            return Err(StoreError::InvalidKey);
        }
        self.write_map()?.insert(id, payload);
        Ok(())
    }

    fn read_map(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<String, Vec<u8>>>> {
        self.entries
            .read()
            .map_err(|e| StoreError::Unavailable(format!("lock poisoned: {e}")))
    }

    fn write_map(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<String, Vec<u8>>>> {
        self.entries
            .write()
            .map_err(|e| StoreError::Unavailable(format!("lock poisoned: {e}")))
    }
}

impl Default for InMemoryEntryRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn encode(entry: &Entry) -> StoreResult<Vec<u8>> {
    serde_json::to_vec(entry).map_err(|e| StoreError::Serialization(e.to_string()))
}

impl EntryRepository for InMemoryEntryRepository {
    fn get(&self, id: &str) -> StoreResult<Entry> {
        let map = self.read_map()?;
        let payload = map
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        serde_json::from_slice(payload).map_err(|e| StoreError::Corrupt {
            id: id.to_string(),
            reason: e.to_string(),
        })
    }

    fn save(&self, entry: &Entry) -> StoreResult<()> {
        if !entry.has_id() {
            return Err(StoreError::InvalidKey);
        }
        let payload = encode(entry)?;
        let replaced = self
            .write_map()?
            .insert(entry.id.clone(), payload)
            .is_some();
        debug!(id = %entry.id, replaced, "entry saved");
        Ok(())
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        if !EntryId::is_valid_key(id) {
            return Err(StoreError::InvalidKey);
        }
        let removed = self.write_map()?.remove(id).is_some();
        debug!(id, removed, "entry deleted");
        Ok(())
    }

    fn update(&self, id: &str, entry: &Entry) -> StoreResult<()> {
        let payload = encode(entry)?;
        // Existence check and write share one exclusive lock.
        let mut map = self.write_map()?;
        let slot = map
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        *slot = payload;
        debug!(id, "entry updated");
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryEntryRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.read_map().map(|m| m.len()).ok();
        f.debug_struct("InMemoryEntryRepository")
            .field("entry_count", &count)
            .finish()
    }
}
