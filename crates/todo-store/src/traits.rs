use todo_types::Entry;

use crate::error::StoreResult;

/// Keyed entry storage.
///
/// All implementations must satisfy these invariants:
/// - Keyed writes reject an empty id with `InvalidKey`; nothing else about
///   the entry is validated.
/// - `save` never checks for an existing value under the same id.
/// - `update` stores `entry` verbatim under `id` and does not compare
///   `entry.id` with `id`.
/// - Implementations are shared across request handlers, so they must be
///   safe for concurrent use. Operations on the same key are serialized.
pub trait EntryRepository: Send + Sync {
    /// Read the entry stored under `id`.
    ///
    /// Returns `NotFound` if nothing is stored there and `Corrupt` if the
    /// stored payload cannot be decoded.
    fn get(&self, id: &str) -> StoreResult<Entry>;

    /// Store `entry` under `entry.id`, replacing any previous value.
    fn save(&self, entry: &Entry) -> StoreResult<()>;

    /// Remove the entry stored under `id`. Removing an absent key succeeds.
    fn delete(&self, id: &str) -> StoreResult<()>;

    /// Replace the entry stored under `id` with `entry`.
    ///
    /// Returns `NotFound` if `id` has never been saved (or was deleted).
    fn update(&self, id: &str, entry: &Entry) -> StoreResult<()>;
}

impl<R: EntryRepository + ?Sized> EntryRepository for std::sync::Arc<R> {
    fn get(&self, id: &str) -> StoreResult<Entry> {
        (**self).get(id)
    }

    fn save(&self, entry: &Entry) -> StoreResult<()> {
        (**self).save(entry)
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        (**self).delete(id)
    }

    fn update(&self, id: &str, entry: &Entry) -> StoreResult<()> {
        (**self).update(id, entry)
    }
}
