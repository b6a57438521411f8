use todo_store::EntryRepository;
use todo_types::{validate_title, Entry, EntryId};
use tracing::{debug, warn};

use crate::error::{ServiceError, ServiceResult};

/// Entry operations offered to the HTTP adapter.
pub trait EntryService: Send + Sync {
    /// Fetch the entry stored under `id`.
    fn get(&self, id: &str) -> ServiceResult<Entry>;

    /// Validate `title`, assign a fresh identity, and persist a new entry.
    fn create(&self, title: &str, description: &str) -> ServiceResult<Entry>;

    /// Replace the entry stored under `id` with `entry`, verbatim.
    ///
    /// `entry.id` is not compared with `id`; callers pin it themselves.
    fn update(&self, id: &str, entry: &Entry) -> ServiceResult<()>;

    /// Remove the entry stored under `id`.
    fn delete(&self, id: &str) -> ServiceResult<()>;
}

/// Stateless façade over an [`EntryRepository`].
pub struct TodoService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> TodoService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// The underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }
}

impl<R: EntryRepository> EntryService for TodoService<R> {
    fn get(&self, id: &str) -> ServiceResult<Entry> {
        self.repo.get(id).map_err(|e| {
            warn!(id, error = %e, "entry retrieval failed");
            ServiceError::RetrievalFailed(e)
        })
    }

    fn create(&self, title: &str, description: &str) -> ServiceResult<Entry> {
        validate_title(title).map_err(|e| ServiceError::ValidationFailed(e.to_string()))?;

        let entry = Entry::new(EntryId::generate(), title, description);
        self.repo.save(&entry).map_err(|e| {
            warn!(id = %entry.id, error = %e, "entry persist failed");
            ServiceError::PersistFailed(e)
        })?;
        debug!(id = %entry.id, "entry created");
        Ok(entry)
    }

    fn update(&self, id: &str, entry: &Entry) -> ServiceResult<()> {
        self.repo.update(id, entry).map_err(|e| {
            warn!(id, error = %e, "entry update failed");
            ServiceError::UpdateFailed(e)
        })
    }

    fn delete(&self, id: &str) -> ServiceResult<()> {
        self.repo.delete(id).map_err(|e| {
            warn!(id, error = %e, "entry delete failed");
            ServiceError::DeleteFailed(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use todo_store::{InMemoryEntryRepository, StoreError, StoreResult};

    const KNOWN_ID: &str = "17beccd2-c5e8-4744-9b5f-98163b4a479d";

    /// Repository that answers from fixed rules and records the entries it
    /// was asked to save or update.
    #[derive(Default)]
    struct ScriptedRepo {
        saved: Mutex<Vec<Entry>>,
        updated: Mutex<Vec<(String, Entry)>>,
    }

    impl EntryRepository for ScriptedRepo {
        fn get(&self, id: &str) -> StoreResult<Entry> {
            match id {
                KNOWN_ID => Ok(Entry::new(KNOWN_ID, "Test Title", "Test Description")),
                "corrupt" => Err(StoreError::Corrupt {
                    id: id.into(),
                    reason: "unreadable".into(),
                }),
                _ => Err(StoreError::NotFound(id.into())),
            }
        }

        fn save(&self, entry: &Entry) -> StoreResult<()> {
            if entry.title == "Error" {
                return Err(StoreError::Unavailable("scripted failure".into()));
            }
            self.saved.lock().unwrap().push(entry.clone());
            Ok(())
        }

        fn delete(&self, id: &str) -> StoreResult<()> {
            match id {
                "invalid" => Err(StoreError::InvalidKey),
                _ => Ok(()),
            }
        }

        fn update(&self, id: &str, entry: &Entry) -> StoreResult<()> {
            if id == "invalid" {
                return Err(StoreError::NotFound(id.into()));
            }
            self.updated
                .lock()
                .unwrap()
                .push((id.to_string(), entry.clone()));
            Ok(())
        }
    }

    fn scripted() -> TodoService<ScriptedRepo> {
        TodoService::new(ScriptedRepo::default())
    }

    // -----------------------------------------------------------------------
    // get
    // -----------------------------------------------------------------------

    #[test]
    fn get_known_id() {
        let entry = scripted().get(KNOWN_ID).unwrap();
        assert_eq!(entry.title, "Test Title");
        assert_eq!(entry.description, "Test Description");
    }

    #[test]
    fn get_failures_collapse_to_retrieval_failed() {
        let service = scripted();
        let missing = service.get("invalid").unwrap_err();
        let corrupt = service.get("corrupt").unwrap_err();

        assert!(matches!(missing, ServiceError::RetrievalFailed(StoreError::NotFound(_))));
        assert!(matches!(corrupt, ServiceError::RetrievalFailed(StoreError::Corrupt { .. })));
        assert_eq!(missing.to_string(), corrupt.to_string());
    }

    // -----------------------------------------------------------------------
    // create
    // -----------------------------------------------------------------------

    #[test]
    fn create_valid_entry() {
        let service = scripted();
        let entry = service.create("Test Title", "Test Description").unwrap();
        assert!(EntryId::is_canonical(&entry.id));
        assert!(!entry.done);
        assert_eq!(entry.title, "Test Title");
        assert_eq!(entry.description, "Test Description");

        let saved = service.repository().saved.lock().unwrap();
        assert_eq!(saved.as_slice(), &[entry.clone()]);
    }

    #[test]
    fn create_short_title_is_validation_failure() {
        let service = scripted();
        let err = service.create("te", "x").unwrap_err();
        assert!(matches!(err, ServiceError::ValidationFailed(_)));
        assert!(service.repository().saved.lock().unwrap().is_empty());
    }

    #[test]
    fn create_repository_failure_is_persist_failed() {
        let err = scripted().create("Error", "Error").unwrap_err();
        assert!(matches!(err, ServiceError::PersistFailed(StoreError::Unavailable(_))));
    }

    #[test]
    fn create_assigns_distinct_ids() {
        let service = scripted();
        let a = service.create("Same", "Same").unwrap();
        let b = service.create("Same", "Same").unwrap();
        assert_ne!(a.id, b.id);
    }

    // -----------------------------------------------------------------------
    // update / delete
    // -----------------------------------------------------------------------

    #[test]
    fn update_passes_entry_through() {
        let service = scripted();
        let entry = Entry::new(KNOWN_ID, "Test Title", "Test Description");
        service.update(KNOWN_ID, &entry).unwrap();

        let updated = service.repository().updated.lock().unwrap();
        assert_eq!(updated.as_slice(), &[(KNOWN_ID.to_string(), entry.clone())]);
    }

    #[test]
    fn update_does_not_repin_id_or_validate() {
        let service = scripted();
        let entry = Entry::new("different", "", "");
        service.update(KNOWN_ID, &entry).unwrap();

        let updated = service.repository().updated.lock().unwrap();
        assert_eq!(updated[0].1.id, "different");
        assert_eq!(updated[0].1.title, "");
    }

    #[test]
    fn update_failure_is_update_failed() {
        let entry = Entry::new("invalid", "Test Title", "Test Description");
        let err = scripted().update("invalid", &entry).unwrap_err();
        assert!(matches!(err, ServiceError::UpdateFailed(StoreError::NotFound(_))));
    }

    #[test]
    fn delete_ok_and_failure() {
        let service = scripted();
        service.delete("154b07a0-76bd-4f85-83a5-5090cbf46552").unwrap();
        let err = service.delete("invalid").unwrap_err();
        assert!(matches!(err, ServiceError::DeleteFailed(StoreError::InvalidKey)));
    }

    // -----------------------------------------------------------------------
    // Against the in-memory repository
    // -----------------------------------------------------------------------

    #[test]
    fn create_then_get_round_trip() {
        let service = TodoService::new(InMemoryEntryRepository::new());
        let created = service.create("Test Title", "Test Description").unwrap();
        let fetched = service.get(&created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn full_lifecycle() {
        let service = TodoService::new(InMemoryEntryRepository::new());
        let created = service.create("Write report", "quarterly").unwrap();

        let mut changed = created.clone();
        changed.done = true;
        changed.description = "done early".into();
        service.update(&created.id, &changed).unwrap();
        assert_eq!(service.get(&created.id).unwrap(), changed);

        service.delete(&created.id).unwrap();
        assert!(matches!(
            service.get(&created.id),
            Err(ServiceError::RetrievalFailed(StoreError::NotFound(_)))
        ));
        // Deleting again is still fine.
        service.delete(&created.id).unwrap();
    }

    #[test]
    fn update_unknown_id_fails() {
        let service = TodoService::new(InMemoryEntryRepository::new());
        let entry = Entry::new("nope", "Title", "");
        assert!(matches!(
            service.update("nope", &entry),
            Err(ServiceError::UpdateFailed(StoreError::NotFound(_)))
        ));
    }

    #[test]
    fn delete_empty_id_fails() {
        let service = TodoService::new(InMemoryEntryRepository::new());
        assert!(matches!(
            service.delete(""),
            Err(ServiceError::DeleteFailed(StoreError::InvalidKey))
        ));
    }

    #[test]
    fn shared_service_through_arc() {
        use std::sync::Arc;

        let service: Arc<dyn EntryService> =
            Arc::new(TodoService::new(InMemoryEntryRepository::new()));
        let created = service.create("Shared", "").unwrap();
        assert_eq!(service.get(&created.id).unwrap().title, "Shared");
    }
}
