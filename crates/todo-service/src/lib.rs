//! Business rules for the to-do service.
//!
//! [`TodoService`] sits between the HTTP adapter and an [`EntryRepository`].
//! It validates titles, assigns identities, and re-wraps every repository
//! failure into a [`ServiceError`] whose caller-facing kind says which
//! operation failed, not why.

pub mod error;
pub mod service;

pub use error::{ServiceError, ServiceResult};
pub use service::{EntryService, TodoService};

// Re-export key types
pub use todo_store::{EntryRepository, InMemoryEntryRepository, StoreError};
pub use todo_types::Entry;
