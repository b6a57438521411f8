//! Keyed entry storage for the to-do service.
//!
//! Entries are stored as opaque serialized payloads keyed by their identity
//! string. The store knows nothing about field rules such as title length;
//! those belong to the service layer.
//!
//! # Storage Backends
//!
//! All backends implement the [`EntryRepository`] trait:
//!
//! - [`InMemoryEntryRepository`] -- `HashMap`-based store living as long as
//!   the process
//!
//! # Design Rules
//!
//! 1. Every stored payload is keyed by a non-empty identity.
//! 2. `save` overwrites unconditionally (last write wins).
//! 3. `delete` is idempotent; only an empty key is an error.
//! 4. `update` replaces the whole payload and requires the key to exist.
//! 5. Reads return deserialized copies, never references into the store.
//! 6. An unreadable payload is reported as [`StoreError::Corrupt`], never a panic.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryEntryRepository;
pub use traits::EntryRepository;
