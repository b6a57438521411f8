//! Foundation types for the to-do service.
//!
//! This crate provides the domain value object and the identity and field
//! rules shared by every other crate in the workspace.
//!
//! # Key Types
//!
//! - [`Entry`] — A to-do item: identity, title, description, completion flag
//! - [`EntryId`] — Generator and checks for entry identity strings
//! - [`TypeError`] — Field rule violations

pub mod entry;
pub mod error;
pub mod identity;

pub use entry::{validate_title, Entry, MIN_TITLE_CHARS};
pub use error::TypeError;
pub use identity::EntryId;
