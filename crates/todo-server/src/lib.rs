//! HTTP adapter for the to-do service.
//!
//! Exposes an [`EntryService`](todo_service::EntryService) as JSON over
//! REST-style routes keyed by entry id:
//!
//! - `GET /api/entry/:id`
//! - `POST /api/entry`
//! - `PATCH /api/entry/:id`
//! - `DELETE /api/entry/:id`

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::{CreateEntryRequest, EntryPatch, ErrorResponse, SharedService};
pub use server::TodoServer;
