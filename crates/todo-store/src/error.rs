/// Errors from entry repository operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An empty identifier was supplied to a keyed operation.
    #[error("entry id cannot be empty")]
    InvalidKey,

    /// No entry is stored under the requested id.
    #[error("entry not found: {0}")]
    NotFound(String),

    /// The stored payload could not be decoded.
    #[error("corrupt entry {id}: {reason}")]
    Corrupt { id: String, reason: String },

    /// The entry could not be encoded for storage.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The backend cannot serve requests (e.g. a poisoned lock).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
