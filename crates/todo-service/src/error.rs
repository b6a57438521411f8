use thiserror::Error;
use todo_store::StoreError;

/// Errors returned to callers of the service.
///
/// The wrapper variants keep the repository error only as their `source`;
/// the displayed message is the same whatever the underlying kind was, so a
/// caller cannot tell a missing entry from a corrupt one.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    ValidationFailed(String),

    #[error("failed to persist entry")]
    PersistFailed(#[source] StoreError),

    #[error("failed to retrieve entry")]
    RetrievalFailed(#[source] StoreError),

    #[error("failed to update entry")]
    UpdateFailed(#[source] StoreError),

    #[error("failed to delete entry")]
    DeleteFailed(#[source] StoreError),
}

impl ServiceError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationFailed(_) => "validation_failed",
            Self::PersistFailed(_) => "persist_failed",
            Self::RetrievalFailed(_) => "retrieval_failed",
            Self::UpdateFailed(_) => "update_failed",
            Self::DeleteFailed(_) => "delete_failed",
        }
    }

    /// The repository error behind a wrapper variant, for logging.
    pub fn store_cause(&self) -> Option<&StoreError> {
        match self {
            Self::ValidationFailed(_) => None,
            Self::PersistFailed(e)
            | Self::RetrievalFailed(e)
            | Self::UpdateFailed(e)
            | Self::DeleteFailed(e) => Some(e),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
