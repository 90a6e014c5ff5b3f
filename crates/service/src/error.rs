//! Typed error enum for the service layer.

use thiserror::Error;
use trivia_core::CoreError;
use trivia_storage::StorageError;

/// Service-layer error unifying storage failures and domain rejections.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB error, constraint violation, ...).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// The addressed entity does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// Caller provided invalid input (blank text, malformed data).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Storage(StorageError::NotFound { .. }))
    }
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(msg) => Self::InvalidInput(msg),
        }
    }
}
