//! Typed error enum for the storage layer.
//!
//! Lets callers match on specific failure modes (missing row, rejected
//! constraint, transient DB error) instead of downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for expected-present entity.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// The store refused the write (foreign key, not-null or check constraint).
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)))
    }

    /// Whether the store rejected the data itself rather than failing to run.
    pub fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }
}

/// SQLSTATE classes treated as data rejection rather than database failure.
const FOREIGN_KEY_VIOLATION: &str = "23503";
const NOT_NULL_VIOLATION: &str = "23502";
const CHECK_VIOLATION: &str = "23514";

/// Custom `From<sqlx::Error>`, not blanket `#[from]`.
///
/// - `RowNotFound` → `NotFound` (generic; callers remap with entity context)
/// - SQLSTATE 23503 / 23502 / 23514 → `Constraint`
/// - Everything else → `Database`
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound { entity: "row", id: "unknown".into() },
            sqlx::Error::Database(db_err)
                if db_err.code().is_some_and(|c| {
                    c == FOREIGN_KEY_VIOLATION || c == NOT_NULL_VIOLATION || c == CHECK_VIOLATION
                }) =>
            {
                Self::Constraint(db_err.message().to_owned())
            },
            _ => Self::Database(err),
        }
    }
}
