//! Storage layer for the trivia API.
//!
//! PostgreSQL via sqlx, plus an in-process backend behind the `memory`
//! feature. Callers program against the [`CategoryStore`] and
//! [`QuestionStore`] traits through [`StorageBackend`].

mod backend;
pub mod error;
#[cfg(any(test, feature = "memory"))]
mod memory;
mod pg_migrations;
mod pg_storage;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
#[cfg(any(test, feature = "memory"))]
pub use memory::MemoryStorage;
pub use pg_migrations::run_pg_migrations;
pub use pg_storage::PgStorage;
pub use traits::{CategoryStore, QuestionStore};
