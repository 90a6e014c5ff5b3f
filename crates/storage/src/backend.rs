//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use trivia_core::{Category, NewQuestion, Question};

use crate::error::StorageError;
use crate::traits::{CategoryStore, QuestionStore};

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Postgres(s) => {
                <crate::pg_storage::PgStorage as $trait>::$method(s, $($arg),*).await
            },
            #[cfg(any(test, feature = "memory"))]
            StorageBackend::Memory(s) => {
                <crate::memory::MemoryStorage as $trait>::$method(s, $($arg),*).await
            },
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Postgres(crate::pg_storage::PgStorage),
    #[cfg(any(test, feature = "memory"))]
    Memory(crate::memory::MemoryStorage),
}

impl StorageBackend {
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url).await?))
    }

    #[cfg(any(test, feature = "memory"))]
    #[must_use]
    pub fn new_memory(storage: crate::memory::MemoryStorage) -> Self {
        Self::Memory(storage)
    }
}

// ── CategoryStore ────────────────────────────────────────────────

#[async_trait]
impl CategoryStore for StorageBackend {
    async fn list_categories(&self) -> Result<Vec<Category>, StorageError> {
        dispatch!(self, CategoryStore, list_categories())
    }

    async fn get_category(&self, id: i64) -> Result<Option<Category>, StorageError> {
        dispatch!(self, CategoryStore, get_category(id))
    }
}

// ── QuestionStore ────────────────────────────────────────────────

#[async_trait]
impl QuestionStore for StorageBackend {
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        dispatch!(self, QuestionStore, list_questions())
    }

    async fn get_question(&self, id: i64) -> Result<Option<Question>, StorageError> {
        dispatch!(self, QuestionStore, get_question(id))
    }

    async fn questions_by_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<Question>, StorageError> {
        dispatch!(self, QuestionStore, questions_by_category(category_id))
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StorageError> {
        dispatch!(self, QuestionStore, search_questions(term))
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<Question, StorageError> {
        dispatch!(self, QuestionStore, insert_question(question))
    }

    async fn delete_question(&self, id: i64) -> Result<bool, StorageError> {
        dispatch!(self, QuestionStore, delete_question(id))
    }

    async fn count_questions(&self) -> Result<usize, StorageError> {
        dispatch!(self, QuestionStore, count_questions())
    }
}
