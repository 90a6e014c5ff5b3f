use async_trait::async_trait;
use trivia_core::{NewQuestion, Question};

use crate::error::StorageError;

/// Question CRUD. Every listing is ordered by id ascending.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// All questions.
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError>;

    /// Get question by ID.
    async fn get_question(&self, id: i64) -> Result<Option<Question>, StorageError>;

    /// Questions belonging to one category.
    async fn questions_by_category(&self, category_id: i64)
    -> Result<Vec<Question>, StorageError>;

    /// Case-insensitive substring match on the question text.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StorageError>;

    /// Insert a question and return it with its assigned id.
    async fn insert_question(&self, question: &NewQuestion) -> Result<Question, StorageError>;

    /// Delete question. Returns `true` if a row was deleted.
    async fn delete_question(&self, id: i64) -> Result<bool, StorageError>;

    /// Total number of stored questions.
    async fn count_questions(&self) -> Result<usize, StorageError>;
}
