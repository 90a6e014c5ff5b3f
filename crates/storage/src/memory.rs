//! In-process backend with the same contract as `PgStorage`.
//!
//! Ids are assigned from a monotonic counter and never reused, and inserts
//! referencing an unknown category are rejected like the foreign key would.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use trivia_core::{Category, NewQuestion, Question};

use crate::error::StorageError;
use crate::traits::{CategoryStore, QuestionStore};

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    last_question_id: i64,
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a category. Categories have no API write path.
    pub async fn add_category(&self, category: Category) {
        self.tables.write().await.categories.insert(category.id, category);
    }
}

#[async_trait]
impl CategoryStore for MemoryStorage {
    async fn list_categories(&self) -> Result<Vec<Category>, StorageError> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: i64) -> Result<Option<Category>, StorageError> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }
}

#[async_trait]
impl QuestionStore for MemoryStorage {
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        Ok(self.tables.read().await.questions.values().cloned().collect())
    }

    async fn get_question(&self, id: i64) -> Result<Option<Question>, StorageError> {
        Ok(self.tables.read().await.questions.get(&id).cloned())
    }

    async fn questions_by_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<Question>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables.questions.values().filter(|q| q.category == category_id).cloned().collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StorageError> {
        let needle = term.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<Question, StorageError> {
        let mut tables = self.tables.write().await;
        if !tables.categories.contains_key(&question.category) {
            return Err(StorageError::Constraint(format!(
                "category {} does not exist",
                question.category
            )));
        }
        tables.last_question_id = tables.last_question_id.saturating_add(1);
        let stored = question.clone().with_id(tables.last_question_id);
        tables.questions.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete_question(&self, id: i64) -> Result<bool, StorageError> {
        Ok(self.tables.write().await.questions.remove(&id).is_some())
    }

    async fn count_questions(&self) -> Result<usize, StorageError> {
        Ok(self.tables.read().await.questions.len())
    }
}
