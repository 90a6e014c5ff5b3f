use std::sync::Arc;

use trivia_core::{Category, NewQuestion, PageRequest, Question, paginate};
use trivia_storage::{CategoryStore, QuestionStore, StorageBackend};

use crate::ServiceError;

/// One page of a question listing plus the size of the full result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

impl QuestionPage {
    fn from_selection(page: PageRequest, selection: &[Question]) -> Self {
        Self {
            questions: paginate(page, selection).to_vec(),
            total_questions: selection.len(),
        }
    }
}

/// Result of a successful insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedQuestion {
    pub question: Question,
    pub total_questions: usize,
}

pub struct QuestionService {
    storage: Arc<StorageBackend>,
}

impl QuestionService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn list_questions(&self, page: PageRequest) -> Result<QuestionPage, ServiceError> {
        let selection = self.storage.list_questions().await?;
        Ok(QuestionPage::from_selection(page, &selection))
    }

    pub async fn get_question(&self, id: i64) -> Result<Option<Question>, ServiceError> {
        Ok(self.storage.get_question(id).await?)
    }

    /// Questions of one category. An unknown category is `NotFound`.
    pub async fn questions_by_category(
        &self,
        category_id: i64,
        page: PageRequest,
    ) -> Result<(Category, QuestionPage), ServiceError> {
        let category = self
            .storage
            .get_category(category_id)
            .await?
            .ok_or(ServiceError::NotFound { entity: "category", id: category_id })?;
        let selection = self.storage.questions_by_category(category_id).await?;
        Ok((category, QuestionPage::from_selection(page, &selection)))
    }

    /// Case-insensitive substring search over question text.
    pub async fn search_questions(
        &self,
        term: &str,
        page: PageRequest,
    ) -> Result<QuestionPage, ServiceError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(ServiceError::InvalidInput("search term must not be empty".to_owned()));
        }
        let selection = self.storage.search_questions(term).await?;
        tracing::debug!(term, matches = selection.len(), "question search");
        Ok(QuestionPage::from_selection(page, &selection))
    }

    pub async fn create_question(
        &self,
        question: NewQuestion,
    ) -> Result<CreatedQuestion, ServiceError> {
        let question = self.storage.insert_question(&question).await?;
        let total_questions = self.storage.count_questions().await?;
        tracing::info!(id = question.id, category = question.category, "question created");
        Ok(CreatedQuestion { question, total_questions })
    }

    /// Deletes a question and returns the remaining count.
    ///
    /// Existence is checked first so a missing id is `NotFound` rather than a
    /// silent no-op.
    pub async fn delete_question(&self, id: i64) -> Result<usize, ServiceError> {
        if self.storage.get_question(id).await?.is_none() {
            return Err(ServiceError::NotFound { entity: "question", id });
        }
        if !self.storage.delete_question(id).await? {
            // Removed concurrently between the check and the delete.
            return Err(ServiceError::NotFound { entity: "question", id });
        }
        tracing::info!(id, "question deleted");
        Ok(self.storage.count_questions().await?)
    }
}
