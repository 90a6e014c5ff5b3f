use std::collections::HashSet;
use std::sync::Arc;

use trivia_core::{CategoryScope, QuizCategory, QuizSelection, select_next};
use trivia_storage::{QuestionStore, StorageBackend};

use crate::ServiceError;

pub struct QuizService {
    storage: Arc<StorageBackend>,
}

impl QuizService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    /// Draws a random question the player has not seen yet.
    ///
    /// The pool is every question for [`CategoryScope::All`], otherwise the
    /// questions of that category; an unknown category simply has an empty pool.
    pub async fn next_question(
        &self,
        previous_ids: &HashSet<i64>,
        quiz_category: QuizCategory,
    ) -> Result<QuizSelection, ServiceError> {
        let pool = match quiz_category.scope() {
            CategoryScope::All => self.storage.list_questions().await?,
            CategoryScope::Only(id) => self.storage.questions_by_category(id).await?,
        };
        let selection = select_next(previous_ids, &pool, &mut rand::thread_rng());
        if selection == QuizSelection::Exhausted {
            tracing::debug!(
                category = quiz_category.id,
                seen = previous_ids.len(),
                "quiz pool exhausted"
            );
        }
        Ok(selection)
    }
}
