use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// A stored trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    /// References `Category::id`.
    pub category: i64,
}

/// Validated insert payload for a question that has no id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i64,
}

impl NewQuestion {
    /// Builds an insert payload. Question and answer text are trimmed and must not be blank.
    ///
    /// Category existence is left to the store.
    pub fn new(question: &str, answer: &str, difficulty: i32, category: i64) -> Result<Self> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() {
            return Err(CoreError::InvalidInput("question text must not be empty".to_owned()));
        }
        if answer.is_empty() {
            return Err(CoreError::InvalidInput("answer must not be empty".to_owned()));
        }
        Ok(Self {
            question: question.to_owned(),
            answer: answer.to_owned(),
            difficulty,
            category,
        })
    }

    #[must_use]
    pub fn with_id(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            difficulty: self.difficulty,
            category: self.category,
        }
    }
}
