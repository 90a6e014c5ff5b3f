//! QuestionStore implementation for PgStorage.

use async_trait::async_trait;
use sqlx::Row;
use trivia_core::{NewQuestion, Question};

use super::{PgStorage, QUESTION_COLUMNS, escape_like, row_to_question};
use crate::error::StorageError;
use crate::traits::QuestionStore;

#[async_trait]
impl QuestionStore for PgStorage {
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        let rows = sqlx::query(&format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_question).collect()
    }

    async fn get_question(&self, id: i64) -> Result<Option<Question>, StorageError> {
        let row = sqlx::query(&format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_question(&r)).transpose()
    }

    async fn questions_by_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<Question>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = $1 ORDER BY id"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_question).collect()
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StorageError> {
        let pattern = format!("%{}%", escape_like(term));
        let rows = sqlx::query(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE question ILIKE $1 ORDER BY id"
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_question).collect()
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<Question, StorageError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO questions (question, answer, difficulty, category)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.difficulty)
        .bind(question.category)
        .fetch_one(&self.pool)
        .await?;
        tracing::debug!(id, category = question.category, "question inserted");
        Ok(question.clone().with_id(id))
    }

    async fn delete_question(&self, id: i64) -> Result<bool, StorageError> {
        let result =
            sqlx::query("DELETE FROM questions WHERE id = $1").bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_questions(&self) -> Result<usize, StorageError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM questions")
            .fetch_one(&self.pool)
            .await?;
        let total: i64 = row.try_get("total")?;
        Ok(usize::try_from(total).unwrap_or(0))
    }
}
