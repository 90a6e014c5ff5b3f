//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by table.

mod categories;
mod questions;

use std::time::Duration;

use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use trivia_core::{Category, PG_POOL_IDLE_TIMEOUT_SECS, PoolSettings, Question};

use crate::error::StorageError;

use super::pg_migrations::run_pg_migrations;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connects with pool sizing from the environment and applies migrations.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        Self::with_settings(database_url, PoolSettings::from_env()).await
    }

    pub async fn with_settings(
        database_url: &str,
        settings: PoolSettings,
    ) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!(max_connections = settings.max_connections, "PgStorage initialized");
        Ok(Self { pool })
    }
}

pub(crate) const CATEGORY_COLUMNS: &str = "id, type";

pub(crate) const QUESTION_COLUMNS: &str = "id, question, answer, difficulty, category";

pub(crate) fn row_to_category(row: &PgRow) -> Result<Category, StorageError> {
    Ok(Category { id: row.try_get("id")?, kind: row.try_get("type")? })
}

pub(crate) fn row_to_question(row: &PgRow) -> Result<Question, StorageError> {
    Ok(Question {
        id: row.try_get("id")?,
        question: row.try_get("question")?,
        answer: row.try_get("answer")?,
        difficulty: row.try_get("difficulty")?,
        category: row.try_get("category")?,
    })
}

/// Escape LIKE wildcards so the search term matches literally.
pub(crate) fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}
