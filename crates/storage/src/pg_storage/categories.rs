//! CategoryStore implementation for PgStorage.

use async_trait::async_trait;
use trivia_core::Category;

use super::{CATEGORY_COLUMNS, PgStorage, row_to_category};
use crate::error::StorageError;
use crate::traits::CategoryStore;

#[async_trait]
impl CategoryStore for PgStorage {
    async fn list_categories(&self) -> Result<Vec<Category>, StorageError> {
        let rows = sqlx::query(&format!("SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_category).collect()
    }

    async fn get_category(&self, id: i64) -> Result<Option<Category>, StorageError> {
        let row = sqlx::query(&format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_category(&r)).transpose()
    }
}
