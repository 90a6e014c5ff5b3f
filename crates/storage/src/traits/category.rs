use async_trait::async_trait;
use trivia_core::Category;

use crate::error::StorageError;

/// Read-only access to category reference data.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// All categories ordered by id.
    async fn list_categories(&self) -> Result<Vec<Category>, StorageError>;

    /// Get category by ID.
    async fn get_category(&self, id: i64) -> Result<Option<Category>, StorageError>;
}
