use std::sync::Arc;

use trivia_core::Category;
use trivia_storage::{CategoryStore, StorageBackend};

use crate::ServiceError;

pub struct CategoryService {
    storage: Arc<StorageBackend>,
}

impl CategoryService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, ServiceError> {
        Ok(self.storage.list_categories().await?)
    }

    pub async fn get_category(&self, id: i64) -> Result<Option<Category>, ServiceError> {
        Ok(self.storage.get_category(id).await?)
    }
}
