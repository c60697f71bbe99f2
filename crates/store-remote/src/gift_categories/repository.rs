use async_trait::async_trait;

use giftbook_core::gift_categories::{GiftCategory, GiftCategoryRepositoryTrait};
use giftbook_core::{AssignedKey, Result, UserScope};

use crate::client::CollectionClient;
use crate::record::KeyedRecord;

pub struct GiftCategoryRepository {
    client: CollectionClient,
}

impl GiftCategoryRepository {
    pub fn new(client: CollectionClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GiftCategoryRepositoryTrait for GiftCategoryRepository {
    async fn load_categories(&self, scope: &UserScope) -> Result<Vec<GiftCategory>> {
        self.client.list_all(scope).await
    }

    async fn insert_category(
        &self,
        scope: &UserScope,
        category: GiftCategory,
    ) -> Result<AssignedKey> {
        self.client.insert(scope, &category).await
    }

    async fn update_category(
        &self,
        scope: &UserScope,
        key: &str,
        category: GiftCategory,
    ) -> Result<()> {
        self.client.update(scope, key, &category).await
    }

    async fn delete_category(&self, scope: &UserScope, key: &str) -> Result<()> {
        self.client
            .delete(GiftCategory::COLLECTION, scope, key)
            .await
    }

    async fn repair_category_key(&self, scope: &UserScope, key: &str) -> Result<()> {
        self.client
            .repair_key(GiftCategory::COLLECTION, scope, key)
            .await
    }

    async fn ensure_default_category(&self, scope: &UserScope) -> Result<Option<AssignedKey>> {
        let existing: Vec<GiftCategory> = self.client.list_all(scope).await?;
        if !existing.is_empty() {
            return Ok(None);
        }
        let key = self.client.insert(scope, &GiftCategory::default()).await?;
        Ok(Some(key))
    }
}
