use async_trait::async_trait;
use futures::stream::BoxStream;

use giftbook_core::gifts::{Gift, GiftRepositoryTrait};
use giftbook_core::{AssignedKey, Result, UserScope};

use crate::coordinator::CompositeWriter;
use crate::gifts::model::GIFT_IMAGE_CATEGORY;
use crate::record::KeyedRecord;

/// Gift repository; image-bearing writes are routed through the composite
/// writer so the upload/record sequencing and its failure states apply.
pub struct GiftRepository {
    writer: CompositeWriter,
}

impl GiftRepository {
    pub fn new(writer: CompositeWriter) -> Self {
        Self { writer }
    }
}

#[async_trait]
impl GiftRepositoryTrait for GiftRepository {
    async fn load_gifts(&self, scope: &UserScope) -> Result<Vec<Gift>> {
        self.writer.records().list_all(scope).await
    }

    async fn load_gifts_for_friend(
        &self,
        scope: &UserScope,
        friend_key: &str,
    ) -> Result<Vec<Gift>> {
        let gifts = self.load_gifts(scope).await?;
        Ok(gifts
            .into_iter()
            .filter(|gift| gift.friend_key == friend_key)
            .collect())
    }

    fn gift_snapshots(&self, scope: &UserScope) -> BoxStream<'static, Result<Vec<Gift>>> {
        self.writer.records().snapshots(scope.clone())
    }

    async fn insert_gift(
        &self,
        scope: &UserScope,
        gift: Gift,
        image: Option<Vec<u8>>,
    ) -> Result<AssignedKey> {
        match image {
            Some(bytes) => {
                self.writer
                    .create_with_asset(scope, gift, GIFT_IMAGE_CATEGORY, bytes, None)
                    .await
            }
            None => self.writer.records().insert(scope, &gift).await,
        }
    }

    async fn update_gift(
        &self,
        scope: &UserScope,
        key: &str,
        gift: Gift,
        new_image: Option<Vec<u8>>,
    ) -> Result<()> {
        match new_image {
            Some(bytes) => {
                self.writer
                    .update_with_asset(scope, key, gift, GIFT_IMAGE_CATEGORY, bytes, None)
                    .await
            }
            None => self.writer.records().update(scope, key, &gift).await,
        }
    }

    async fn delete_gift(
        &self,
        scope: &UserScope,
        key: &str,
        image_path: Option<&str>,
    ) -> Result<()> {
        match image_path {
            Some(path) => {
                self.writer
                    .delete_with_asset(Gift::COLLECTION, scope, key, path, None)
                    .await
            }
            None => self.writer.records().delete(Gift::COLLECTION, scope, key).await,
        }
    }

    async fn repair_gift_key(&self, scope: &UserScope, key: &str) -> Result<()> {
        self.writer
            .records()
            .repair_key(Gift::COLLECTION, scope, key)
            .await
    }
}
