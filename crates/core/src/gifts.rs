//! Gift model and repository contract.

use async_trait::async_trait;
use chrono::NaiveDate;
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::gift_categories::GiftCategory;
use crate::scope::{AssignedKey, UserScope};

/// A gift exchanged with exactly one friend.
///
/// `category_key` is a soft reference (dangling means "uncategorized") and
/// `image_path` points into object storage. The gift exclusively owns the
/// path string; the referenced bytes live in the blob store and must be
/// deleted by whoever deletes or replaces the gift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gift {
    /// Store-assigned key; empty until the gift has been persisted.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    pub friend_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_key: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub memo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

impl Gift {
    pub fn new(friend_key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: String::new(),
            friend_key: friend_key.into(),
            category_key: None,
            title: title.into(),
            date: None,
            memo: String::new(),
            image_path: None,
        }
    }

    /// Resolve the soft category reference against a loaded category list.
    /// A dangling or absent reference means the gift is uncategorized.
    pub fn category_in<'a>(&self, categories: &'a [GiftCategory]) -> Option<&'a GiftCategory> {
        let key = self.category_key.as_deref()?;
        categories.iter().find(|category| category.key == key)
    }
}

/// Store operations for the gift collection, including its image assets.
#[async_trait]
pub trait GiftRepositoryTrait: Send + Sync {
    async fn load_gifts(&self, scope: &UserScope) -> Result<Vec<Gift>>;

    /// Gifts recorded for one friend; a full read filtered client-side, since
    /// the store offers no partial fetch.
    async fn load_gifts_for_friend(&self, scope: &UserScope, friend_key: &str)
        -> Result<Vec<Gift>>;

    /// Lazy, restartable sequence of full-collection snapshots; each poll
    /// performs a fresh read.
    fn gift_snapshots(&self, scope: &UserScope) -> BoxStream<'static, Result<Vec<Gift>>>;

    /// Insert a gift, uploading `image` first when one is attached. The
    /// stored image path is patched into the record before it is written.
    async fn insert_gift(
        &self,
        scope: &UserScope,
        gift: Gift,
        image: Option<Vec<u8>>,
    ) -> Result<AssignedKey>;

    /// Update a gift. When `new_image` is set, the replacement is uploaded
    /// under a fresh path, the record is pointed at it, and the gift's
    /// previous path is deleted afterwards (non-fatally).
    async fn update_gift(
        &self,
        scope: &UserScope,
        key: &str,
        gift: Gift,
        new_image: Option<Vec<u8>>,
    ) -> Result<()>;

    /// Delete a gift, removing its image first when `image_path` is given.
    /// Asset deletion failure leaves the record intact.
    async fn delete_gift(
        &self,
        scope: &UserScope,
        key: &str,
        image_path: Option<&str>,
    ) -> Result<()>;

    async fn repair_gift_key(&self, scope: &UserScope, key: &str) -> Result<()>;
}
