//! Gift category model and repository contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::scope::{AssignedKey, UserScope};

/// Category seeded for a user whose collection is still empty.
pub const DEFAULT_CATEGORY_NAME: &str = "General";

/// A label gifts are filed under, soft-referenced by `Gift::category_key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftCategory {
    /// Store-assigned key; empty until the category has been persisted.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    pub name: String,
}

impl GiftCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            key: String::new(),
            name: name.into(),
        }
    }
}

impl Default for GiftCategory {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY_NAME)
    }
}

/// Store operations for the gift-category collection.
#[async_trait]
pub trait GiftCategoryRepositoryTrait: Send + Sync {
    async fn load_categories(&self, scope: &UserScope) -> Result<Vec<GiftCategory>>;

    async fn insert_category(&self, scope: &UserScope, category: GiftCategory)
        -> Result<AssignedKey>;

    async fn update_category(
        &self,
        scope: &UserScope,
        key: &str,
        category: GiftCategory,
    ) -> Result<()>;

    async fn delete_category(&self, scope: &UserScope, key: &str) -> Result<()>;

    async fn repair_category_key(&self, scope: &UserScope, key: &str) -> Result<()>;

    /// Seed the default category when the user's collection is empty.
    /// Returns the assigned key when a category was inserted.
    async fn ensure_default_category(&self, scope: &UserScope) -> Result<Option<AssignedKey>>;
}
