//! Friend group model and repository contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::scope::{AssignedKey, UserScope};

/// Hex color assigned to a group when the user picks none.
pub const DEFAULT_GROUP_COLOR: &str = "D9D9D9";

/// A named grouping of friends, soft-referenced by `Friend::group_key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendGroup {
    /// Store-assigned key; empty until the group has been persisted.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_GROUP_COLOR.to_string()
}

impl FriendGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            key: String::new(),
            name: name.into(),
            color: default_color(),
        }
    }

    pub fn with_color(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            key: String::new(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// The group color as a packed `0xRRGGBB` value, or `None` when the
    /// stored string is not six hex digits.
    pub fn rgb(&self) -> Option<u32> {
        if self.color.len() != 6 {
            return None;
        }
        u32::from_str_radix(&self.color, 16).ok()
    }

    /// Resolve a friend's soft group reference against a loaded group list.
    /// A dangling or absent reference means the friend is ungrouped.
    pub fn resolve<'a>(
        groups: &'a [FriendGroup],
        group_key: Option<&str>,
    ) -> Option<&'a FriendGroup> {
        let key = group_key?;
        groups.iter().find(|group| group.key == key)
    }
}

/// Store operations for the friend-group collection.
#[async_trait]
pub trait FriendGroupRepositoryTrait: Send + Sync {
    async fn load_groups(&self, scope: &UserScope) -> Result<Vec<FriendGroup>>;

    async fn insert_group(&self, scope: &UserScope, group: FriendGroup) -> Result<AssignedKey>;

    async fn update_group(&self, scope: &UserScope, key: &str, group: FriendGroup) -> Result<()>;

    async fn delete_group(&self, scope: &UserScope, key: &str) -> Result<()>;

    /// Re-issue the key-reconciliation patch for a group left in the
    /// partially-persisted state.
    async fn repair_group_key(&self, scope: &UserScope, key: &str) -> Result<()>;
}
