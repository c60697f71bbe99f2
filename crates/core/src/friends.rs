//! Friend model and repository contract.

use async_trait::async_trait;
use chrono::NaiveDate;
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::scope::{AssignedKey, UserScope};

/// A person gifts are exchanged with.
///
/// `group_key` is a soft reference; deleting the group does not cascade, so
/// readers must treat an unresolved key as "ungrouped".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    /// Store-assigned key; empty until the friend has been persisted.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub memo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_key: Option<String>,
}

impl Friend {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            key: String::new(),
            name: name.into(),
            phone: String::new(),
            birthday: None,
            memo: String::new(),
            group_key: None,
        }
    }
}

/// Store operations for the friend collection.
#[async_trait]
pub trait FriendRepositoryTrait: Send + Sync {
    async fn load_friends(&self, scope: &UserScope) -> Result<Vec<Friend>>;

    /// Lazy, restartable sequence of full-collection snapshots; each poll
    /// performs a fresh read.
    fn friend_snapshots(&self, scope: &UserScope) -> BoxStream<'static, Result<Vec<Friend>>>;

    async fn insert_friend(&self, scope: &UserScope, friend: Friend) -> Result<AssignedKey>;

    async fn update_friend(&self, scope: &UserScope, key: &str, friend: Friend) -> Result<()>;

    async fn delete_friend(&self, scope: &UserScope, key: &str) -> Result<()>;

    async fn repair_friend_key(&self, scope: &UserScope, key: &str) -> Result<()>;
}
