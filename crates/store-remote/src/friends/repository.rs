use async_trait::async_trait;
use futures::stream::BoxStream;

use giftbook_core::friends::{Friend, FriendRepositoryTrait};
use giftbook_core::{AssignedKey, Result, UserScope};

use crate::client::CollectionClient;
use crate::record::KeyedRecord;

pub struct FriendRepository {
    client: CollectionClient,
}

impl FriendRepository {
    pub fn new(client: CollectionClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FriendRepositoryTrait for FriendRepository {
    async fn load_friends(&self, scope: &UserScope) -> Result<Vec<Friend>> {
        self.client.list_all(scope).await
    }

    fn friend_snapshots(&self, scope: &UserScope) -> BoxStream<'static, Result<Vec<Friend>>> {
        self.client.snapshots(scope.clone())
    }

    async fn insert_friend(&self, scope: &UserScope, friend: Friend) -> Result<AssignedKey> {
        self.client.insert(scope, &friend).await
    }

    async fn update_friend(&self, scope: &UserScope, key: &str, friend: Friend) -> Result<()> {
        self.client.update(scope, key, &friend).await
    }

    async fn delete_friend(&self, scope: &UserScope, key: &str) -> Result<()> {
        self.client.delete(Friend::COLLECTION, scope, key).await
    }

    async fn repair_friend_key(&self, scope: &UserScope, key: &str) -> Result<()> {
        self.client.repair_key(Friend::COLLECTION, scope, key).await
    }
}
