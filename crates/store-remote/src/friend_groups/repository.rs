use async_trait::async_trait;

use giftbook_core::friend_groups::{FriendGroup, FriendGroupRepositoryTrait};
use giftbook_core::{AssignedKey, Result, UserScope};

use crate::client::CollectionClient;
use crate::record::KeyedRecord;

pub struct FriendGroupRepository {
    client: CollectionClient,
}

impl FriendGroupRepository {
    pub fn new(client: CollectionClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FriendGroupRepositoryTrait for FriendGroupRepository {
    async fn load_groups(&self, scope: &UserScope) -> Result<Vec<FriendGroup>> {
        self.client.list_all(scope).await
    }

    async fn insert_group(&self, scope: &UserScope, group: FriendGroup) -> Result<AssignedKey> {
        self.client.insert(scope, &group).await
    }

    async fn update_group(&self, scope: &UserScope, key: &str, group: FriendGroup) -> Result<()> {
        self.client.update(scope, key, &group).await
    }

    async fn delete_group(&self, scope: &UserScope, key: &str) -> Result<()> {
        self.client.delete(FriendGroup::COLLECTION, scope, key).await
    }

    async fn repair_group_key(&self, scope: &UserScope, key: &str) -> Result<()> {
        self.client
            .repair_key(FriendGroup::COLLECTION, scope, key)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::{null_sentinel, respond, start_mock_server};

    fn scope() -> UserScope {
        UserScope::new("user1").expect("scope")
    }

    #[tokio::test]
    async fn inserted_group_round_trips_with_its_assigned_key() {
        let (base_url, captured, server) = start_mock_server(vec![
            // insert into an empty collection, then the reconciliation patch
            respond(200, r#"{"name":"-NabcXYZ"}"#),
            null_sentinel(),
            // follow-up list
            respond(
                200,
                r#"{"-NabcXYZ":{"key":"-NabcXYZ","name":"Alice","color":"D9D9D9"}}"#,
            ),
        ])
        .await;

        let repo = FriendGroupRepository::new(CollectionClient::new(&base_url));
        let key = repo
            .insert_group(&scope(), FriendGroup::with_color("Alice", "D9D9D9"))
            .await
            .expect("insert");
        assert_eq!(key.as_str(), "-NabcXYZ");

        let groups = repo.load_groups(&scope()).await.expect("list");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, "-NabcXYZ");
        assert_eq!(groups[0].name, "Alice");
        assert_eq!(groups[0].color, "D9D9D9");

        let requests = captured.lock().await.clone();
        assert_eq!(requests[0].body, r#"{"name":"Alice","color":"D9D9D9"}"#);

        server.abort();
    }

    #[tokio::test]
    async fn deleted_group_never_resurrects_in_reads() {
        let (base_url, _captured, server) = start_mock_server(vec![
            null_sentinel(), // confirmed delete
            null_sentinel(), // subsequent empty read
        ])
        .await;

        let repo = FriendGroupRepository::new(CollectionClient::new(&base_url));
        repo.delete_group(&scope(), "-NabcXYZ").await.expect("delete");

        let groups = repo.load_groups(&scope()).await.expect("list");
        assert!(groups.iter().all(|g| g.key != "-NabcXYZ"));

        server.abort();
    }
}
