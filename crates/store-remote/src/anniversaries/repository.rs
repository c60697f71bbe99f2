use async_trait::async_trait;
use chrono::NaiveDate;

use giftbook_core::anniversaries::{
    upcoming_within, Anniversary, AnniversaryRepositoryTrait,
};
use giftbook_core::{AssignedKey, Result, UserScope};

use crate::client::CollectionClient;
use crate::record::KeyedRecord;

pub struct AnniversaryRepository {
    client: CollectionClient,
}

impl AnniversaryRepository {
    pub fn new(client: CollectionClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AnniversaryRepositoryTrait for AnniversaryRepository {
    async fn load_anniversaries(&self, scope: &UserScope) -> Result<Vec<Anniversary>> {
        self.client.list_all(scope).await
    }

    async fn load_upcoming(
        &self,
        scope: &UserScope,
        today: NaiveDate,
        days: i64,
    ) -> Result<Vec<Anniversary>> {
        let anniversaries = self.load_anniversaries(scope).await?;
        Ok(upcoming_within(&anniversaries, today, days))
    }

    async fn insert_anniversary(
        &self,
        scope: &UserScope,
        anniversary: Anniversary,
    ) -> Result<AssignedKey> {
        self.client.insert(scope, &anniversary).await
    }

    async fn update_anniversary(
        &self,
        scope: &UserScope,
        key: &str,
        anniversary: Anniversary,
    ) -> Result<()> {
        self.client.update(scope, key, &anniversary).await
    }

    async fn delete_anniversary(&self, scope: &UserScope, key: &str) -> Result<()> {
        self.client
            .delete(Anniversary::COLLECTION, scope, key)
            .await
    }

    async fn repair_anniversary_key(&self, scope: &UserScope, key: &str) -> Result<()> {
        self.client
            .repair_key(Anniversary::COLLECTION, scope, key)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::{respond, start_mock_server};

    fn scope() -> UserScope {
        UserScope::new("user1").expect("scope")
    }

    #[tokio::test]
    async fn upcoming_filters_and_sorts_a_full_read() {
        let body = concat!(
            r#"{"-Na1":{"key":"-Na1","title":"Far","date":"2020-12-25"},"#,
            r#""-Na2":{"key":"-Na2","title":"Soon","date":"2020-05-20"}}"#
        );
        let (base_url, _captured, server) = start_mock_server(vec![respond(200, body)]).await;

        let repo = AnniversaryRepository::new(CollectionClient::new(&base_url));
        let today = NaiveDate::from_ymd_opt(2026, 5, 15).expect("date");
        let upcoming = repo
            .load_upcoming(&scope(), today, 30)
            .await
            .expect("upcoming");

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].title, "Soon");

        server.abort();
    }
}
