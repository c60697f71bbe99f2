//! Keyed-collection store adapter.
//!
//! The backend is a path-addressed JSON store: each user-scoped collection is
//! one JSON object keyed by store-generated keys. The store signals "no
//! entries" (and a successful delete) with a fixed 4-byte `null` body rather
//! than an empty object, and it does not embed the key it generates on insert
//! into the record itself, so every insert is followed by a mandatory
//! key-reconciliation patch.

use std::time::Duration;

use futures::stream::{self, BoxStream, StreamExt};
use log::debug;
use serde::Deserialize;

use giftbook_core::{AssignedKey, Error, Result, UserScope};

use crate::record::{KeyPatch, KeyedRecord};

/// Default timeout for store requests. No retry policy is layered on top:
/// retrying a non-idempotent insert could create duplicate keyed entities,
/// so retries are left to callers.
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MAX_LOG_BODY_CHARS: usize = 512;
/// Byte length of the literal `null` body the store uses as its
/// empty/deleted sentinel.
const NULL_SENTINEL_LEN: u64 = 4;

/// Insert responses carry the generated key under `name`.
#[derive(Debug, Deserialize)]
struct InsertResponse {
    name: String,
}

/// Client for one keyed-collection database.
#[derive(Debug, Clone)]
pub struct CollectionClient {
    client: reqwest::Client,
    base_url: String,
}

impl CollectionClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self, collection: &str, scope: &UserScope) -> String {
        format!("{}/{}/{}.json", self.base_url, collection, scope.as_str())
    }

    fn entry_url(&self, collection: &str, scope: &UserScope, key: &str) -> String {
        format!(
            "{}/{}/{}/{}.json",
            self.base_url,
            collection,
            scope.as_str(),
            key
        )
    }

    fn log_response(status: reqwest::StatusCode, body: &str) {
        if status.is_success() {
            debug!("store response status: {}", status);
            return;
        }

        let mut preview = body.chars().take(MAX_LOG_BODY_CHARS).collect::<String>();
        if body.chars().count() > MAX_LOG_BODY_CHARS {
            preview.push_str("...");
        }
        debug!("store response error ({}): {}", status, preview);
    }

    fn is_null_sentinel(content_length: Option<u64>, body: &str) -> bool {
        content_length == Some(NULL_SENTINEL_LEN) || body == "null"
    }

    /// Full read of a collection, in the store's insertion order.
    ///
    /// The outer map key is stamped into each record; a partially-persisted
    /// entry (empty embedded key) still lists correctly under its outer key.
    pub async fn list_all<R: KeyedRecord>(&self, scope: &UserScope) -> Result<Vec<R>> {
        let url = self.collection_url(R::COLLECTION, scope);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(Error::transport)?;
        let status = response.status();
        let content_length = response.content_length();
        let body = response.text().await.map_err(Error::transport)?;
        Self::log_response(status, &body);

        if !status.is_success() {
            return Err(Error::remote_read(status.as_u16(), body));
        }
        if Self::is_null_sentinel(content_length, &body) {
            return Ok(Vec::new());
        }

        let entries: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&body)
            .map_err(|e| Error::malformed(format!("collection body is not a JSON object: {}", e)))?;
        let mut records = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let mut record: R = serde_json::from_value(value)
                .map_err(|e| Error::malformed(format!("entry '{}' failed to decode: {}", key, e)))?;
            record.set_key(&key);
            records.push(record);
        }
        Ok(records)
    }

    /// Insert a record and reconcile the generated key into it.
    ///
    /// The write and the follow-up patch are distinct store round-trips; when
    /// the write lands but the patch fails, the entry exists under its outer
    /// key with an unreliable embedded key field, reported as
    /// [`Error::PartiallyPersisted`]. [`CollectionClient::repair_key`]
    /// re-issues the patch.
    pub async fn insert<R: KeyedRecord>(
        &self,
        scope: &UserScope,
        record: &R,
    ) -> Result<AssignedKey> {
        let url = self.collection_url(R::COLLECTION, scope);
        debug!("inserting into {}", url);
        let response = self
            .client
            .post(&url)
            .json(record)
            .send()
            .await
            .map_err(Error::transport)?;
        let status = response.status();
        let body = response.text().await.map_err(Error::transport)?;
        Self::log_response(status, &body);

        if !status.is_success() {
            return Err(Error::remote_write(status.as_u16(), body));
        }
        let assigned: InsertResponse = serde_json::from_str(&body).map_err(|e| {
            Error::malformed(format!("insert response missing generated key: {}", e))
        })?;
        let key = AssignedKey::new(assigned.name);

        self.patch_key(R::COLLECTION, scope, key.as_str())
            .await
            .map_err(|err| Error::partially_persisted(key.as_str(), err.to_string()))?;
        Ok(key)
    }

    /// Overwrite the record at a known key.
    ///
    /// The store merges PATCH bodies field-wise, so the fields named by
    /// [`KeyedRecord::OPTIONAL_FIELDS`] that the serializer omitted are sent
    /// as explicit `null`; otherwise a cleared memo or soft reference would
    /// keep its stale stored value forever.
    pub async fn update<R: KeyedRecord>(
        &self,
        scope: &UserScope,
        key: &str,
        record: &R,
    ) -> Result<()> {
        let mut body = serde_json::to_value(record)
            .map_err(|e| Error::malformed(format!("record failed to serialize: {}", e)))?;
        if let Some(fields) = body.as_object_mut() {
            for field in R::OPTIONAL_FIELDS {
                if !fields.contains_key(*field) {
                    fields.insert((*field).to_string(), serde_json::Value::Null);
                }
            }
        }
        self.patch_fields(R::COLLECTION, scope, key, &body).await
    }

    /// Merge an arbitrary partial body at a known key.
    pub async fn patch_fields(
        &self,
        collection: &str,
        scope: &UserScope,
        key: &str,
        fields: &serde_json::Value,
    ) -> Result<()> {
        let url = self.entry_url(collection, scope, key);
        let response = self
            .client
            .patch(&url)
            .json(fields)
            .send()
            .await
            .map_err(Error::transport)?;
        let status = response.status();
        let body = response.text().await.map_err(Error::transport)?;
        Self::log_response(status, &body);

        if !status.is_success() {
            return Err(Error::remote_write(status.as_u16(), body));
        }
        Ok(())
    }

    /// Re-issue the key-reconciliation patch for an entry whose embedded key
    /// field is empty, given its outer collection key.
    pub async fn repair_key(&self, collection: &str, scope: &UserScope, key: &str) -> Result<()> {
        self.patch_key(collection, scope, key).await
    }

    async fn patch_key(&self, collection: &str, scope: &UserScope, key: &str) -> Result<()> {
        self.patch_fields(
            collection,
            scope,
            key,
            &serde_json::to_value(KeyPatch { key }).map_err(|e| Error::malformed(e.to_string()))?,
        )
        .await
    }

    /// Remove the entry at `key`.
    ///
    /// The store answers a successful delete with the 4-byte `null` sentinel;
    /// any other successful-status body is treated as "delete did not take
    /// effect" and reported as a failure. The store's response shapes are too
    /// inconsistent to assume otherwise.
    pub async fn delete(&self, collection: &str, scope: &UserScope, key: &str) -> Result<()> {
        let url = self.entry_url(collection, scope, key);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(Error::transport)?;
        let status = response.status();
        let content_length = response.content_length();
        let body = response.text().await.map_err(Error::transport)?;
        Self::log_response(status, &body);

        if !status.is_success() {
            return Err(Error::remote_delete(status.as_u16(), body));
        }
        if !Self::is_null_sentinel(content_length, &body) {
            return Err(Error::remote_delete(
                status.as_u16(),
                format!("delete not confirmed by store, response body: {}", body),
            ));
        }
        Ok(())
    }

    /// Lazy, restartable sequence of full-collection snapshots.
    ///
    /// Nothing is fetched until the stream is polled; every poll performs a
    /// fresh read. This is the pull-on-demand replacement for push-based
    /// listener subscriptions.
    pub fn snapshots<R: KeyedRecord + 'static>(
        &self,
        scope: UserScope,
    ) -> BoxStream<'static, Result<Vec<R>>> {
        let client = self.clone();
        stream::unfold((client, scope), |(client, scope)| async move {
            let snapshot = client.list_all::<R>(&scope).await;
            Some((snapshot, (client, scope)))
        })
        .boxed()
    }
}
