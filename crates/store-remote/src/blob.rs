//! Object-storage client for binary assets.
//!
//! Paths are chosen by the caller and content-addressed with a millisecond
//! timestamp token to avoid collisions; the store itself is opaque.

use std::time::Duration;

use chrono::Utc;
use log::debug;
use reqwest::header::CONTENT_TYPE;

use giftbook_core::{Error, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the binary-asset object store.
#[derive(Debug, Clone)]
pub struct BlobClient {
    client: reqwest::Client,
    base_url: String,
}

impl BlobClient {
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

    /// Fresh content-addressed path for an asset in `category`, e.g.
    /// `images/gifts/1760000000000`.
    pub fn timestamp_path(category: &str) -> String {
        format!("images/{}/{}", category, Utc::now().timestamp_millis())
    }

    fn object_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Store `bytes` at `path`; returns the path that was written.
    pub async fn put(&self, path: &str, bytes: Vec<u8>) -> Result<String> {
        let url = self.object_url(path);
        debug!("uploading {} bytes to {}", bytes.len(), url);
        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(bytes)
            .send()
            .await
            .map_err(|e| Error::asset_upload(path, e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| Error::asset_upload(path, e.to_string()))?;
            return Err(Error::asset_upload(
                path,
                format!("{}: {}", status.as_u16(), body),
            ));
        }
        Ok(path.to_string())
    }

    /// Remove the object at `path`.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.object_url(path);
        debug!("deleting object at {}", url);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| Error::asset_delete(path, e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| Error::asset_delete(path, e.to_string()))?;
            return Err(Error::asset_delete(
                path,
                format!("{}: {}", status.as_u16(), body),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::{respond, start_mock_server};

    #[test]
    fn timestamp_paths_live_under_their_category() {
        let path = BlobClient::timestamp_path("gifts");
        assert!(path.starts_with("images/gifts/"));
        let token = path.rsplit('/').next().expect("token");
        assert!(token.chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn put_returns_the_stored_path() {
        let (base_url, captured, server) = start_mock_server(vec![respond(200, "{}")]).await;

        let client = BlobClient::new(&base_url);
        let stored = client
            .put("images/gifts/1760000000000", b"jpeg bytes".to_vec())
            .await
            .expect("upload");
        assert_eq!(stored, "images/gifts/1760000000000");

        let requests = captured.lock().await.clone();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/images/gifts/1760000000000");
        assert_eq!(requests[0].body, "jpeg bytes");

        server.abort();
    }

    #[tokio::test]
    async fn upload_failure_names_the_attempted_path() {
        let (base_url, _captured, server) =
            start_mock_server(vec![respond(503, r#"{"error":"quota"}"#)]).await;

        let client = BlobClient::new(&base_url);
        let err = client
            .put("images/gifts/42", b"x".to_vec())
            .await
            .expect_err("upload failure");
        match err {
            Error::AssetUpload { path, message } => {
                assert_eq!(path, "images/gifts/42");
                assert!(message.contains("503"));
            }
            other => panic!("expected AssetUpload, got {:?}", other),
        }

        server.abort();
    }

    #[tokio::test]
    async fn delete_failure_is_typed_not_swallowed() {
        let (base_url, _captured, server) =
            start_mock_server(vec![respond(404, r#"{"error":"missing"}"#)]).await;

        let client = BlobClient::new(&base_url);
        let err = client
            .delete("images/gifts/42")
            .await
            .expect_err("delete failure");
        assert!(matches!(err, Error::AssetDelete { .. }));

        server.abort();
    }
}
