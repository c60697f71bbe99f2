//! Error types shared across the giftbook crates.

use thiserror::Error;

/// Result type alias for giftbook operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by store operations.
///
/// Remote failures are always returned as values, never panicked across the
/// boundary; callers decide on retry or user-visible messaging.
#[derive(Debug, Error)]
pub enum Error {
    /// Full-collection read rejected by the store.
    #[error("remote read failed ({status}): {message}")]
    RemoteRead { status: u16, message: String },

    /// Insert or update rejected by the store.
    #[error("remote write failed ({status}): {message}")]
    RemoteWrite { status: u16, message: String },

    /// Delete rejected, or a delete whose response did not confirm removal.
    #[error("remote delete failed ({status}): {message}")]
    RemoteDelete { status: u16, message: String },

    /// Binary asset upload failed; no record was written.
    #[error("asset upload failed for '{path}': {message}")]
    AssetUpload { path: String, message: String },

    /// Binary asset deletion failed.
    #[error("asset delete failed for '{path}': {message}")]
    AssetDelete { path: String, message: String },

    /// The entity was stored under `key` but the follow-up patch writing the
    /// key into the entity's own key field failed. The entry is visible in
    /// list reads; its embedded key field is unreliable until a repair
    /// succeeds.
    #[error("entity stored under key '{key}' but key reconciliation failed: {message}")]
    PartiallyPersisted { key: String, message: String },

    /// The asset was uploaded but the dependent record write failed. The
    /// orphaned blob has been deleted on a best-effort basis.
    #[error("record write failed after asset upload to '{asset_path}'")]
    RecordWriteAfterAssetUpload {
        asset_path: String,
        #[source]
        source: Box<Error>,
    },

    /// Network-level failure before any store response was observed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The store answered with a body the client could not decode.
    #[error("malformed store response: {0}")]
    Malformed(String),

    /// Rejected user scope (empty or containing path-meaningful characters).
    #[error("invalid user scope: {0}")]
    InvalidScope(String),

    /// The caller's context was cancelled between the steps of a composite
    /// operation; the remaining steps were not initiated.
    #[error("operation cancelled before completion")]
    Cancelled,
}

impl Error {
    pub fn remote_read(status: u16, message: impl Into<String>) -> Self {
        Self::RemoteRead {
            status,
            message: message.into(),
        }
    }

    pub fn remote_write(status: u16, message: impl Into<String>) -> Self {
        Self::RemoteWrite {
            status,
            message: message.into(),
        }
    }

    pub fn remote_delete(status: u16, message: impl Into<String>) -> Self {
        Self::RemoteDelete {
            status,
            message: message.into(),
        }
    }

    pub fn asset_upload(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssetUpload {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn asset_delete(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssetDelete {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn partially_persisted(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PartiallyPersisted {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn record_write_after_asset_upload(asset_path: impl Into<String>, source: Error) -> Self {
        Self::RecordWriteAfterAssetUpload {
            asset_path: asset_path.into(),
            source: Box::new(source),
        }
    }

    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    pub fn invalid_scope(message: impl Into<String>) -> Self {
        Self::InvalidScope(message.into())
    }

    /// HTTP status reported by the store, if this is a remote failure.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::RemoteRead { status, .. }
            | Self::RemoteWrite { status, .. }
            | Self::RemoteDelete { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when a composite operation completed some steps but not all,
    /// leaving state that the caller should repair or retry explicitly.
    pub fn is_partial_failure(&self) -> bool {
        matches!(
            self,
            Self::PartiallyPersisted { .. } | Self::RecordWriteAfterAssetUpload { .. }
        )
    }
}
