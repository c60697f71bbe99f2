//! Composite write coordinator.
//!
//! Sequences a binary-asset operation with its dependent record write. The
//! two steps are strictly ordered with no parallel fan-out; each composite
//! operation moves `Pending -> AssetOpComplete -> RecordOpComplete`, or exits
//! early with the asset failure, or surfaces the record failure explicitly
//! when the asset step already landed.

use std::sync::atomic::{AtomicBool, Ordering};

use log::warn;

use giftbook_core::{AssignedKey, Error, Result, UserScope};

use crate::blob::BlobClient;
use crate::client::CollectionClient;
use crate::record::AssetBacked;

/// Coordinates asset uploads/deletes with their dependent record writes.
#[derive(Debug, Clone)]
pub struct CompositeWriter {
    records: CollectionClient,
    blobs: BlobClient,
}

impl CompositeWriter {
    pub fn new(records: CollectionClient, blobs: BlobClient) -> Self {
        Self { records, blobs }
    }

    /// The underlying collection client, for asset-less operations.
    pub fn records(&self) -> &CollectionClient {
        &self.records
    }

    /// The underlying blob client.
    pub fn blobs(&self) -> &BlobClient {
        &self.blobs
    }

    fn cancelled(flag: Option<&AtomicBool>) -> bool {
        flag.map(|f| f.load(Ordering::Relaxed)).unwrap_or(false)
    }

    /// Upload the asset, then insert the record pointing at it.
    ///
    /// Upload failure writes no record. Record-write failure after a
    /// successful upload deletes the orphaned blob on a best-effort basis and
    /// surfaces [`Error::RecordWriteAfterAssetUpload`]. A cancel flag
    /// observed set between the steps aborts with [`Error::Cancelled`]
    /// without initiating the record write; the completed upload is never
    /// cancelled remotely.
    pub async fn create_with_asset<R: AssetBacked>(
        &self,
        scope: &UserScope,
        mut record: R,
        category: &str,
        asset: Vec<u8>,
        cancel_flag: Option<&AtomicBool>,
    ) -> Result<AssignedKey> {
        let path = BlobClient::timestamp_path(category);
        let stored = self.blobs.put(&path, asset).await?;
        record.set_asset_path(Some(stored.clone()));

        if Self::cancelled(cancel_flag) {
            warn!("create cancelled after asset upload; orphaned blob at '{}'", stored);
            return Err(Error::Cancelled);
        }

        match self.records.insert(scope, &record).await {
            Ok(key) => Ok(key),
            // the record exists; only its embedded key is unreliable
            Err(err @ Error::PartiallyPersisted { .. }) => Err(err),
            Err(err) => {
                if let Err(cleanup) = self.blobs.delete(&stored).await {
                    warn!("failed to clean up orphaned asset '{}': {}", stored, cleanup);
                }
                Err(Error::record_write_after_asset_upload(stored, err))
            }
        }
    }

    /// Upload the replacement asset, point the record at it, then delete the
    /// record's previous asset path.
    ///
    /// Old-path deletion failure is non-fatal: the record already resolves to
    /// the new asset, so the stale blob is merely reclaimable garbage. A
    /// cancel flag observed set after the upload aborts before the record
    /// write; observed set after the record write, it skips only the old-path
    /// deletion.
    pub async fn update_with_asset<R: AssetBacked>(
        &self,
        scope: &UserScope,
        key: &str,
        mut record: R,
        category: &str,
        new_asset: Vec<u8>,
        cancel_flag: Option<&AtomicBool>,
    ) -> Result<()> {
        let old_path = record.asset_path().map(str::to_string);
        let path = BlobClient::timestamp_path(category);
        let stored = self.blobs.put(&path, new_asset).await?;
        record.set_asset_path(Some(stored.clone()));

        if Self::cancelled(cancel_flag) {
            warn!("update cancelled after asset upload; orphaned blob at '{}'", stored);
            return Err(Error::Cancelled);
        }

        if let Err(err) = self.records.update(scope, key, &record).await {
            if let Err(cleanup) = self.blobs.delete(&stored).await {
                warn!("failed to clean up orphaned asset '{}': {}", stored, cleanup);
            }
            return Err(Error::record_write_after_asset_upload(stored, err));
        }

        if Self::cancelled(cancel_flag) {
            warn!(
                "update cancelled after record write; replaced asset '{:?}' left behind",
                old_path
            );
            return Ok(());
        }

        if let Some(old) = old_path {
            if let Err(err) = self.blobs.delete(&old).await {
                warn!("failed to delete replaced asset '{}': {}", old, err);
            }
        }
        Ok(())
    }

    /// Delete the asset first; only on success delete the record.
    ///
    /// Fail-closed: when the asset deletion fails, the record is left intact
    /// rather than losing the linkage to a blob that still exists.
    pub async fn delete_with_asset(
        &self,
        collection: &str,
        scope: &UserScope,
        key: &str,
        asset_path: &str,
        cancel_flag: Option<&AtomicBool>,
    ) -> Result<()> {
        self.blobs.delete(asset_path).await?;

        if Self::cancelled(cancel_flag) {
            warn!(
                "delete cancelled after asset removal; record '{}/{}' retains a dangling path",
                collection, key
            );
            return Err(Error::Cancelled);
        }

        self.records.delete(collection, scope, key).await
    }
}
