//! Wire-level traits for records stored in keyed collections.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record stored under a store-generated key in a user-scoped collection.
///
/// The embedded key field is empty exactly when the record has never been
/// successfully persisted; list reads stamp the outer collection key back
/// into the record, since that key is authoritative even when the follow-up
/// reconciliation patch never landed.
pub trait KeyedRecord: Serialize + DeserializeOwned + Send + Sync {
    /// Collection path segment this record type lives under.
    const COLLECTION: &'static str;

    /// Wire names of fields the serializer omits when unset.
    ///
    /// The store merges PATCH bodies field-wise, so an omitted field keeps
    /// its stored value. Updates transmit these fields as explicit `null`
    /// when they are unset, which deletes the stale value instead of
    /// silently retaining it.
    const OPTIONAL_FIELDS: &'static [&'static str] = &[];

    fn key(&self) -> &str;

    fn set_key(&mut self, key: &str);
}

/// A keyed record that embeds a reference to an object-storage asset.
///
/// The record owns the path string; the referenced bytes are owned by object
/// storage and deleted explicitly by whoever deletes or replaces the record.
pub trait AssetBacked: KeyedRecord {
    fn asset_path(&self) -> Option<&str>;

    fn set_asset_path(&mut self, path: Option<String>);
}

/// Body of the key-reconciliation patch issued after every insert: the store
/// assigns keys but does not embed them into the record on its own.
#[derive(Debug, Serialize)]
pub struct KeyPatch<'a> {
    pub key: &'a str,
}
