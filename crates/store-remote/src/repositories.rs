//! Shared wiring for the remote repositories.

use crate::anniversaries::AnniversaryRepository;
use crate::blob::BlobClient;
use crate::client::CollectionClient;
use crate::config::RemoteConfig;
use crate::coordinator::CompositeWriter;
use crate::friend_groups::FriendGroupRepository;
use crate::friends::FriendRepository;
use crate::gift_categories::GiftCategoryRepository;
use crate::gifts::GiftRepository;

/// All repositories wired onto one shared pair of remote clients.
pub struct Repositories {
    pub friends: FriendRepository,
    pub friend_groups: FriendGroupRepository,
    pub gifts: GiftRepository,
    pub gift_categories: GiftCategoryRepository,
    pub anniversaries: AnniversaryRepository,
}

impl Repositories {
    pub fn new(config: &RemoteConfig) -> Self {
        let records = CollectionClient::with_timeout(&config.database_url, config.timeout);
        let blobs = BlobClient::with_timeout(&config.storage_url, config.timeout);
        let writer = CompositeWriter::new(records.clone(), blobs);

        Self {
            friends: FriendRepository::new(records.clone()),
            friend_groups: FriendGroupRepository::new(records.clone()),
            gifts: GiftRepository::new(writer),
            gift_categories: GiftCategoryRepository::new(records.clone()),
            anniversaries: AnniversaryRepository::new(records),
        }
    }
}
