use giftbook_core::friend_groups::FriendGroup;

use crate::record::KeyedRecord;

impl KeyedRecord for FriendGroup {
    const COLLECTION: &'static str = "friendGroups";

    fn key(&self) -> &str {
        &self.key
    }

    fn set_key(&mut self, key: &str) {
        self.key = key.to_string();
    }
}
