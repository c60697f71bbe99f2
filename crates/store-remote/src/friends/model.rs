use giftbook_core::friends::Friend;

use crate::record::KeyedRecord;

impl KeyedRecord for Friend {
    const COLLECTION: &'static str = "friends";
    const OPTIONAL_FIELDS: &'static [&'static str] = &["phone", "birthday", "memo", "groupKey"];

    fn key(&self) -> &str {
        &self.key
    }

    fn set_key(&mut self, key: &str) {
        self.key = key.to_string();
    }
}
