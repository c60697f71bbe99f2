use giftbook_core::gift_categories::GiftCategory;

use crate::record::KeyedRecord;

impl KeyedRecord for GiftCategory {
    const COLLECTION: &'static str = "giftCategories";

    fn key(&self) -> &str {
        &self.key
    }

    fn set_key(&mut self, key: &str) {
        self.key = key.to_string();
    }
}
