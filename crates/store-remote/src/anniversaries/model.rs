use giftbook_core::anniversaries::Anniversary;

use crate::record::KeyedRecord;

impl KeyedRecord for Anniversary {
    const COLLECTION: &'static str = "anniversaries";
    const OPTIONAL_FIELDS: &'static [&'static str] = &["memo", "friendKey"];

    fn key(&self) -> &str {
        &self.key
    }

    fn set_key(&mut self, key: &str) {
        self.key = key.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anniversaries_live_in_their_own_collection() {
        assert_eq!(Anniversary::COLLECTION, "anniversaries");
    }
}
