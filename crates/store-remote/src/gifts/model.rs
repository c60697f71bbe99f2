use giftbook_core::gifts::Gift;

use crate::record::{AssetBacked, KeyedRecord};

/// Asset-path category gifts upload their images under.
pub(crate) const GIFT_IMAGE_CATEGORY: &str = "gifts";

impl KeyedRecord for Gift {
    const COLLECTION: &'static str = "gifts";
    const OPTIONAL_FIELDS: &'static [&'static str] = &["categoryKey", "date", "memo", "imagePath"];

    fn key(&self) -> &str {
        &self.key
    }

    fn set_key(&mut self, key: &str) {
        self.key = key.to_string();
    }
}

impl AssetBacked for Gift {
    fn asset_path(&self) -> Option<&str> {
        self.image_path.as_deref()
    }

    fn set_asset_path(&mut self, path: Option<String>) {
        self.image_path = path;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_path_is_the_gift_asset_reference() {
        let mut gift = Gift::new("-Nfriend1", "Scarf");
        assert!(gift.asset_path().is_none());
        gift.set_asset_path(Some("images/gifts/1760000000000".to_string()));
        assert_eq!(gift.asset_path(), Some("images/gifts/1760000000000"));
    }
}
