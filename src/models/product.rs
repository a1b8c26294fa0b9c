use super::Price;
use media_resolver::MediaRef;
use paged_feed::{FeedItem, ItemId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Price,
    /// Crossed-out price shown next to a discounted one
    #[serde(default, alias = "original_price", alias = "mrp")]
    pub compare_at_price: Option<Price>,
    #[serde(default, alias = "category_id")]
    pub category: Option<ItemId>,
    #[serde(default, alias = "main_image", alias = "thumbnail")]
    pub image: MediaRef,
    #[serde(default)]
    pub images: Vec<MediaRef>,
    /// Marketing badge ("New", "Bestseller")
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// The image to show on cards: `image`, else the first of `images`
    pub fn primary_media(&self) -> MediaRef {
        if !self.image.is_empty() {
            return self.image.clone();
        }
        self.images
            .iter()
            .find(|m| !m.is_empty())
            .cloned()
            .unwrap_or_default()
    }

    /// Whole-percent discount against the compare-at price, if any
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.compare_at_price?.cents();
        let current = self.price.cents();
        if original <= 0 || current >= original {
            return None;
        }
        Some((((original - current) * 100) / original) as u32)
    }
}

impl FeedItem for Product {
    fn item_id(&self) -> &ItemId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_product() {
        let json = r#"{
            "id": 42,
            "name": "Solitaire Ring",
            "price": "24999.00",
            "original_price": 29999,
            "category_id": 3,
            "main_image": {"image": "/media/products/solitaire.jpg"},
            "badge": "Bestseller"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id.as_str(), "42");
        assert_eq!(p.category.as_ref().map(|c| c.as_str()), Some("3"));
        assert_eq!(p.primary_media().raw(), Some("/media/products/solitaire.jpg"));
        assert!(p.in_stock);
        assert_eq!(p.discount_percent(), Some(16));
    }

    #[test]
    fn test_primary_media_falls_back_to_gallery() {
        let json = r#"{"id": "p1", "name": "Hoops", "price": 10, "images": ["", "hoops.jpg"]}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.primary_media().raw(), Some("hoops.jpg"));
        assert_eq!(p.discount_percent(), None);
    }
}
