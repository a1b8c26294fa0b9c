use media_resolver::MediaRef;
use paged_feed::{FilterKey, ItemId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub image: MediaRef,
}

impl Category {
    /// Product feed filter selecting this category
    pub fn filter_key(&self) -> FilterKey {
        FilterKey::Category(self.id.to_string())
    }
}
