use super::Product;
use chrono::{DateTime, Utc};
use media_resolver::MediaRef;
use paged_feed::{FeedItem, ItemId};
use serde::{Deserialize, Serialize};

/// Short shoppable video
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reel {
    pub id: ItemId,
    #[serde(default, alias = "caption")]
    pub title: String,
    #[serde(alias = "video_url")]
    pub video: MediaRef,
    #[serde(default, alias = "thumbnail_url")]
    pub thumbnail: Option<MediaRef>,
    /// Product featured in the video
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(default, alias = "likes_count")]
    pub likes: u64,
    #[serde(default, alias = "views_count")]
    pub views: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Reel {
    /// Compact age like `3d` or `5h`
    pub fn age_label(&self, now: DateTime<Utc>) -> Option<String> {
        let age = now.signed_duration_since(self.created_at?);
        Some(if age.num_days() >= 7 {
            format!("{}w", age.num_weeks())
        } else if age.num_days() >= 1 {
            format!("{}d", age.num_days())
        } else if age.num_hours() >= 1 {
            format!("{}h", age.num_hours())
        } else if age.num_minutes() >= 1 {
            format!("{}m", age.num_minutes())
        } else {
            "now".to_string()
        })
    }
}

impl FeedItem for Reel {
    fn item_id(&self) -> &ItemId {
        &self.id
    }
}

/// `1.2K`, `3.4M`
pub fn compact_count(n: u64) -> String {
    match n {
        0..=999 => n.to_string(),
        1_000..=999_999 => format!("{:.1}K", n as f64 / 1_000.0),
        _ => format!("{:.1}M", n as f64 / 1_000_000.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_reel() {
        let json = r#"{
            "id": 9,
            "caption": "Stacking bangles",
            "video_url": "bangles.mp4",
            "likes_count": 1200,
            "product": {"id": 5, "name": "Bangle", "price": "899"},
            "created_at": "2026-10-12T10:00:00Z"
        }"#;
        let reel: Reel = serde_json::from_str(json).unwrap();
        assert_eq!(reel.title, "Stacking bangles");
        assert_eq!(reel.video.raw(), Some("bangles.mp4"));
        assert_eq!(reel.product.as_ref().map(|p| p.price.cents()), Some(89_900));

        let now = Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap();
        assert_eq!(reel.age_label(now).as_deref(), Some("3d"));
    }

    #[test]
    fn test_compact_count() {
        assert_eq!(compact_count(999), "999");
        assert_eq!(compact_count(1200), "1.2K");
        assert_eq!(compact_count(3_400_000), "3.4M");
    }
}
