use media_resolver::MediaRef;
use paged_feed::ItemId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroSlide {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub image: MediaRef,
    #[serde(default)]
    pub link: Option<String>,
}

/// Shown whenever the live slide list is empty or failed to load, so the
/// slider never has zero slides.
pub fn default_slides() -> Vec<HeroSlide> {
    [
        ("default-1", "Timeless Elegance", "Handcrafted gold for every occasion", "hero/timeless.jpg"),
        ("default-2", "Bridal Collection", "Rings made to last forever", "hero/bridal.jpg"),
        ("default-3", "Everyday Sparkle", "Light pieces for daily wear", "hero/everyday.jpg"),
    ]
    .into_iter()
    .map(|(id, title, subtitle, image)| HeroSlide {
        id: ItemId::from(id),
        title: title.to_string(),
        subtitle: Some(subtitle.to_string()),
        image: MediaRef::from(image),
        link: None,
    })
    .collect()
}

/// Live slides, or the defaults when there are none
pub fn slides_or_default(live: Option<Vec<HeroSlide>>) -> Vec<HeroSlide> {
    match live {
        Some(slides) if !slides.is_empty() => slides,
        _ => default_slides(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_empty() {
        assert_eq!(slides_or_default(None).len(), 3);
        assert_eq!(slides_or_default(Some(Vec::new())).len(), 3);

        let live = vec![HeroSlide {
            id: ItemId::from("s1"),
            title: "Sale".to_string(),
            subtitle: None,
            image: MediaRef::default(),
            link: Some("/sale".to_string()),
        }];
        assert_eq!(slides_or_default(Some(live)).len(), 1);
    }
}
