use serde::{Deserialize, Serialize};

/// A media reference as the backend hands it out.
///
/// Depending on when an item was uploaded this is an absolute URL, a
/// root-relative path, a bucket-relative path, a bare file name, or an
/// object carrying one of those in `image`, `url`, `file` or `video`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaRef {
    Path(String),
    Object(MediaObject),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Box<MediaRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Box<MediaRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<Box<MediaRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<Box<MediaRef>>,
}

impl MediaRef {
    pub fn path(path: impl Into<String>) -> Self {
        MediaRef::Path(path.into())
    }

    /// The raw reference string, `None` when nothing usable is present
    pub fn raw(&self) -> Option<&str> {
        match self {
            MediaRef::Path(p) => {
                let p = p.trim();
                (!p.is_empty()).then_some(p)
            }
            MediaRef::Object(obj) => [&obj.image, &obj.url, &obj.file, &obj.video]
                .into_iter()
                .flatten()
                .find_map(|inner| inner.raw()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.raw().is_none()
    }
}

impl Default for MediaRef {
    fn default() -> Self {
        MediaRef::Path(String::new())
    }
}

impl From<&str> for MediaRef {
    fn from(s: &str) -> Self {
        MediaRef::Path(s.to_string())
    }
}

/// Folder conventions used for uploaded images over time, newest first
pub const IMAGE_LAYOUTS: &[&str] = &["media/products", "products", "media", "uploads/products"];

/// Folder conventions used for uploaded videos over time, newest first
pub const VIDEO_LAYOUTS: &[&str] = &["media/reels", "reels", "media/videos", "uploads/reels"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl MediaKind {
    /// Storage layouts to probe, the first one being the current convention
    pub fn layouts(self) -> &'static [&'static str] {
        match self {
            MediaKind::Image => IMAGE_LAYOUTS,
            MediaKind::Video => VIDEO_LAYOUTS,
        }
    }
}

/// Where media lives
#[derive(Debug, Clone, PartialEq)]
pub struct MediaConfig {
    /// CDN origin, e.g. `https://cdn.example.com`
    pub cdn_origin: String,
    /// Object-store bucket for direct access
    pub bucket: String,
    pub region: String,
    /// Serve through the CDN instead of straight from the bucket
    pub use_cdn: bool,
    /// Shown once every candidate failed; an inline SVG is used if unset
    pub placeholder_url: Option<String>,
}

impl MediaConfig {
    pub fn storage_origin(&self) -> Option<String> {
        if self.bucket.is_empty() {
            return None;
        }
        Some(format!(
            "https://{}.s3.{}.amazonaws.com",
            self.bucket, self.region
        ))
    }

    /// Base all relative references are resolved against
    pub fn base_url(&self) -> String {
        let cdn = self.cdn_origin.trim_end_matches('/');
        if self.use_cdn && !cdn.is_empty() {
            return cdn.to_string();
        }
        self.storage_origin()
            .unwrap_or_else(|| cdn.to_string())
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            cdn_origin: String::new(),
            bucket: String::new(),
            region: "us-east-1".to_string(),
            use_cdn: true,
            placeholder_url: None,
        }
    }
}

/// Outcome of resolving a reference for a given attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Url(String),
    Placeholder(String),
}

impl Resolved {
    pub fn url(&self) -> &str {
        match self {
            Resolved::Url(url) | Resolved::Placeholder(url) => url,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Resolved::Placeholder(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_ref_shapes() {
        let refs: Vec<MediaRef> = serde_json::from_str(
            r#"["ring.jpg", {"image": "/media/a.jpg"}, {"url": "https://x/y.png"}, {"image": {"url": "b.webp"}}, {"image": null, "file": "c.jpg"}]"#,
        )
        .unwrap();
        assert_eq!(refs[0].raw(), Some("ring.jpg"));
        assert_eq!(refs[1].raw(), Some("/media/a.jpg"));
        assert_eq!(refs[2].raw(), Some("https://x/y.png"));
        assert_eq!(refs[3].raw(), Some("b.webp"));
        assert_eq!(refs[4].raw(), Some("c.jpg"));
    }

    #[test]
    fn test_empty_reference() {
        assert!(MediaRef::path("  ").is_empty());
        assert!(MediaRef::Object(MediaObject::default()).is_empty());
    }

    #[test]
    fn test_base_url_selection() {
        let mut config = MediaConfig {
            cdn_origin: "https://cdn.example.com/".to_string(),
            bucket: "jewel-media".to_string(),
            region: "eu-west-1".to_string(),
            use_cdn: true,
            placeholder_url: None,
        };
        assert_eq!(config.base_url(), "https://cdn.example.com");

        config.use_cdn = false;
        assert_eq!(
            config.base_url(),
            "https://jewel-media.s3.eu-west-1.amazonaws.com"
        );
    }
}
