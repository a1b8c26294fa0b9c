use crate::models::{MediaConfig, MediaKind, MediaRef, Resolved};
use base64::{engine::general_purpose, Engine as _};

/// Number of fallback URLs probed after the primary one failed
pub const MAX_MEDIA_RETRIES: u8 = 3;

const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="400" viewBox="0 0 400 400"><rect width="400" height="400" fill="#f3efe9"/><path d="M200 120l60 60-60 100-60-100z" fill="none" stroke="#c9b79c" stroke-width="8"/></svg>"##;

/// Turns media references into renderable URLs.
///
/// Provided to the component tree as context; see the `components` module.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaResolver {
    config: MediaConfig,
    base: String,
}

impl MediaResolver {
    pub fn new(config: MediaConfig) -> Self {
        let base = config.base_url();
        Self { config, base }
    }

    pub fn config(&self) -> &MediaConfig {
        &self.config
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn placeholder(&self) -> String {
        match &self.config.placeholder_url {
            Some(url) if !url.trim().is_empty() => url.clone(),
            _ => format!(
                "data:image/svg+xml;base64,{}",
                general_purpose::STANDARD.encode(PLACEHOLDER_SVG)
            ),
        }
    }

    /// Primary URL for a reference, `None` if it is empty
    pub fn resolve(&self, media: &MediaRef, kind: MediaKind) -> Option<String> {
        media.raw().map(|raw| self.resolve_raw(raw, kind))
    }

    /// The primary URL followed by every distinct legacy-layout URL for the
    /// same file. Foreign absolute URLs have no alternatives.
    pub fn candidates(&self, media: &MediaRef, kind: MediaKind) -> Vec<String> {
        let Some(raw) = media.raw() else {
            return Vec::new();
        };
        let mut urls = vec![self.resolve_raw(raw, kind)];

        if has_scheme(raw) && !self.is_own_url(raw) {
            return urls;
        }
        let (path, suffix) = split_suffix(raw);
        let Some(file) = file_name(path) else {
            return urls;
        };
        // Query and fragment travel with the file so a cache-buster on the
        // primary does not make its own layout look like a new candidate
        for layout in kind.layouts() {
            let url = self.join(&format!("{}/{}{}", layout, file, suffix));
            if !urls.contains(&url) {
                urls.push(url);
            }
        }
        urls
    }

    /// URL to use for the given attempt (0 = first load).
    ///
    /// Each failed load moves to the next candidate. After
    /// [`MAX_MEDIA_RETRIES`] fallbacks, or when candidates run out, the
    /// placeholder is returned.
    pub fn resolve_attempt(&self, media: &MediaRef, kind: MediaKind, attempt: u8) -> Resolved {
        if attempt > MAX_MEDIA_RETRIES {
            return Resolved::Placeholder(self.placeholder());
        }
        match self.candidates(media, kind).into_iter().nth(attempt as usize) {
            Some(url) => {
                if attempt > 0 {
                    log::debug!("Media fallback {} -> {}", attempt, url);
                }
                Resolved::Url(url)
            }
            None => {
                if attempt > 0 {
                    log::warn!("No media location left after {} attempts, using placeholder", attempt);
                }
                Resolved::Placeholder(self.placeholder())
            }
        }
    }

    fn resolve_raw(&self, raw: &str, kind: MediaKind) -> String {
        if has_scheme(raw) {
            raw.to_string()
        } else if raw.starts_with('/') {
            format!("{}{}", self.base, raw)
        } else if raw.contains('/') {
            self.join(raw)
        } else {
            self.join(&format!("{}/{}", kind.layouts()[0], raw))
        }
    }

    fn join(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    fn is_own_url(&self, url: &str) -> bool {
        let cdn = self.config.cdn_origin.trim_end_matches('/');
        is_under_origin(url, &self.base)
            || is_under_origin(url, cdn)
            || self
                .config
                .storage_origin()
                .is_some_and(|origin| is_under_origin(url, &origin))
    }
}

/// `https://…`, `data:…`, `blob:…` and protocol-relative `//…`
fn has_scheme(raw: &str) -> bool {
    if raw.starts_with("//") {
        return true;
    }
    match raw.split_once(':') {
        Some((scheme, _)) => {
            scheme.len() > 1
                && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// `https://cdn.test/x` is under `https://cdn.test`, `https://cdn.test.evil/x` is not
fn is_under_origin(url: &str, origin: &str) -> bool {
    if origin.is_empty() {
        return false;
    }
    match url.strip_prefix(origin) {
        Some(rest) => rest.is_empty() || rest.starts_with(['/', '?', '#']),
        None => false,
    }
}

/// Splits `a/b.jpg?v=2#x` into `a/b.jpg` and `?v=2#x`
fn split_suffix(raw: &str) -> (&str, &str) {
    match raw.find(['?', '#']) {
        Some(pos) => raw.split_at(pos),
        None => (raw, ""),
    }
}

fn file_name(path: &str) -> Option<&str> {
    path.rsplit('/').next().filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> MediaResolver {
        MediaResolver::new(MediaConfig {
            cdn_origin: "https://cdn.jewel.test".to_string(),
            bucket: "jewel-media".to_string(),
            region: "eu-central-1".to_string(),
            use_cdn: true,
            placeholder_url: Some("/static/placeholder.png".to_string()),
        })
    }

    #[test]
    fn test_absolute_url_unchanged() {
        let r = resolver();
        let url = "https://images.other.test/ring.jpg";
        assert_eq!(r.resolve(&url.into(), MediaKind::Image).as_deref(), Some(url));
        assert_eq!(
            r.resolve(&"data:image/png;base64,AAAA".into(), MediaKind::Image).as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn test_root_relative_path() {
        let r = resolver();
        assert_eq!(
            r.resolve(&"/media/products/ring.jpg".into(), MediaKind::Image).as_deref(),
            Some("https://cdn.jewel.test/media/products/ring.jpg")
        );
    }

    #[test]
    fn test_bucket_relative_path() {
        let r = resolver();
        assert_eq!(
            r.resolve(&"products/2021/ring.jpg".into(), MediaKind::Image).as_deref(),
            Some("https://cdn.jewel.test/products/2021/ring.jpg")
        );
    }

    #[test]
    fn test_bare_filename_uses_current_layout() {
        let r = resolver();
        assert_eq!(
            r.resolve(&"ring.jpg".into(), MediaKind::Image).as_deref(),
            Some("https://cdn.jewel.test/media/products/ring.jpg")
        );
        assert_eq!(
            r.resolve(&"spin.mp4".into(), MediaKind::Video).as_deref(),
            Some("https://cdn.jewel.test/media/reels/spin.mp4")
        );
    }

    #[test]
    fn test_bare_filename_retries_three_times_then_placeholder() {
        let r = resolver();
        let media: MediaRef = "ring.jpg".into();
        let urls: Vec<Resolved> = (0..=5)
            .map(|attempt| r.resolve_attempt(&media, MediaKind::Image, attempt))
            .collect();

        assert_eq!(urls[0], Resolved::Url("https://cdn.jewel.test/media/products/ring.jpg".into()));
        assert_eq!(urls[1], Resolved::Url("https://cdn.jewel.test/products/ring.jpg".into()));
        assert_eq!(urls[2], Resolved::Url("https://cdn.jewel.test/media/ring.jpg".into()));
        assert_eq!(urls[3], Resolved::Url("https://cdn.jewel.test/uploads/products/ring.jpg".into()));
        assert!(urls[4..].iter().all(|u| u == &Resolved::Placeholder("/static/placeholder.png".into())));
    }

    #[test]
    fn test_retries_are_capped_even_with_more_candidates() {
        let r = resolver();
        let media: MediaRef = "/legacy/2019/ring.jpg".into();
        assert_eq!(r.candidates(&media, MediaKind::Image).len(), 5);
        assert!(r.resolve_attempt(&media, MediaKind::Image, 3).url().ends_with("/media/ring.jpg"));
        assert!(r.resolve_attempt(&media, MediaKind::Image, 4).is_placeholder());
    }

    #[test]
    fn test_own_absolute_url_gets_fallbacks() {
        let r = resolver();
        let media: MediaRef = "https://jewel-media.s3.eu-central-1.amazonaws.com/old/ring.jpg?v=2".into();
        let candidates = r.candidates(&media, MediaKind::Image);
        assert_eq!(candidates[1], "https://cdn.jewel.test/media/products/ring.jpg?v=2");
    }

    #[test]
    fn test_cache_buster_does_not_waste_a_retry() {
        let r = resolver();
        let media: MediaRef = "ring.jpg?v=2".into();
        assert_eq!(
            r.candidates(&media, MediaKind::Image),
            vec![
                "https://cdn.jewel.test/media/products/ring.jpg?v=2",
                "https://cdn.jewel.test/products/ring.jpg?v=2",
                "https://cdn.jewel.test/media/ring.jpg?v=2",
                "https://cdn.jewel.test/uploads/products/ring.jpg?v=2",
            ]
        );
        assert_eq!(
            r.resolve_attempt(&media, MediaKind::Image, 3),
            Resolved::Url("https://cdn.jewel.test/uploads/products/ring.jpg?v=2".into())
        );
        assert!(r.resolve_attempt(&media, MediaKind::Image, 4).is_placeholder());
    }

    #[test]
    fn test_own_cdn_url_with_query_probes_every_layout() {
        let r = resolver();
        let media: MediaRef = "https://cdn.jewel.test/media/products/ring.jpg?v=2#top".into();
        let candidates = r.candidates(&media, MediaKind::Image);
        assert_eq!(candidates.len(), 4);
        assert_eq!(candidates[0], "https://cdn.jewel.test/media/products/ring.jpg?v=2#top");
        assert_eq!(candidates[3], "https://cdn.jewel.test/uploads/products/ring.jpg?v=2#top");
    }

    #[test]
    fn test_lookalike_host_is_foreign() {
        let r = resolver();
        let media: MediaRef = "https://cdn.jewel.test.evil/x.jpg".into();
        assert_eq!(r.candidates(&media, MediaKind::Image).len(), 1);
        assert!(r.resolve_attempt(&media, MediaKind::Image, 1).is_placeholder());

        let media: MediaRef = "https://jewel-media.s3.eu-central-1.amazonaws.com.evil/ring.jpg".into();
        assert_eq!(r.candidates(&media, MediaKind::Image).len(), 1);
    }

    #[test]
    fn test_foreign_url_goes_straight_to_placeholder() {
        let r = resolver();
        let media: MediaRef = "https://images.other.test/ring.jpg".into();
        assert!(!r.resolve_attempt(&media, MediaKind::Image, 0).is_placeholder());
        assert!(r.resolve_attempt(&media, MediaKind::Image, 1).is_placeholder());
    }

    #[test]
    fn test_empty_reference_is_placeholder() {
        let r = resolver();
        assert_eq!(r.resolve(&MediaRef::default(), MediaKind::Image), None);
        assert!(r.resolve_attempt(&MediaRef::default(), MediaKind::Image, 0).is_placeholder());
    }

    #[test]
    fn test_default_placeholder_is_inline_svg() {
        let r = MediaResolver::new(MediaConfig::default());
        assert!(r.placeholder().starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn test_direct_storage_base() {
        let mut config = resolver().config().clone();
        config.use_cdn = false;
        let r = MediaResolver::new(config);
        assert_eq!(
            r.resolve(&"ring.jpg".into(), MediaKind::Image).as_deref(),
            Some("https://jewel-media.s3.eu-central-1.amazonaws.com/media/products/ring.jpg")
        );
    }
}
