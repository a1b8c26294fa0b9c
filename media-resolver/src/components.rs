//! Dioxus components that render media through a [`MediaResolver`].
//!
//! The resolver must be provided as context (`use_context_provider`) by an
//! ancestor. Each component keeps its own attempt counter and moves to the
//! next candidate URL whenever the browser reports a load error.

use crate::models::{MediaKind, MediaRef};
use crate::resolver::MediaResolver;
use dioxus::prelude::*;

/// Image with automatic legacy-path fallback and placeholder
#[component]
pub fn ResolvedImage(
    media: MediaRef,
    #[props(default)] kind: MediaKind,
    #[props(default = String::new())] alt: String,
    #[props(default = String::new())] class: String,
    #[props(default = "width: 100%; height: 100%; object-fit: cover;".to_string())] style: String,
) -> Element {
    let resolver = use_context::<MediaResolver>();
    let mut attempt = use_signal(|| 0u8);

    // A recycled component showing a different item starts over
    use_effect(use_reactive((&media,), move |_| attempt.set(0)));

    let resolved = resolver.resolve_attempt(&media, kind, attempt());
    let is_placeholder = resolved.is_placeholder();
    let src = resolved.url().to_string();

    rsx! {
        img {
            src: "{src}",
            alt: "{alt}",
            class: "{class}",
            style: "{style}",
            loading: "lazy",
            onerror: move |_| {
                if !is_placeholder {
                    log::warn!("Media failed to load (attempt {}), trying next location", attempt());
                    attempt.set(attempt() + 1);
                }
            },
        }
    }
}

/// Video that only exists in the DOM while `active`.
///
/// Playback is controlled by rendering: the active item mounts an autoplaying
/// `<video>`, every other item shows its poster. No element lookups needed.
#[component]
pub fn ResolvedVideo(
    media: MediaRef,
    #[props(default = None)] poster: Option<MediaRef>,
    active: bool,
    #[props(default = true)] muted: bool,
    #[props(default = String::new())] class: String,
) -> Element {
    let resolver = use_context::<MediaResolver>();
    let mut attempt = use_signal(|| 0u8);

    use_effect(use_reactive((&media,), move |_| attempt.set(0)));

    let resolved = resolver.resolve_attempt(&media, MediaKind::Video, attempt());
    let poster_url = poster
        .as_ref()
        .and_then(|p| resolver.resolve(p, MediaKind::Image))
        .unwrap_or_default();

    if !active || resolved.is_placeholder() {
        return rsx! {
            div { class: "{class}", style: "width: 100%; height: 100%; background: #111;",
                if let Some(poster) = poster {
                    ResolvedImage { media: poster, alt: "Reel preview".to_string() }
                }
            }
        };
    }

    let src = resolved.url().to_string();
    rsx! {
        video {
            class: "{class}",
            style: "width: 100%; height: 100%; object-fit: cover;",
            src: "{src}",
            poster: "{poster_url}",
            autoplay: true,
            muted,
            playsinline: true,
            r#loop: true,
            onerror: move |_| {
                log::warn!("Video failed to load (attempt {}), trying next location", attempt());
                attempt.set(attempt() + 1);
            },
        }
    }
}
