use crate::config::StorefrontConfig;
use crate::models::slides_or_default;
use crate::services::CatalogClient;
use dioxus::prelude::*;
use dioxus_i18n::t;
use media_resolver::ResolvedImage;
use paged_feed::{use_autoplay, use_carousel};

const ARROW_STYLE: &str = "position: absolute; top: 50%; transform: translateY(-50%); width: 40px; height: 40px; border-radius: 50%; border: none; background: rgba(255, 255, 255, 0.7); font-size: 20px; cursor: pointer;";

#[component]
pub fn HeroSlider() -> Element {
    let client = use_context::<CatalogClient>();
    let config = use_context::<StorefrontConfig>();

    let live_slides = use_resource(move || {
        let client = client.clone();
        async move {
            match client.fetch_hero_slides().await {
                Ok(slides) => Some(slides),
                Err(e) => {
                    log::warn!("Hero slides unavailable, showing defaults: {}", e);
                    None
                }
            }
        }
    });

    let slides = slides_or_default(live_slides.cloned().flatten());
    let mut carousel = use_carousel(slides.len(), 1);
    use_autoplay(carousel, config.hero_interval());

    let current = carousel.read().index().min(slides.len() - 1);
    let slide = slides[current].clone();

    rsx! {
        div { style: "position: relative; height: 360px; border-radius: 12px; overflow: hidden; background: #f3efe9;",
            ResolvedImage { key: "{slide.id}", media: slide.image.clone(), alt: slide.title.clone() }

            div { style: "position: absolute; left: 0; right: 0; bottom: 0; padding: 24px; background: linear-gradient(transparent, rgba(0, 0, 0, 0.6)); color: white;",
                h2 { style: "margin: 0; font-size: 28px;", "{slide.title}" }
                if let Some(subtitle) = &slide.subtitle {
                    p { style: "margin: 8px 0 0 0; font-size: 16px;", "{subtitle}" }
                }
                if let Some(link) = &slide.link {
                    a {
                        class: "btn-primary",
                        style: "display: inline-block; margin-top: 12px; padding: 10px 20px; text-decoration: none;",
                        href: "{link}",
                        {t!("hero-shop-now")}
                    }
                }
            }

            if slides.len() > 1 {
                button {
                    style: "{ARROW_STYLE} left: 12px;",
                    title: t!("hero-prev"),
                    onclick: move |_| carousel.write().prev(),
                    "‹"
                }
                button {
                    style: "{ARROW_STYLE} right: 12px;",
                    title: t!("hero-next"),
                    onclick: move |_| carousel.write().next(),
                    "›"
                }
                div { style: "position: absolute; bottom: 12px; right: 24px; display: flex; gap: 6px;",
                    for i in 0..slides.len() {
                        button {
                            key: "{i}",
                            style: if i == current {
                                "width: 10px; height: 10px; border-radius: 50%; border: none; background: white; cursor: pointer;"
                            } else {
                                "width: 10px; height: 10px; border-radius: 50%; border: none; background: rgba(255, 255, 255, 0.4); cursor: pointer;"
                            },
                            onclick: move |_| carousel.write().go_to(i),
                        }
                    }
                }
            }
        }
    }
}
