use crate::config::StorefrontConfig;
use crate::models::Category;
use crate::services::CatalogClient;
use dioxus::prelude::*;
use dioxus_i18n::t;
use media_resolver::ResolvedImage;
use paged_feed::{use_autoplay, use_carousel, FilterKey, ResponsiveWindow};

#[component]
pub fn CategoryCarousel(selected: FilterKey, on_select: EventHandler<FilterKey>) -> Element {
    let client = use_context::<CatalogClient>();
    let config = use_context::<StorefrontConfig>();

    let categories = use_resource(move || {
        let client = client.clone();
        async move {
            client.fetch_categories().await.unwrap_or_else(|e| {
                log::error!("Failed to load categories: {}", e);
                Vec::new()
            })
        }
    });
    let categories: Vec<Category> = categories.cloned().unwrap_or_default();

    // Width of the strip, updated by the resize observer
    let mut width = use_signal(|| 1024.0f64);
    let window = ResponsiveWindow::default().window_for(width());

    let mut carousel = use_carousel(categories.len(), window);
    use_autoplay(carousel, config.category_interval());

    let range = carousel.read().visible_range();
    let page_count = carousel.read().page_count();
    let start = range.start.min(categories.len());
    let end = range.end.min(categories.len());
    let visible = categories[start..end].to_vec();
    let all_selected = selected == FilterKey::All;

    rsx! {
        div {
            class: "card",
            onresize: move |evt: Event<ResizeData>| {
                if let Ok(size) = evt.get_content_box_size() {
                    width.set(size.width);
                }
            },

            div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                h2 { style: "margin: 0; font-size: 20px;", {t!("category-title")} }
                div { style: "display: flex; gap: 8px;",
                    button {
                        class: if all_selected { "btn-primary" } else { "btn-secondary" },
                        style: "padding: 8px 14px;",
                        onclick: move |_| on_select.call(FilterKey::All),
                        {t!("category-all")}
                    }
                    if page_count > 1 {
                        button {
                            class: "btn-secondary",
                            style: "padding: 8px 12px;",
                            onclick: move |_| carousel.write().prev(),
                            "‹"
                        }
                        button {
                            class: "btn-secondary",
                            style: "padding: 8px 12px;",
                            onclick: move |_| carousel.write().next(),
                            "›"
                        }
                    }
                }
            }

            div { style: "display: grid; grid-template-columns: repeat({window}, 1fr); gap: 12px;",
                for category in visible {
                    CategoryTile {
                        key: "{category.id}",
                        active: selected == category.filter_key(),
                        category: category.clone(),
                        on_select,
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryTile(category: Category, active: bool, on_select: EventHandler<FilterKey>) -> Element {
    let border = if active { "#8c6b3f" } else { "transparent" };
    let key = category.filter_key();

    rsx! {
        button {
            style: "display: flex; flex-direction: column; align-items: center; gap: 8px; padding: 8px; background: none; border: 2px solid {border}; border-radius: 12px; cursor: pointer;",
            onclick: move |_| on_select.call(key.clone()),
            div { style: "width: 72px; height: 72px; border-radius: 50%; overflow: hidden; background: #f3efe9;",
                ResolvedImage { media: category.image.clone(), alt: category.name.clone() }
            }
            span { style: "font-size: 14px; color: #2b2622;", "{category.name}" }
        }
    }
}
