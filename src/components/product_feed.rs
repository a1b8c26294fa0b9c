use super::ProductCard;
use crate::config::StorefrontConfig;
use crate::models::{Cart, Favorites, Product};
use crate::services::CatalogClient;
use crate::Screen;
use dioxus::prelude::*;
use dioxus_i18n::t;
use paged_feed::{
    use_paged_collection, use_visibility_tracker, FilterKey, ItemId, LoadStatus, TrackerEvent,
};

/// Infinite product grid. The next page is requested when the last
/// rendered card scrolls into view.
#[component]
pub fn ProductFeed(filter: FilterKey, on_navigate: EventHandler<Screen>) -> Element {
    let client = use_context::<CatalogClient>();
    let config = use_context::<StorefrontConfig>();
    let mut cart = use_context::<Signal<Cart>>();
    let mut favorites = use_context::<Signal<Favorites>>();

    let feed = use_paged_collection::<Product, _>(
        client.clone(),
        filter.clone(),
        config.product_page_size,
    );
    let state = feed.state();
    let mut tracker =
        use_visibility_tracker(config.feed_visibility_threshold, state.read().len());

    use_effect(use_reactive((&filter,), move |(filter,)| {
        if state.peek().filter() != &filter {
            log::debug!("Product filter changed to {}", filter);
            tracker.write().reset();
            feed.set_filter(filter);
        }
    }));

    let toggle_like = use_callback(move |id: ItemId| {
        let liked = favorites.write().toggle(&id);
        if liked {
            client.fire_action("products", id, "like");
        }
    });

    let feed_state = state.read();
    let items = feed_state.items().to_vec();
    let status = feed_state.status().clone();
    let is_empty_result = feed_state.is_empty_result();
    let is_exhausted = feed_state.is_exhausted();
    drop(feed_state);

    let symbol = config.currency_symbol.clone();

    rsx! {
        div { class: "card",
            h2 { style: "margin: 0 0 12px 0; font-size: 20px;", {t!("feed-title")} }

            if is_empty_result {
                p { style: "text-align: center; color: #888; padding: 24px;", {t!("feed-empty")} }
            }

            div { class: "product-grid",
                for (index , product) in items.into_iter().enumerate() {
                    div {
                        key: "{product.id}",
                        onvisible: move |evt: Event<VisibleData>| {
                            let Ok(ratio) = evt.get_intersection_ratio() else {
                                return;
                            };
                            let event = tracker.write().observe(index, ratio);
                            if let Some(TrackerEvent::Activated(activation)) = event {
                                if activation.is_last {
                                    feed.load_more();
                                }
                            }
                        },
                        ProductCard {
                            in_cart: cart.read().contains(&product.id),
                            liked: favorites.read().is_liked(&product.id),
                            currency_symbol: symbol.clone(),
                            product: product.clone(),
                            on_add_to_cart: move |p: Product| cart.write().add(p),
                            on_buy_now: move |p: Product| {
                                if !cart.read().contains(&p.id) {
                                    cart.write().add(p);
                                }
                                on_navigate.call(Screen::Cart);
                            },
                            on_toggle_like: move |id| toggle_like.call(id),
                        }
                    }
                }
            }

            match status {
                LoadStatus::Loading => rsx! {
                    p { style: "text-align: center; color: #888; padding: 16px;", {t!("feed-loading")} }
                },
                LoadStatus::Failed(message) => rsx! {
                    div { style: "text-align: center; padding: 16px;",
                        p { style: "color: #c0392b;", {t!("feed-error")} }
                        p { style: "font-size: 12px; color: #999;", "{message}" }
                        button {
                            class: "btn-primary",
                            onclick: move |_| feed.retry(),
                            {t!("feed-retry")}
                        }
                    }
                },
                LoadStatus::Idle => rsx! {
                    if is_exhausted && !is_empty_result {
                        p { style: "text-align: center; color: #aaa; padding: 16px; font-size: 13px;",
                            {t!("feed-end")}
                        }
                    }
                },
            }
        }
    }
}
