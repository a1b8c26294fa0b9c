use crate::config::StorefrontConfig;
use crate::models::{compact_count, Cart, Favorites, Reel};
use crate::services::CatalogClient;
use crate::Screen;
use chrono::Utc;
use dioxus::prelude::*;
use dioxus_i18n::t;
use media_resolver::ResolvedVideo;
use paged_feed::{
    use_paged_collection, use_visibility_tracker, Activation, FilterKey, ItemId, LoadStatus,
    TrackerEvent,
};
use std::collections::HashSet;

/// Vertical reel feed. Only the reel in focus plays; reaching the last one
/// loads the next page.
#[component]
pub fn ReelsScreen(on_navigate: EventHandler<Screen>) -> Element {
    let client = use_context::<CatalogClient>();
    let config = use_context::<StorefrontConfig>();
    let mut cart = use_context::<Signal<Cart>>();
    let mut favorites = use_context::<Signal<Favorites>>();

    let reels = use_paged_collection::<Reel, _>(
        client.clone(),
        FilterKey::All,
        config.reel_page_size,
    );
    let state = reels.state();
    let mut tracker =
        use_visibility_tracker(config.reel_visibility_threshold, state.read().len());
    let mut viewed = use_signal(HashSet::<ItemId>::new);

    // A reel counts as viewed the first time it gains focus
    let view_client = client.clone();
    let on_activate = use_callback(move |activation: Activation| {
        let id = state
            .peek()
            .items()
            .get(activation.index)
            .map(|reel| reel.id.clone());
        if let Some(id) = id {
            if viewed.write().insert(id.clone()) {
                view_client.fire_action("reels", id, "view");
            }
        }
        if activation.is_last {
            reels.load_more();
        }
    });

    let toggle_like = use_callback(move |id: ItemId| {
        let liked = favorites.write().toggle(&id);
        if liked {
            client.fire_action("reels", id, "like");
        }
    });

    let reel_state = state.read();
    let items = reel_state.items().to_vec();
    let status = reel_state.status().clone();
    let is_empty_result = reel_state.is_empty_result();
    drop(reel_state);

    let active = tracker.read().active();
    let now = Utc::now();

    rsx! {
        div { class: "reel-feed",
            if is_empty_result {
                div { style: "padding: 48px 16px; text-align: center; color: #ccc;",
                    {t!("reels-empty")}
                }
            }

            for (index , reel) in items.into_iter().enumerate() {
                div {
                    key: "{reel.id}",
                    class: "reel",
                    onvisible: move |evt: Event<VisibleData>| {
                        let Ok(ratio) = evt.get_intersection_ratio() else {
                            return;
                        };
                        let event = tracker.write().observe(index, ratio);
                        if let Some(TrackerEvent::Activated(activation)) = event {
                            on_activate.call(activation);
                        }
                    },
                    ReelCard {
                        active: active == Some(index),
                        liked: favorites.read().is_liked(&reel.id),
                        age: reel.age_label(now),
                        reel: reel.clone(),
                        on_toggle_like: move |id| toggle_like.call(id),
                        on_shop: move |reel: Reel| {
                            if let Some(product) = reel.product {
                                if !cart.read().contains(&product.id) {
                                    cart.write().add(product);
                                }
                                on_navigate.call(Screen::Cart);
                            }
                        },
                    }
                }
            }

            match status {
                LoadStatus::Loading => rsx! {
                    div { style: "padding: 24px; text-align: center; color: #ccc;", {t!("feed-loading")} }
                },
                LoadStatus::Failed(message) => rsx! {
                    div { style: "padding: 24px; text-align: center; color: #eee;",
                        p { {t!("reels-error")} }
                        p { style: "font-size: 12px; color: #999;", "{message}" }
                        button {
                            class: "btn-primary",
                            onclick: move |_| reels.retry(),
                            {t!("feed-retry")}
                        }
                    }
                },
                LoadStatus::Idle => rsx! {},
            }
        }
    }
}

#[component]
fn ReelCard(
    reel: Reel,
    active: bool,
    liked: bool,
    age: Option<String>,
    on_toggle_like: EventHandler<ItemId>,
    on_shop: EventHandler<Reel>,
) -> Element {
    let like_id = reel.id.clone();
    let likes = compact_count(reel.likes + u64::from(liked));
    let views = compact_count(reel.views);
    let has_product = reel.product.is_some();
    let for_shop = reel.clone();

    rsx! {
        ResolvedVideo {
            media: reel.video.clone(),
            poster: reel.thumbnail.clone(),
            active,
            class: "reel-video",
        }

        div { style: "position: absolute; left: 16px; right: 72px; bottom: 24px; color: white; text-shadow: 0 1px 3px rgba(0, 0, 0, 0.6);",
            div { style: "font-size: 16px; font-weight: 600;", "{reel.title}" }
            div { style: "font-size: 12px; opacity: 0.8; margin-top: 4px;",
                "{views} "
                {t!("reels-views")}
                if let Some(age) = age {
                    " · {age}"
                }
            }
            if has_product {
                button {
                    class: "btn-primary",
                    style: "margin-top: 10px; padding: 8px 16px;",
                    onclick: move |_| on_shop.call(for_shop.clone()),
                    {t!("reels-shop")}
                }
            }
        }

        div { style: "position: absolute; right: 16px; bottom: 32px; display: flex; flex-direction: column; align-items: center; gap: 4px; color: white;",
            button {
                style: "width: 48px; height: 48px; border-radius: 50%; border: none; background: rgba(0, 0, 0, 0.35); font-size: 22px; cursor: pointer;",
                onclick: move |_| on_toggle_like.call(like_id.clone()),
                if liked { "❤️" } else { "🤍" }
            }
            span { style: "font-size: 12px;", "{likes}" }
        }
    }
}

