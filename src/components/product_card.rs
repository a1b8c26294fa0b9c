use crate::models::Product;
use dioxus::prelude::*;
use dioxus_i18n::t;
use media_resolver::ResolvedImage;
use paged_feed::ItemId;

#[component]
pub fn ProductCard(
    product: Product,
    in_cart: bool,
    liked: bool,
    currency_symbol: String,
    on_add_to_cart: EventHandler<Product>,
    on_buy_now: EventHandler<Product>,
    on_toggle_like: EventHandler<ItemId>,
) -> Element {
    let price = product.price.format(&currency_symbol);
    let compare_at = product
        .compare_at_price
        .filter(|p| *p > product.price)
        .map(|p| p.format(&currency_symbol));
    // Explicit badge wins over the computed discount
    let badge = product.badge.clone().or_else(|| {
        product
            .discount_percent()
            .filter(|pct| *pct > 0)
            .map(|pct| format!("{}% {}", pct, t!("product-off")))
    });
    let in_stock = product.in_stock;
    let like_id = product.id.clone();
    let for_cart = product.clone();
    let for_buy = product.clone();

    rsx! {
        div { class: "product-card",
            div { class: "product-image",
                ResolvedImage { media: product.primary_media(), alt: product.name.clone() }

                if let Some(badge) = badge {
                    span { style: "position: absolute; top: 8px; left: 8px; padding: 4px 8px; border-radius: 6px; background: #8c6b3f; color: white; font-size: 12px;",
                        "{badge}"
                    }
                }

                button {
                    style: "position: absolute; top: 8px; right: 8px; width: 36px; height: 36px; border-radius: 50%; border: none; background: rgba(255, 255, 255, 0.9); cursor: pointer; font-size: 18px;",
                    onclick: move |_| on_toggle_like.call(like_id.clone()),
                    if liked { "❤️" } else { "🤍" }
                }
            }

            div { style: "padding: 12px; display: flex; flex-direction: column; gap: 6px;",
                div { style: "font-size: 15px; font-weight: 600;", "{product.name}" }
                div { style: "display: flex; gap: 8px; align-items: baseline;",
                    span { style: "font-size: 16px; color: #8c6b3f; font-weight: 700;", "{price}" }
                    if let Some(compare_at) = compare_at {
                        span { style: "font-size: 13px; color: #999; text-decoration: line-through;",
                            "{compare_at}"
                        }
                    }
                }

                if in_stock {
                    div { style: "display: flex; gap: 8px;",
                        button {
                            class: "btn-secondary",
                            style: "flex: 1; padding: 8px;",
                            onclick: move |_| on_add_to_cart.call(for_cart.clone()),
                            if in_cart { {t!("product-in-cart")} } else { {t!("product-add-to-cart")} }
                        }
                        button {
                            class: "btn-primary",
                            style: "flex: 1; padding: 8px;",
                            onclick: move |_| on_buy_now.call(for_buy.clone()),
                            {t!("product-buy-now")}
                        }
                    }
                } else {
                    div { style: "padding: 8px; text-align: center; color: #999; font-size: 13px;",
                        {t!("product-out-of-stock")}
                    }
                }
            }
        }
    }
}
