use crate::config::StorefrontConfig;
use crate::models::{Cart, CartLine};
use crate::Screen;
use dioxus::prelude::*;
use dioxus_i18n::t;
use media_resolver::ResolvedImage;
use paged_feed::ItemId;

#[component]
pub fn CartScreen(on_navigate: EventHandler<Screen>) -> Element {
    let config = use_context::<StorefrontConfig>();
    let mut cart = use_context::<Signal<Cart>>();

    let lines = cart.read().lines().to_vec();
    let item_count = cart.read().item_count();
    let subtotal = cart.read().subtotal().format(&config.currency_symbol);
    let symbol = config.currency_symbol.clone();

    rsx! {
        div { style: "padding: 16px; max-width: 720px; margin: 0 auto;",
            h2 { style: "margin: 0 0 16px 0;", {t!("cart-title")} }

            if lines.is_empty() {
                div { class: "card", style: "text-align: center;",
                    p { style: "color: #888;", {t!("cart-empty")} }
                    button {
                        class: "btn-primary",
                        onclick: move |_| on_navigate.call(Screen::Home),
                        {t!("cart-continue")}
                    }
                }
            } else {
                for line in lines {
                    CartLineRow {
                        key: "{line.product.id}",
                        currency_symbol: symbol.clone(),
                        line,
                        on_increment: move |id: ItemId| cart.write().increment(&id),
                        on_decrement: move |id: ItemId| cart.write().decrement(&id),
                        on_remove: move |id: ItemId| cart.write().remove(&id),
                    }
                }

                div { class: "card",
                    div { style: "display: flex; justify-content: space-between; font-size: 18px; font-weight: 600;",
                        span { {t!("cart-subtotal")} " ({item_count} " {t!("cart-items")} ")" }
                        span { "{subtotal}" }
                    }
                    div { style: "display: flex; gap: 8px; margin-top: 16px;",
                        button {
                            class: "btn-secondary",
                            style: "flex: 1;",
                            onclick: move |_| cart.write().clear(),
                            {t!("cart-clear")}
                        }
                        button {
                            class: "btn-primary",
                            style: "flex: 1;",
                            onclick: move |_| on_navigate.call(Screen::Home),
                            {t!("cart-continue")}
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CartLineRow(
    line: CartLine,
    currency_symbol: String,
    on_increment: EventHandler<ItemId>,
    on_decrement: EventHandler<ItemId>,
    on_remove: EventHandler<ItemId>,
) -> Element {
    let product = line.product.clone();
    let unit = product.price.format(&currency_symbol);
    let total = line.total().format(&currency_symbol);
    let (inc_id, dec_id, remove_id) = (product.id.clone(), product.id.clone(), product.id.clone());

    rsx! {
        div { class: "card", style: "display: flex; gap: 12px; align-items: center;",
            div { style: "width: 72px; height: 72px; border-radius: 8px; overflow: hidden; flex-shrink: 0;",
                ResolvedImage { media: product.primary_media(), alt: product.name.clone() }
            }
            div { style: "flex: 1;",
                div { style: "font-weight: 600;", "{product.name}" }
                div { style: "font-size: 13px; color: #888;", "{unit}" }
                div { style: "display: flex; gap: 8px; align-items: center; margin-top: 6px;",
                    button {
                        class: "btn-secondary",
                        style: "padding: 2px 10px;",
                        onclick: move |_| on_decrement.call(dec_id.clone()),
                        "−"
                    }
                    span { "{line.quantity}" }
                    button {
                        class: "btn-secondary",
                        style: "padding: 2px 10px;",
                        onclick: move |_| on_increment.call(inc_id.clone()),
                        "+"
                    }
                    button {
                        style: "margin-left: auto; background: none; border: none; color: #c0392b; cursor: pointer;",
                        onclick: move |_| on_remove.call(remove_id.clone()),
                        {t!("cart-remove")}
                    }
                }
            }
            div { style: "font-weight: 600;", "{total}" }
        }
    }
}
