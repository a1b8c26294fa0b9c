use crate::Screen;
use dioxus::prelude::*;
use dioxus_i18n::t;

const TAB_ACTIVE: &str = "flex: 1; padding: 12px; margin: 0 5px; border: none; border-radius: 8px; cursor: pointer; font-size: 14px; text-align: center; background: #8c6b3f; color: #ffffff;";
const TAB_IDLE: &str = "flex: 1; padding: 12px; margin: 0 5px; border: none; border-radius: 8px; cursor: pointer; font-size: 14px; text-align: center; background: #ffffff; color: #333;";

#[component]
pub fn NavigationBar(
    current_screen: Screen,
    cart_count: u32,
    on_navigate: EventHandler<Screen>,
) -> Element {
    rsx! {
        div { style: "display: flex; justify-content: space-around; padding: 10px; background: #f0ebe4; border-top: 1px solid #ddd;",

            button {
                style: if matches!(current_screen, Screen::Home) { TAB_ACTIVE } else { TAB_IDLE },
                onclick: move |_| on_navigate.call(Screen::Home),
                "💍 "
                {t!("nav-home")}
            }

            button {
                style: if matches!(current_screen, Screen::Reels) { TAB_ACTIVE } else { TAB_IDLE },
                onclick: move |_| on_navigate.call(Screen::Reels),
                "🎬 "
                {t!("nav-reels")}
            }

            button {
                style: if matches!(current_screen, Screen::Cart) { TAB_ACTIVE } else { TAB_IDLE },
                onclick: move |_| on_navigate.call(Screen::Cart),
                "🛍️ "
                {t!("nav-cart")}
                if cart_count > 0 {
                    span { style: "margin-left: 6px; padding: 0 6px; border-radius: 10px; background: #c0392b; color: white; font-size: 12px;",
                        "{cart_count}"
                    }
                }
            }
        }
    }
}
