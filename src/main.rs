use dioxus::prelude::*;
use dioxus_i18n::prelude::*;
use dioxus_i18n::t;

mod components;
mod config;
mod error;
mod i18n;
mod models;
mod services;

use components::{CartScreen, HomeScreen, NavigationBar, ReelsScreen};
use config::StorefrontConfig;
use media_resolver::MediaResolver;
use models::{Cart, Favorites, Session};
use services::CatalogClient;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = StorefrontConfig::load().unwrap_or_else(|e| {
        log::error!("Falling back to default config: {}", e);
        StorefrontConfig::default()
    });

    LaunchBuilder::new().with_context(config).launch(App);
}

/// Screen navigation
#[derive(Clone, PartialEq, Debug)]
pub enum Screen {
    Home,
    Reels,
    Cart,
}

#[component]
fn App() -> Element {
    use_init_i18n(i18n::init_i18n);
    let config = use_context::<StorefrontConfig>();

    let client = use_hook(|| {
        CatalogClient::new(&config, Session::new(config.auth_token.clone())).map_err(|e| {
            log::error!("Failed to create API client: {}", e);
            e.user_message()
        })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        match client {
            Ok(client) => rsx! {
                Storefront { client }
            },
            Err(message) => rsx! {
                div { class: "card", style: "margin: 32px auto; max-width: 480px; text-align: center;",
                    h2 { {t!("error-startup")} }
                    p { style: "color: #c0392b;", "{message}" }
                }
            },
        }
    }
}

#[component]
fn Storefront(client: CatalogClient) -> Element {
    let config = use_context::<StorefrontConfig>();
    use_context_provider(|| client.clone());
    use_context_provider(|| MediaResolver::new(config.media_config()));
    let cart = use_context_provider(|| Signal::new(Cart::default()));
    use_context_provider(|| Signal::new(Favorites::default()));

    let mut current_screen = use_signal(|| Screen::Home);

    rsx! {
        div { style: "display: flex; flex-direction: column; height: 100vh; font-family: sans-serif; background: #faf7f2;",

            // Main Content
            div { style: "flex: 1; overflow-y: auto;",
                match current_screen() {
                    Screen::Home => rsx! {
                        HomeScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::Reels => rsx! {
                        ReelsScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::Cart => rsx! {
                        CartScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                }
            }

            // Bottom Navigation Bar
            NavigationBar {
                current_screen: current_screen(),
                cart_count: cart.read().item_count(),
                on_navigate: move |screen| current_screen.set(screen),
            }
        }
    }
}
