use super::{CategoryCarousel, HeroSlider, ProductFeed};
use crate::Screen;
use dioxus::prelude::*;
use paged_feed::FilterKey;

#[component]
pub fn HomeScreen(on_navigate: EventHandler<Screen>) -> Element {
    let mut filter = use_signal(|| FilterKey::All);

    rsx! {
        div { style: "padding: 16px; max-width: 1200px; margin: 0 auto; display: flex; flex-direction: column; gap: 16px;",
            HeroSlider {}
            CategoryCarousel {
                selected: filter(),
                on_select: move |key| filter.set(key),
            }
            ProductFeed { filter: filter(), on_navigate }
        }
    }
}
