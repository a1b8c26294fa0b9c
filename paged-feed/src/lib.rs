//! # Paged Feed
//!
//! State machines behind the storefront's scrolling surfaces:
//! - [`PagedCollection`]: fixed-size page loading with a fetch gate,
//!   filter changes and stale-response discard
//! - [`VisibilityTracker`]: single in-focus item out of many rendered ones
//! - [`Carousel`]: cyclic index with autoplay and manual override
//!
//! None of these own a runtime. With the `components` feature the [`hooks`]
//! module drives them from Dioxus.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use paged_feed::{FilterKey, PagedCollection};
//!
//! let mut products = PagedCollection::new(FilterKey::All, 12);
//! if let Some(request) = products.start() {
//!     let result = api.fetch_page(&request).await;
//!     products.apply(&request, result);
//! }
//! ```

pub mod carousel;
pub mod loader;
pub mod models;
pub mod visibility;

#[cfg(feature = "components")]
pub mod hooks;

pub use carousel::{Carousel, ResponsiveWindow};
pub use loader::{ApplyOutcome, PageSource, PagedCollection};
pub use models::{FeedItem, FilterKey, ItemId, LoadStatus, Page, PageRequest, PageResponse};
pub use visibility::{Activation, TrackerEvent, VisibilityTracker};

#[cfg(feature = "components")]
pub use hooks::{
    sleep, use_autoplay, use_carousel, use_paged_collection, use_visibility_tracker, PagedHandle,
};
