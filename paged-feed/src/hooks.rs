//! Dioxus hooks driving the loader, tracker and carousel state machines.

use crate::carousel::Carousel;
use crate::loader::{PageSource, PagedCollection};
use crate::models::{FeedItem, FilterKey, PageRequest};
use crate::visibility::VisibilityTracker;
use dioxus::prelude::*;
use std::time::Duration;

/// Sleep on whichever timer the target has
pub async fn sleep(duration: Duration) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
}

/// Handle returned by [`use_paged_collection`].
///
/// Every method goes through the collection's fetch gate, so calling
/// `load_more` from several visibility callbacks at once is harmless.
pub struct PagedHandle<T: 'static, S: 'static> {
    state: Signal<PagedCollection<T>>,
    source: CopyValue<S>,
}

impl<T: 'static, S: 'static> Clone for PagedHandle<T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static, S: 'static> Copy for PagedHandle<T, S> {}

impl<T, S> PagedHandle<T, S>
where
    T: FeedItem + 'static,
    S: PageSource<T> + Clone + 'static,
{
    pub fn state(&self) -> Signal<PagedCollection<T>> {
        self.state
    }

    pub fn start(&self) {
        let mut state = self.state;
        let request = state.write().start();
        if let Some(request) = request {
            self.dispatch(request);
        }
    }

    pub fn load_more(&self) {
        let mut state = self.state;
        let request = state.write().request_next();
        if let Some(request) = request {
            self.dispatch(request);
        }
    }

    pub fn set_filter(&self, filter: FilterKey) {
        let mut state = self.state;
        let request = state.write().set_filter(filter);
        self.dispatch(request);
    }

    pub fn retry(&self) {
        let mut state = self.state;
        let request = state.write().retry();
        if let Some(request) = request {
            self.dispatch(request);
        }
    }

    fn dispatch(&self, request: PageRequest) {
        let mut state = self.state;
        let source = self.source.cloned();
        spawn(async move {
            let result = source.fetch_page(&request).await;
            state.write().apply(&request, result);
        });
    }
}

/// Own a paged collection for the lifetime of the calling component and
/// load its first page on mount.
pub fn use_paged_collection<T, S>(source: S, filter: FilterKey, page_size: u32) -> PagedHandle<T, S>
where
    T: FeedItem + 'static,
    S: PageSource<T> + Clone + 'static,
{
    let state = use_signal(|| PagedCollection::new(filter, page_size));
    let source = use_hook(|| CopyValue::new(source));
    let handle = PagedHandle { state, source };

    use_effect(move || handle.start());

    handle
}

/// Visibility tracker whose length follows `len`
pub fn use_visibility_tracker(threshold: f64, len: usize) -> Signal<VisibilityTracker> {
    let mut tracker = use_signal(|| VisibilityTracker::new(threshold));
    use_effect(use_reactive((&len,), move |(len,)| {
        tracker.write().set_len(len);
    }));
    tracker
}

/// Carousel state whose length and window follow the arguments
pub fn use_carousel(len: usize, window: usize) -> Signal<Carousel> {
    let mut carousel = use_signal(|| Carousel::new(len).with_window(window));
    use_effect(use_reactive((&len, &window), move |(len, window)| {
        let mut carousel = carousel.write();
        carousel.set_len(len);
        carousel.set_window(window);
    }));
    carousel
}

/// Advance `carousel` every `interval` while the calling component is
/// mounted. Any index change re-arms the timer, and a manual navigation
/// while the timer is pending invalidates its token.
pub fn use_autoplay(carousel: Signal<Carousel>, interval: Duration) {
    let _ = use_resource(move || async move {
        if interval.is_zero() {
            return;
        }
        let token = carousel.read().autoplay_token();
        let _index = carousel.read().index();
        sleep(interval).await;
        let mut carousel = carousel;
        carousel.write().advance_autoplay(token);
    });
}
