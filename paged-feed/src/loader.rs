//! Incremental loading of a filterable collection in fixed-size pages.
//!
//! [`PagedCollection`] holds no futures. Callers ask it for a
//! [`PageRequest`], perform the fetch however they like and hand the result
//! back through [`PagedCollection::apply`]. This keeps the state usable from
//! a UI signal, where a mutable borrow must not be held across an await.

use crate::models::{FeedItem, FilterKey, ItemId, LoadStatus, Page, PageRequest};
use std::collections::HashSet;
use std::fmt::Display;
use std::future::Future;

/// Something that can fetch one page of a collection
pub trait PageSource<T> {
    type Error: Display;

    fn fetch_page(
        &self,
        request: &PageRequest,
    ) -> impl Future<Output = Result<Page<T>, Self::Error>>;
}

/// What happened when a completed fetch was handed back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Items were appended and more pages may exist
    Appended { count: usize },
    /// Items were appended and the collection is now complete
    Exhausted { count: usize },
    /// The fetch failed; loaded items are untouched
    Failed(String),
    /// The response belongs to a superseded request and was dropped
    Stale,
}

#[derive(Debug, Clone)]
pub struct PagedCollection<T> {
    filter: FilterKey,
    page_size: u32,
    next_page: u32,
    items: Vec<T>,
    seen: HashSet<ItemId>,
    total: Option<u64>,
    exhausted: bool,
    in_flight: Option<PageRequest>,
    generation: u64,
    status: LoadStatus,
    started: bool,
}

impl<T> PagedCollection<T> {
    /// Create an empty collection. A page size of zero is treated as one.
    pub fn new(filter: FilterKey, page_size: u32) -> Self {
        Self {
            filter,
            page_size: page_size.max(1),
            next_page: 1,
            items: Vec::new(),
            seen: HashSet::new(),
            total: None,
            exhausted: false,
            in_flight: None,
            generation: 0,
            status: LoadStatus::Idle,
            started: false,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn filter(&self) -> &FilterKey {
        &self.filter
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// The next page number that would be requested
    pub fn cursor(&self) -> u32 {
        self.next_page
    }

    pub fn total(&self) -> Option<u64> {
        self.total
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn has_more(&self) -> bool {
        !self.exhausted
    }

    /// Valid response with nothing in it: show the empty state
    pub fn is_empty_result(&self) -> bool {
        self.exhausted && self.items.is_empty()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Issue the request for page 1 the first time this is called.
    /// Later calls return `None`; use [`Self::request_next`] to advance.
    pub fn start(&mut self) -> Option<PageRequest> {
        if self.started {
            return None;
        }
        self.started = true;
        self.request_next()
    }

    /// Ask for the next page.
    ///
    /// Returns `None` while a fetch is in flight, after a failure (see
    /// [`Self::retry`]) and once the collection is exhausted. Dropped
    /// triggers are not queued.
    pub fn request_next(&mut self) -> Option<PageRequest> {
        if self.exhausted || self.in_flight.is_some() {
            return None;
        }
        if matches!(self.status, LoadStatus::Failed(_)) {
            return None;
        }
        if let Some(total) = self.total {
            if self.items.len() as u64 >= total {
                self.exhausted = true;
                return None;
            }
        }
        self.started = true;
        Some(self.issue())
    }

    /// Switch to a different filter (or reload the current one).
    ///
    /// Clears items, resets the cursor and supersedes whatever is in
    /// flight. Always returns the page 1 request for the new filter.
    pub fn set_filter(&mut self, filter: FilterKey) -> PageRequest {
        log::debug!("Filter change {} -> {}", self.filter, filter);
        self.filter = filter;
        self.items.clear();
        self.seen.clear();
        self.next_page = 1;
        self.total = None;
        self.exhausted = false;
        self.in_flight = None;
        self.status = LoadStatus::Idle;
        self.generation += 1;
        self.started = true;
        self.issue()
    }

    /// Re-issue the page that failed last
    pub fn retry(&mut self) -> Option<PageRequest> {
        if self.in_flight.is_some() || !matches!(self.status, LoadStatus::Failed(_)) {
            return None;
        }
        self.status = LoadStatus::Idle;
        self.request_next()
    }

    fn issue(&mut self) -> PageRequest {
        let request = PageRequest {
            filter: self.filter.clone(),
            page: self.next_page,
            page_size: self.page_size,
            generation: self.generation,
        };
        log::debug!(
            "Requesting page {} (filter {}, generation {})",
            request.page,
            request.filter,
            request.generation
        );
        self.in_flight = Some(request.clone());
        self.status = LoadStatus::Loading;
        request
    }
}

impl<T: FeedItem> PagedCollection<T> {
    /// Hand back the result of a fetch issued by this collection
    pub fn apply<E: Display>(
        &mut self,
        request: &PageRequest,
        result: Result<Page<T>, E>,
    ) -> ApplyOutcome {
        if request.generation != self.generation || self.in_flight.as_ref() != Some(request) {
            log::debug!(
                "Dropping stale page {} for filter {} (generation {}, current {})",
                request.page,
                request.filter,
                request.generation,
                self.generation
            );
            return ApplyOutcome::Stale;
        }
        self.in_flight = None;

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                let msg = e.to_string();
                log::error!("Failed to load page {} ({}): {}", request.page, request.filter, msg);
                self.status = LoadStatus::Failed(msg.clone());
                return ApplyOutcome::Failed(msg);
            }
        };

        let received = page.items.len();
        if page.total.is_some() {
            self.total = page.total;
        }

        let mut count = 0;
        for item in page.items {
            if self.seen.insert(item.item_id().clone()) {
                self.items.push(item);
                count += 1;
            }
        }
        self.next_page += 1;
        self.status = LoadStatus::Idle;

        let reached_total = self
            .total
            .is_some_and(|total| self.items.len() as u64 >= total);
        if received < self.page_size as usize || reached_total {
            self.exhausted = true;
            ApplyOutcome::Exhausted { count }
        } else {
            ApplyOutcome::Appended { count }
        }
    }

    /// Fetch and apply the next page in one go. Returns `None` when the
    /// gate refused to issue a request.
    pub async fn load_next_with<S>(&mut self, source: &S) -> Option<ApplyOutcome>
    where
        S: PageSource<T>,
    {
        let request = self.request_next()?;
        let result = source.fetch_page(&request).await;
        Some(self.apply(&request, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: ItemId,
    }

    impl FeedItem for Item {
        fn item_id(&self) -> &ItemId {
            &self.id
        }
    }

    fn items(prefix: &str, range: std::ops::Range<usize>) -> Vec<Item> {
        range
            .map(|i| Item {
                id: ItemId::new(format!("{}-{}", prefix, i)),
            })
            .collect()
    }

    fn ok(items: Vec<Item>, total: Option<u64>) -> Result<Page<Item>, String> {
        Ok(Page::new(items, total))
    }

    #[test]
    fn test_gate_blocks_overlapping_requests() {
        let mut c = PagedCollection::<Item>::new(FilterKey::All, 12);
        let first = c.start().unwrap();
        assert_eq!(first.page, 1);
        assert!(c.request_next().is_none());
        assert!(c.request_next().is_none());
        assert!(c.start().is_none());

        c.apply(&first, ok(items("a", 0..12), None));
        let second = c.request_next().unwrap();
        assert_eq!(second.page, 2);
        assert!(c.request_next().is_none());
    }

    #[test]
    fn test_total_and_short_page_example() {
        let mut c = PagedCollection::<Item>::new(FilterKey::All, 12);

        let r = c.start().unwrap();
        assert_eq!(c.apply(&r, ok(items("a", 0..12), Some(40))), ApplyOutcome::Appended { count: 12 });
        assert!(c.has_more());

        let r = c.request_next().unwrap();
        c.apply(&r, ok(items("a", 12..24), Some(40)));
        assert_eq!(c.len(), 24);
        assert!(c.has_more());

        let r = c.request_next().unwrap();
        c.apply(&r, ok(items("a", 24..36), Some(40)));
        assert!(c.has_more());

        let r = c.request_next().unwrap();
        assert_eq!(r.page, 4);
        assert_eq!(c.apply(&r, ok(items("a", 36..40), Some(40))), ApplyOutcome::Exhausted { count: 4 });
        assert!(!c.has_more());
        assert_eq!(c.len(), 40);
        assert!(c.request_next().is_none());
    }

    #[test]
    fn test_short_page_exhausts_without_total() {
        let mut c = PagedCollection::<Item>::new(FilterKey::All, 12);
        let r = c.start().unwrap();
        c.apply(&r, ok(items("a", 0..5), None));
        assert!(c.is_exhausted());
        assert!(c.request_next().is_none());
    }

    #[test]
    fn test_full_first_page_matching_total_is_terminal() {
        let mut c = PagedCollection::<Item>::new(FilterKey::All, 12);
        let r = c.start().unwrap();
        assert_eq!(c.apply(&r, ok(items("a", 0..12), Some(12))), ApplyOutcome::Exhausted { count: 12 });
        assert!(c.request_next().is_none());
    }

    #[test]
    fn test_empty_result_is_terminal() {
        let mut c = PagedCollection::<Item>::new(FilterKey::Category("brooches".into()), 12);
        let r = c.start().unwrap();
        c.apply(&r, ok(Vec::new(), Some(0)));
        assert!(c.is_empty_result());
    }

    #[test]
    fn test_filter_change_discards_stale_page() {
        let mut c = PagedCollection::<Item>::new(FilterKey::All, 12);
        let r1 = c.start().unwrap();
        c.apply(&r1, ok(items("all", 0..12), None));
        let r2 = c.request_next().unwrap();
        c.apply(&r2, ok(items("all", 12..24), None));
        let pending_all = c.request_next().unwrap();
        assert_eq!(pending_all.page, 3);

        let rings = c.set_filter(FilterKey::Category("rings".into()));
        assert_eq!(rings.page, 1);
        assert_eq!(c.cursor(), 1);
        assert!(c.is_empty());

        // The old page-3 response arrives late
        assert_eq!(c.apply(&pending_all, ok(items("all", 24..36), None)), ApplyOutcome::Stale);
        assert!(c.is_empty());
        assert!(c.is_loading());

        c.apply(&rings, ok(items("ring", 0..3), None));
        assert_eq!(c.len(), 3);
        assert!(c.items().iter().all(|i| i.id.as_str().starts_with("ring")));
    }

    #[test]
    fn test_stale_response_after_refilter_to_same_key() {
        let mut c = PagedCollection::<Item>::new(FilterKey::All, 12);
        let old = c.start().unwrap();
        let fresh = c.set_filter(FilterKey::All);
        assert_eq!(old.page, fresh.page);
        assert_eq!(c.apply(&old, ok(items("old", 0..12), None)), ApplyOutcome::Stale);
        assert_eq!(c.apply(&fresh, ok(items("new", 0..12), None)), ApplyOutcome::Appended { count: 12 });
    }

    #[test]
    fn test_failure_keeps_data_and_allows_retry() {
        let mut c = PagedCollection::<Item>::new(FilterKey::All, 12);
        let r = c.start().unwrap();
        c.apply(&r, ok(items("a", 0..12), None));

        let r = c.request_next().unwrap();
        let outcome = c.apply(&r, Err::<Page<Item>, _>("error loading"));
        assert_eq!(outcome, ApplyOutcome::Failed("error loading".into()));
        assert_eq!(c.len(), 12);
        assert!(!c.is_exhausted());
        assert_eq!(c.error(), Some("error loading"));

        // Visibility alone does not hammer a failing endpoint
        assert!(c.request_next().is_none());

        let again = c.retry().unwrap();
        assert_eq!(again.page, 2);
        assert_eq!(again.filter, FilterKey::All);
        c.apply(&again, ok(items("a", 12..24), None));
        assert_eq!(c.len(), 24);
        assert!(c.error().is_none());
    }

    #[test]
    fn test_retry_without_failure_is_noop() {
        let mut c = PagedCollection::<Item>::new(FilterKey::All, 12);
        assert!(c.retry().is_none());
        let _ = c.start();
        assert!(c.retry().is_none());
    }

    #[test]
    fn test_duplicate_ids_are_dropped() {
        let mut c = PagedCollection::<Item>::new(FilterKey::All, 3);
        let r = c.start().unwrap();
        c.apply(&r, ok(items("a", 0..3), None));
        let r = c.request_next().unwrap();
        let outcome = c.apply(&r, ok(items("a", 2..5), None));
        assert_eq!(outcome, ApplyOutcome::Appended { count: 2 });
        assert_eq!(c.len(), 5);
    }

    struct CountingSource {
        calls: Cell<usize>,
        pages: Vec<Vec<Item>>,
    }

    impl PageSource<Item> for CountingSource {
        type Error = String;

        async fn fetch_page(&self, request: &PageRequest) -> Result<Page<Item>, String> {
            self.calls.set(self.calls.get() + 1);
            self.pages
                .get(request.page as usize - 1)
                .cloned()
                .map(|items| Page::new(items, None))
                .ok_or_else(|| "no such page".to_string())
        }
    }

    #[tokio::test]
    async fn test_load_next_with_source_stops_when_exhausted() {
        let source = CountingSource {
            calls: Cell::new(0),
            pages: vec![items("a", 0..4), items("a", 4..8), items("a", 8..10)],
        };
        let mut c = PagedCollection::<Item>::new(FilterKey::All, 4);

        while c.load_next_with(&source).await.is_some() {}

        assert_eq!(c.len(), 10);
        assert!(c.is_exhausted());
        assert_eq!(source.calls.get(), 3);
        assert!(c.load_next_with(&source).await.is_none());
        assert_eq!(source.calls.get(), 3);
    }
}
