//! Cyclic index management for slide and category carousels.

/// Carousel position over `len` items shown `window` at a time.
///
/// The index counts pages, not items: with a window of 1 (hero slider)
/// it is the slide index, with a larger window (category strip) it is the
/// group index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    window: usize,
    index: usize,
    autoplay_token: u64,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            window: 1,
            index: 0,
            autoplay_token: 0,
        }
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.set_window(window);
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn page_count(&self) -> usize {
        self.len.div_ceil(self.window)
    }

    /// Item range visible on the current page
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let start = (self.index * self.window).min(self.len);
        let end = (start + self.window).min(self.len);
        start..end
    }

    /// Changes whenever the user navigates manually. An autoplay timer
    /// captures it when armed and passes it to [`Self::advance_autoplay`].
    pub fn autoplay_token(&self) -> u64 {
        self.autoplay_token
    }

    pub fn next(&mut self) {
        self.step(1);
        self.autoplay_token += 1;
    }

    pub fn prev(&mut self) {
        let pages = self.page_count();
        if pages == 0 {
            return;
        }
        self.index = (self.index + pages - 1) % pages;
        self.autoplay_token += 1;
    }

    pub fn go_to(&mut self, index: usize) {
        let pages = self.page_count();
        if pages == 0 {
            return;
        }
        self.index = index % pages;
        self.autoplay_token += 1;
    }

    /// Timer tick. Advances only if nobody navigated since the timer was
    /// armed with `token`.
    pub fn advance_autoplay(&mut self, token: u64) -> bool {
        if token != self.autoplay_token || self.page_count() < 2 {
            return false;
        }
        self.step(1);
        true
    }

    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.reclamp();
    }

    pub fn set_window(&mut self, window: usize) {
        self.window = window.max(1);
        self.reclamp();
    }

    fn step(&mut self, by: usize) {
        let pages = self.page_count();
        if pages == 0 {
            return;
        }
        self.index = (self.index + by) % pages;
    }

    fn reclamp(&mut self) {
        let pages = self.page_count();
        if pages == 0 {
            self.index = 0;
        } else if self.index >= pages {
            self.index = pages - 1;
        }
    }
}

/// Viewport-width breakpoints mapping to a carousel window size
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsiveWindow {
    /// `(max_width_exclusive, window)` in ascending width order
    breakpoints: Vec<(f64, usize)>,
    widest: usize,
}

impl ResponsiveWindow {
    pub fn new(mut breakpoints: Vec<(f64, usize)>, widest: usize) -> Self {
        breakpoints.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self {
            breakpoints,
            widest: widest.max(1),
        }
    }

    pub fn window_for(&self, width: f64) -> usize {
        self.breakpoints
            .iter()
            .find(|(max_width, _)| width < *max_width)
            .map(|(_, window)| (*window).max(1))
            .unwrap_or(self.widest)
    }
}

impl Default for ResponsiveWindow {
    fn default() -> Self {
        Self::new(vec![(640.0, 2), (1024.0, 4)], 6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles_back_to_start() {
        let mut c = Carousel::new(5);
        c.go_to(2);
        for _ in 0..5 {
            c.next();
        }
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_prev_from_zero_wraps() {
        let mut c = Carousel::new(4);
        c.prev();
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn test_go_to_wraps() {
        let mut c = Carousel::new(3);
        c.go_to(7);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        c.go_to(4);
        assert!(!c.advance_autoplay(c.autoplay_token()));
        assert_eq!(c.index(), 0);
        assert_eq!(c.visible_range(), 0..0);
    }

    #[test]
    fn test_manual_navigation_invalidates_armed_timer() {
        let mut c = Carousel::new(3);
        let armed = c.autoplay_token();
        c.go_to(2);
        assert!(!c.advance_autoplay(armed));
        assert_eq!(c.index(), 2);

        let rearmed = c.autoplay_token();
        assert!(c.advance_autoplay(rearmed));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_autoplay_does_not_bump_token() {
        let mut c = Carousel::new(3);
        let token = c.autoplay_token();
        assert!(c.advance_autoplay(token));
        assert!(c.advance_autoplay(token));
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_grouped_pages() {
        let mut c = Carousel::new(10).with_window(4);
        assert_eq!(c.page_count(), 3);
        c.prev();
        assert_eq!(c.index(), 2);
        assert_eq!(c.visible_range(), 8..10);
    }

    #[test]
    fn test_window_growth_reclamps() {
        let mut c = Carousel::new(12).with_window(2);
        c.go_to(5);
        c.set_window(6);
        assert_eq!(c.page_count(), 2);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_len_shrink_reclamps() {
        let mut c = Carousel::new(5);
        c.go_to(4);
        c.set_len(2);
        assert_eq!(c.index(), 1);
        c.set_len(0);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_responsive_window() {
        let w = ResponsiveWindow::default();
        assert_eq!(w.window_for(375.0), 2);
        assert_eq!(w.window_for(800.0), 4);
        assert_eq!(w.window_for(1440.0), 6);
    }
}
