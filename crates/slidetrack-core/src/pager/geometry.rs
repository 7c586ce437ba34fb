//! Track geometry, measured fresh from the host for every operation.

use crate::host::{PagerHost, Viewport};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub panel_count: usize,
    pub viewport: Viewport,
    /// Document offset of the track's top edge
    pub track_top: f64,
}

impl TrackGeometry {
    pub fn new(panel_count: usize, viewport: Viewport, track_top: f64) -> Self {
        Self {
            panel_count,
            viewport,
            track_top,
        }
    }

    pub fn measure(host: &impl PagerHost, panel_count: usize) -> Self {
        Self::new(panel_count, host.viewport(), host.track_top())
    }

    /// Every panel is one viewport wide
    #[inline]
    pub fn panel_width(&self) -> f64 {
        self.viewport.width
    }

    pub fn total_width(&self) -> f64 {
        self.panel_width() * self.panel_count as f64
    }

    /// Vertical scroll distance the track converts into horizontal travel
    pub fn scrollable_length(&self) -> f64 {
        (self.total_width() - self.viewport.width).max(0.0)
    }

    /// Height the host must give the track element
    pub fn track_height(&self) -> f64 {
        self.scrollable_length() + self.viewport.height
    }

    /// Horizontal progress for a document scroll position
    pub fn progress(&self, scroll_y: f64) -> f64 {
        (scroll_y - self.track_top).clamp(0.0, self.scrollable_length())
    }

    /// Nearest panel for a progress value
    pub fn infer_index(&self, progress: f64) -> usize {
        let width = self.panel_width();
        if width <= 0.0 || self.panel_count == 0 {
            return 0;
        }
        let last = (self.panel_count - 1) as f64;
        (progress / width).round().clamp(0.0, last) as usize
    }

    /// Progress at which panel `index` is fully in view (may be negative for
    /// indices before the first panel)
    pub fn panel_start(&self, index: f64) -> f64 {
        self.panel_width() * index
    }

    /// Document scroll position that brings panel `index` into view
    pub fn panel_scroll_y(&self, index: usize) -> f64 {
        (self.track_top + self.panel_start(index as f64)).round()
    }

    /// The track straddles the viewport's vertical middle, so wheel input belongs to the pager
    pub fn in_zone(&self, scroll_y: f64) -> bool {
        let top = self.track_top - scroll_y;
        let bottom = top + self.track_height();
        let middle = self.viewport.height * 0.5;
        top < middle && bottom > middle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_panels() -> TrackGeometry {
        TrackGeometry::new(5, Viewport::new(1000.0, 800.0), 800.0)
    }

    #[test]
    fn test_lengths() {
        let geo = five_panels();
        assert_eq!(geo.scrollable_length(), 4000.0);
        assert_eq!(geo.track_height(), 4800.0);
    }

    #[test]
    fn test_progress_clamped() {
        let geo = five_panels();
        assert_eq!(geo.progress(0.0), 0.0);
        assert_eq!(geo.progress(1300.0), 500.0);
        assert_eq!(geo.progress(99_999.0), 4000.0);
    }

    #[test]
    fn test_infer_index_monotonic_and_in_range() {
        let geo = five_panels();
        let mut prev = 0;
        let mut p = 0.0;
        while p <= geo.scrollable_length() {
            let idx = geo.infer_index(p);
            assert!(idx >= prev, "index went backwards at {}", p);
            assert!(idx < geo.panel_count);
            prev = idx;
            p += 37.0;
        }
        assert_eq!(geo.infer_index(499.0), 0);
        assert_eq!(geo.infer_index(500.0), 1);
        assert_eq!(geo.infer_index(1e9), 4);
    }

    #[test]
    fn test_single_panel_has_no_travel() {
        let geo = TrackGeometry::new(1, Viewport::new(1000.0, 800.0), 0.0);
        assert_eq!(geo.scrollable_length(), 0.0);
        assert_eq!(geo.infer_index(250.0), 0);
    }

    #[test]
    fn test_zone() {
        let geo = five_panels();
        // Intro fills the screen
        assert!(!geo.in_zone(0.0));
        // Track top above the middle line
        assert!(geo.in_zone(401.0));
        assert!(geo.in_zone(4800.0));
        // Scrolled past the track bottom
        assert!(!geo.in_zone(5300.0));
    }

    #[test]
    fn test_panel_scroll_y_rounds() {
        let geo = TrackGeometry::new(3, Viewport::new(333.3, 600.0), 600.4);
        assert_eq!(geo.panel_scroll_y(1), 934.0);
    }
}
