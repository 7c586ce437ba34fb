//! Terminal-side hosts for the engines.
//!
//! The terminal is modelled as a document made of an intro screen followed by
//! the panel track. Engine geometry is expressed in virtual pixels: one cell
//! is `cell_scale` pixels in both directions.

use ratatui::layout::Rect;
use slidetrack_core::{CarouselHost, ItemExtent, PagerHost, Viewport};

/// Scrollable page hosting the pager
#[derive(Debug, Clone)]
pub struct PageSurface {
    viewport: Viewport,
    scroll_y: f64,
    /// Total document height
    content_height: f64,
    reduced_motion: bool,
}

impl PageSurface {
    pub fn new(viewport: Viewport, content_height: f64, reduced_motion: bool) -> Self {
        Self {
            viewport,
            scroll_y: 0.0,
            content_height,
            reduced_motion,
        }
    }

    /// Apply a new viewport and document height, keeping the scroll position in range
    pub fn resize(&mut self, viewport: Viewport, content_height: f64) {
        self.viewport = viewport;
        self.content_height = content_height;
        self.clamp();
    }

    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    pub fn max_scroll(&self) -> f64 {
        (self.content_height - self.viewport.height).max(0.0)
    }

    /// Default browser-style scroll for input the pager does not take
    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.scroll_y + delta);
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    fn clamp(&mut self) {
        self.scroll_y = self.scroll_y.clamp(0.0, self.max_scroll());
    }
}

impl PagerHost for PageSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The intro screen is exactly one viewport tall
    fn track_top(&self) -> f64 {
        self.viewport.height
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y;
        self.clamp();
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

/// Card strip hosting the carousel
#[derive(Debug, Clone)]
pub struct CardStrip {
    /// Visible strip width in cells
    width: u16,
    card_width: u16,
    card_gap: u16,
    /// Display positions, clones included
    positions: usize,
    scale: f64,
    reduced_motion: bool,
}

impl CardStrip {
    pub fn new(width: u16, card_width: u16, card_gap: u16, originals: usize, scale: f64) -> Self {
        Self {
            width,
            card_width,
            card_gap,
            positions: originals + 2,
            scale,
            reduced_motion: false,
        }
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn card_width(&self) -> u16 {
        self.card_width
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    /// Left edge of a display position in cells, before translation
    pub fn card_left(&self, position: usize) -> i32 {
        position as i32 * (self.card_width as i32 + self.card_gap as i32)
    }
}

impl CarouselHost for CardStrip {
    fn viewport_width(&self) -> f64 {
        self.width as f64 * self.scale
    }

    fn item_extent(&self, position: usize) -> Option<ItemExtent> {
        (position < self.positions).then(|| {
            ItemExtent::new(
                self.card_left(position) as f64 * self.scale,
                self.card_width as f64 * self.scale,
            )
        })
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

/// Card height in rows
pub const CARD_HEIGHT: u16 = 7;

/// Regions of the carousel panel: prev button, card strip, next button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselLayout {
    pub prev: Rect,
    pub strip: Rect,
    pub next: Rect,
}

/// Carousel regions inside a panel of the given area
pub fn carousel_layout(panel: Rect, card_height: u16) -> CarouselLayout {
    // Inside the border, below the heading lines
    let inner_x = panel.x.saturating_add(1);
    let inner_width = panel.width.saturating_sub(2);
    let y = panel.y.saturating_add(4);
    let height = card_height.min(panel.height.saturating_sub(5));

    let button = 3u16.min(inner_width / 2);
    let strip_width = inner_width.saturating_sub(button * 2);

    CarouselLayout {
        prev: Rect::new(inner_x, y, button, height),
        strip: Rect::new(inner_x + button, y, strip_width, height),
        next: Rect::new(inner_x + button + strip_width, y, button, height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_is_clamped_to_document() {
        let mut page = PageSurface::new(Viewport::new(1200.0, 400.0), 2000.0, false);
        page.scroll_to(5000.0);
        assert_eq!(page.scroll_y(), 1600.0);
        page.scroll_by(-9000.0);
        assert_eq!(page.scroll_y(), 0.0);
    }

    #[test]
    fn test_track_follows_intro() {
        let page = PageSurface::new(Viewport::new(1200.0, 400.0), 400.0, false);
        assert_eq!(page.track_top(), 400.0);
    }

    #[test]
    fn test_resize_clamps_scroll() {
        let mut page = PageSurface::new(Viewport::new(1200.0, 400.0), 4000.0, false);
        page.scroll_to(3600.0);
        page.resize(Viewport::new(1200.0, 400.0), 2000.0);
        assert_eq!(page.scroll_y(), 1600.0);
    }

    #[test]
    fn test_strip_extents() {
        let strip = CardStrip::new(100, 24, 2, 5, 10.0);
        assert_eq!(strip.viewport_width(), 1000.0);
        assert_eq!(strip.item_extent(2), Some(ItemExtent::new(520.0, 240.0)));
        assert_eq!(strip.item_extent(6).map(|e| e.left), Some(1560.0));
        assert_eq!(strip.item_extent(7), None);
    }

    #[test]
    fn test_carousel_layout_fits_panel() {
        let layout = carousel_layout(Rect::new(0, 0, 120, 30), 7);
        assert_eq!(layout.prev, Rect::new(1, 4, 3, 7));
        assert_eq!(layout.strip, Rect::new(4, 4, 112, 7));
        assert_eq!(layout.next.right(), 119);
    }
}
