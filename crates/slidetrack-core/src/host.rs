//! Boundary traits the engines query for geometry and write scroll through.
//!
//! Every engine operation reads these fresh; nothing measured here is cached
//! across frames.

/// Visible area of the hosting environment
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Environment hosting the panel pager: a vertically scrolling document that
/// contains the tall track
pub trait PagerHost {
    fn viewport(&self) -> Viewport;

    /// Document offset of the track's top edge
    fn track_top(&self) -> f64;

    /// Current document scroll position
    fn scroll_y(&self) -> f64;

    /// Write the document scroll position
    fn scroll_to(&mut self, y: f64);

    /// Motion-preference query
    fn prefers_reduced_motion(&self) -> bool {
        false
    }
}

/// Horizontal placement of one carousel item inside its track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemExtent {
    /// Offset of the item's left edge from the track origin
    pub left: f64,
    pub width: f64,
}

impl ItemExtent {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    #[inline]
    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Environment hosting the carousel strip
pub trait CarouselHost {
    /// Inner width of the carousel viewport
    fn viewport_width(&self) -> f64;

    /// Placement of the item at a display-ring position (clones included).
    /// `None` when the element is missing.
    fn item_extent(&self, position: usize) -> Option<ItemExtent>;

    fn prefers_reduced_motion(&self) -> bool {
        false
    }
}
