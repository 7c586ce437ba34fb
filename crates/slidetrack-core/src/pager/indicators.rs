//! "Next" and "return to top" affordance visibility.

use super::geometry::TrackGeometry;
use crate::config::PagerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Indicators {
    pub next_visible: bool,
    pub return_top_visible: bool,
}

impl Indicators {
    /// Both affordances hidden (page load, before the first scroll sync)
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Visibility for a scroll position and its track progress.
    ///
    /// "Next" shows once the track is reached and before the last panel, but
    /// while travelling from the second-to-last panel to the last it stays
    /// visible only until that panel has scrolled past `reveal_ratio`.
    pub fn compute(
        geo: &TrackGeometry,
        config: &PagerConfig,
        progress: f64,
        scroll_y: f64,
    ) -> Self {
        let count = geo.panel_count as f64;
        let width = geo.panel_width();
        let reached = scroll_y >= geo.track_top - config.zone_tolerance;

        let last_start = geo.panel_start(count - 1.0);
        let penultimate_start = geo.panel_start(count - 2.0);
        let reveal_at = penultimate_start + width * (1.0 - config.reveal_ratio);

        let mut next_visible = reached && progress < last_start;
        if next_visible && progress > penultimate_start && progress < last_start {
            next_visible = progress <= reveal_at;
        }

        Self {
            next_visible,
            return_top_visible: reached,
        }
    }
}
