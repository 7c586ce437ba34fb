//! Panel navigation engine
//!
//! Converts vertical scrolling through a tall track into a horizontal offset
//! across N full-width panels, and turns wheel, key and button input into
//! discrete one-panel steps. A step scrolls the document to the panel's
//! position with an eased animation and holds a lock until that animation
//! settles (or a safety deadline passes), so at most one step is in flight.

mod geometry;
mod indicators;

pub use geometry::TrackGeometry;
pub use indicators::Indicators;

use std::time::Duration;

use tracing::{debug, trace};

use crate::config::{MotionConfig, PagerConfig};
use crate::host::PagerHost;
use crate::input::{FocusTarget, InputOutcome, Key, KeyPress};
use crate::motion::{CompletionGuard, OffsetSmoother, ScrollAnimation, TweenStep};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerPhase {
    Idle,
    /// A programmatic transition is in flight; commits and index inference are suspended
    Locked,
}

/// Render snapshot for the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagerView {
    /// Horizontal translation to apply to the track contents
    pub translate_x: f64,
    /// Height to give the track element
    pub track_height: f64,
    pub current_index: usize,
    pub locked: bool,
    pub indicators: Indicators,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScrollKind {
    /// Step to a panel
    Panel { index: usize },
    /// Back to the top of the page, ahead of the track
    Intro,
    /// Unlocked scroll to the top used by the narrow layout
    Plain,
}

#[derive(Debug, Clone)]
struct ActiveScroll {
    kind: ScrollKind,
    animation: ScrollAnimation,
    guard: Option<CompletionGuard>,
}

#[derive(Debug, Clone)]
pub struct PanelPager {
    config: PagerConfig,
    motion: MotionConfig,
    panel_count: usize,
    current_index: usize,
    lock: bool,
    accumulated_delta: f64,
    /// Skip indicator recomputation on scroll until the running step lands
    suppress_indicator_update: bool,
    /// Recompute indicators once the running step lands
    pending_indicator_reveal: bool,
    indicators: Indicators,
    offset: OffsetSmoother,
    track_height: f64,
    transition: Option<ActiveScroll>,
}

impl PanelPager {
    /// Set up the pager over `panel_count` panels.
    ///
    /// Declines (returns an error, touching nothing) when there are no panels
    /// or the viewport is at or below the narrow-layout breakpoint.
    pub fn new(
        panel_count: usize,
        config: PagerConfig,
        motion: MotionConfig,
        host: &mut impl PagerHost,
    ) -> Result<Self> {
        if panel_count == 0 {
            return Err(Error::NoPanels);
        }
        let width = host.viewport().width;
        if motion.is_narrow(width) {
            return Err(Error::NarrowViewport {
                width,
                breakpoint: motion.narrow_breakpoint,
            });
        }

        let offset = OffsetSmoother::new(config.smoothing_factor, config.smoothing_epsilon);
        let geo = TrackGeometry::measure(host, panel_count);
        let mut pager = Self {
            config,
            motion,
            panel_count,
            current_index: 0,
            lock: false,
            accumulated_delta: 0.0,
            suppress_indicator_update: false,
            pending_indicator_reveal: false,
            indicators: Indicators::hidden(),
            offset,
            track_height: geo.track_height(),
            transition: None,
        };

        pager.sync_scroll(host);
        // A page restored mid-track starts aligned rather than sliding in
        pager.offset.snap_to(geo.progress(host.scroll_y()));

        debug!(
            panels = panel_count,
            track_height = pager.track_height,
            index = pager.current_index,
            "Pager initialized"
        );
        Ok(pager)
    }

    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.lock
    }

    pub fn phase(&self) -> PagerPhase {
        if self.lock {
            PagerPhase::Locked
        } else {
            PagerPhase::Idle
        }
    }

    pub fn accumulated_delta(&self) -> f64 {
        self.accumulated_delta
    }

    pub fn indicators(&self) -> Indicators {
        self.indicators
    }

    /// Horizontal translation of the track contents
    pub fn translate_x(&self) -> f64 {
        -self.offset.current()
    }

    pub fn track_height(&self) -> f64 {
        self.track_height
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    pub fn view(&self) -> PagerView {
        PagerView {
            translate_x: self.translate_x(),
            track_height: self.track_height,
            current_index: self.current_index,
            locked: self.lock,
            indicators: self.indicators,
        }
    }

    /// Whether the host should keep delivering frame ticks
    pub fn needs_frame(&self) -> bool {
        self.transition.is_some() || !self.offset.is_settled()
    }

    /// Horizontal progress for a document scroll position
    pub fn compute_progress(&self, scroll_y: f64, host: &impl PagerHost) -> f64 {
        self.geometry(host).progress(scroll_y)
    }

    /// Nearest panel for a progress value
    pub fn infer_index_from_progress(&self, progress: f64, host: &impl PagerHost) -> usize {
        self.geometry(host).infer_index(progress)
    }

    fn geometry(&self, host: &impl PagerHost) -> TrackGeometry {
        TrackGeometry::measure(host, self.panel_count)
    }

    fn reduced_motion(&self, host: &impl PagerHost) -> bool {
        self.motion.reduced_motion || host.prefers_reduced_motion()
    }

    /// Point the visual offset at `progress`, smoothed unless motion is reduced
    pub fn apply_offset(&mut self, progress: f64, host: &impl PagerHost) {
        if self.reduced_motion(host) {
            self.offset.snap_to(progress);
        } else {
            self.offset.set_target(progress);
        }
    }

    // ------------------------------------------------------------------
    // Input ports
    // ------------------------------------------------------------------

    /// Document scroll position changed
    pub fn on_scroll(&mut self, host: &mut impl PagerHost) {
        self.sync_scroll(host);
    }

    /// Wheel input. Outside the pager zone the host should scroll normally.
    pub fn on_wheel(&mut self, delta_y: f64, host: &mut impl PagerHost, now: Duration) -> InputOutcome {
        let geo = self.geometry(host);
        if !geo.in_zone(host.scroll_y()) {
            return InputOutcome::Ignored;
        }
        if self.lock {
            return InputOutcome::Locked;
        }

        self.accumulated_delta += delta_y;
        trace!(delta_y, accumulated = self.accumulated_delta, "Wheel accumulated");

        if self.current_index == 0 && self.accumulated_delta <= -self.config.intro_threshold {
            self.accumulated_delta = 0.0;
            return self.return_to_intro(host, now);
        }

        if self.accumulated_delta.abs() >= self.config.wheel_threshold {
            let direction = if self.accumulated_delta > 0.0 { 1 } else { -1 };
            self.accumulated_delta = 0.0;
            return self.step(direction, host, now);
        }

        InputOutcome::Consumed
    }

    /// Discrete navigation keys, bypassing wheel accumulation
    pub fn on_key(&mut self, press: KeyPress, host: &mut impl PagerHost, now: Duration) -> InputOutcome {
        if self.lock {
            return InputOutcome::Locked;
        }
        if press.focus == FocusTarget::FormControl {
            return InputOutcome::Ignored;
        }

        let direction = match (press.key, press.shift) {
            (Key::PageDown | Key::ArrowDown, _) | (Key::Space, false) => 1,
            (Key::PageUp | Key::ArrowUp, _) | (Key::Space, true) => -1,
            _ => return InputOutcome::Ignored,
        };

        if direction < 0 && self.current_index == 0 {
            return self.return_to_intro(host, now);
        }
        self.step(direction, host, now)
    }

    /// The "next" affordance was clicked
    pub fn on_next_click(&mut self, host: &mut impl PagerHost, now: Duration) -> InputOutcome {
        if self.lock {
            return InputOutcome::Locked;
        }
        self.step(1, host, now)
    }

    /// The "return to top" affordance was clicked
    pub fn on_return_click(&mut self, host: &mut impl PagerHost, now: Duration) -> InputOutcome {
        if !self.motion.is_narrow(host.viewport().width) {
            return self.return_to_intro(host, now);
        }

        // Narrow layout: an unlocked plain scroll, never over a step in flight
        if self.lock {
            return InputOutcome::Locked;
        }
        if self.reduced_motion(host) {
            host.scroll_to(0.0);
            self.sync_scroll(host);
        } else {
            self.transition = Some(ActiveScroll {
                kind: ScrollKind::Plain,
                animation: ScrollAnimation::new(
                    host.scroll_y(),
                    0.0,
                    now,
                    self.config.narrow_return_duration(),
                    self.config.intro_easing,
                ),
                guard: None,
            });
        }
        InputOutcome::ReturnedToIntro
    }

    /// Viewport changed size: resize the track and realign on the current panel
    pub fn on_resize(&mut self, host: &mut impl PagerHost, now: Duration) {
        let geo = self.geometry(host);
        self.track_height = geo.track_height();
        debug!(track_height = self.track_height, "Pager resized");

        let heading_to_top = matches!(
            self.transition.as_ref().map(|t| t.kind),
            Some(ScrollKind::Intro | ScrollKind::Plain)
        );
        let aligned = (host.scroll_y() - geo.panel_scroll_y(self.current_index)).abs() < 0.5;

        if heading_to_top || (aligned && self.transition.is_none()) {
            self.sync_scroll(host);
            return;
        }
        self.commit_to(self.current_index, host, now);
    }

    /// Advance animations by one frame. Returns whether another frame is needed.
    pub fn tick(&mut self, host: &mut impl PagerHost, now: Duration) -> bool {
        if let Some(active) = self.transition.as_mut() {
            let overdue = active.guard.is_some_and(|g| g.is_overdue(now));
            let frame = if overdue {
                debug!("Pager transition overran its lock; forcing completion");
                active.animation.finish().map(TweenStep::Finished)
            } else {
                active.animation.advance(now)
            };
            match frame {
                Some(TweenStep::Running(y)) => {
                    host.scroll_to(y);
                    self.sync_scroll(host);
                }
                _ => self.complete_transition(host),
            }
        }

        if !self.offset.is_settled() {
            self.offset.step();
        }
        self.needs_frame()
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Start a transition to `target` (clamped to the panel range)
    pub fn commit_to(&mut self, target: usize, host: &mut impl PagerHost, now: Duration) -> InputOutcome {
        let index = target.min(self.panel_count - 1);
        self.current_index = index;
        self.accumulated_delta = 0.0;

        let target_y = self.geometry(host).panel_scroll_y(index);

        if self.reduced_motion(host) {
            self.transition = None;
            self.lock = false;
            host.scroll_to(target_y);
            self.sync_scroll(host);
            self.flush_deferred_indicators(host);
            debug!(index, "Pager committed (instant)");
            return InputOutcome::Committed { index };
        }

        self.lock = true;
        self.transition = Some(ActiveScroll {
            kind: ScrollKind::Panel { index },
            animation: ScrollAnimation::new(
                host.scroll_y(),
                target_y,
                now,
                self.config.step_duration(),
                self.config.step_easing,
            ),
            guard: Some(CompletionGuard::new(now, self.config.step_lock())),
        });
        debug!(index, target_y, "Pager committed");
        InputOutcome::Committed { index }
    }

    fn step(&mut self, direction: i64, host: &mut impl PagerHost, now: Duration) -> InputOutcome {
        let last = self.panel_count - 1;
        let from = self.current_index;
        let to = (from as i64 + direction).clamp(0, last as i64) as usize;

        // Stepping back from the last panel would flash "next" mid-flight
        if direction < 0 && last >= 1 && from == last && to == last - 1 {
            self.suppress_indicator_update = true;
            self.pending_indicator_reveal = true;
            self.indicators.next_visible = false;
        } else {
            self.suppress_indicator_update = false;
            self.pending_indicator_reveal = false;
        }

        self.commit_to(to, host, now)
    }

    fn return_to_intro(&mut self, host: &mut impl PagerHost, now: Duration) -> InputOutcome {
        if self.lock {
            return InputOutcome::Locked;
        }
        self.current_index = 0;
        self.accumulated_delta = 0.0;
        self.suppress_indicator_update = false;
        self.pending_indicator_reveal = false;
        self.indicators.next_visible = false;

        if self.reduced_motion(host) {
            self.transition = None;
            host.scroll_to(0.0);
            self.sync_scroll(host);
            debug!("Pager returned to intro (instant)");
            return InputOutcome::ReturnedToIntro;
        }

        self.lock = true;
        self.transition = Some(ActiveScroll {
            kind: ScrollKind::Intro,
            animation: ScrollAnimation::new(
                host.scroll_y(),
                0.0,
                now,
                self.config.intro_duration(),
                self.config.intro_easing,
            ),
            guard: Some(CompletionGuard::new(now, self.config.intro_lock())),
        });
        debug!("Pager returning to intro");
        InputOutcome::ReturnedToIntro
    }

    /// Completion path shared by the final frame and the safety deadline
    fn complete_transition(&mut self, host: &mut impl PagerHost) {
        let Some(mut active) = self.transition.take() else {
            return;
        };
        if let Some(guard) = active.guard.as_mut() {
            if !guard.fire() {
                return;
            }
        }

        let target = active.animation.target();
        host.scroll_to(target);
        self.sync_scroll(host);

        match active.kind {
            ScrollKind::Panel { index } => {
                self.lock = false;
                self.current_index = index;
                self.flush_deferred_indicators(host);
                debug!(index, "Pager settled");
            }
            ScrollKind::Intro => {
                self.lock = false;
                debug!("Pager settled on intro");
            }
            ScrollKind::Plain => {}
        }
    }

    fn flush_deferred_indicators(&mut self, host: &impl PagerHost) {
        if !(self.suppress_indicator_update || self.pending_indicator_reveal) {
            return;
        }
        self.suppress_indicator_update = false;
        self.pending_indicator_reveal = false;

        let geo = self.geometry(host);
        let progress = geo.panel_start(self.current_index as f64);
        self.indicators = Indicators::compute(&geo, &self.config, progress, host.scroll_y());
    }

    fn sync_scroll(&mut self, host: &impl PagerHost) {
        let geo = self.geometry(host);
        let scroll_y = host.scroll_y();
        let progress = geo.progress(scroll_y);

        self.apply_offset(progress, host);

        if !self.suppress_indicator_update {
            self.indicators = Indicators::compute(&geo, &self.config, progress, scroll_y);
        }
        if !self.lock {
            self.current_index = geo.infer_index(progress);
        }
    }
}
