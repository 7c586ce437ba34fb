//! Circular carousel engine
//!
//! Keeps one card centered in a strip that appears to wrap forever. The strip
//! holds the original cards plus a clone at each end; a move that lands on a
//! clone finishes with a loop correction that swaps it for the real card at
//! the same on-screen spot.

mod drag;
mod ring;

pub use drag::{DragState, Swipe};
pub use ring::Ring;

use std::time::Duration;

use tracing::{debug, trace};

use crate::config::CarouselConfig;
use crate::host::CarouselHost;
use crate::input::{FocusTarget, InputOutcome, Key, KeyPress, PointerTarget};
use crate::motion::{CompletionGuard, Tween};
use crate::{Error, Result};

/// Fewest originals that make a ring
pub const MIN_ITEMS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    Idle,
    /// Animating toward a new position; input moves are rejected
    Transitioning,
    /// Landed on a clone and jumping to its real counterpart
    LoopCorrecting,
}

/// Render snapshot for the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselView {
    pub translate_x: f64,
    /// Display position carrying the active marker (clones included)
    pub active_position: usize,
    /// Index of the active card among the originals
    pub active_item: usize,
    /// A move is in flight and may end in a loop correction
    pub loop_fixing: bool,
    pub locked: bool,
    pub dragging: bool,
}

#[derive(Debug, Clone)]
pub struct Carousel<T> {
    config: CarouselConfig,
    reduced_motion: bool,
    ring: Ring<T>,
    dom_index: usize,
    lock: bool,
    phase: CarouselPhase,
    /// Settled translate-x of the track
    offset: f64,
    /// Offset animation, if one is running
    motion: Option<Tween>,
    /// Completion guard of the move in flight
    pending: Option<CompletionGuard>,
    drag: Option<DragState>,
    loop_fixing: bool,
}

impl<T: Clone> Carousel<T> {
    /// Build the ring around `items` and center the middle card without animation.
    ///
    /// Declines with [`Error::TooFewItems`] below two cards and with
    /// [`Error::MissingElement`] when the host cannot place the starting card.
    pub fn new(
        items: Vec<T>,
        config: CarouselConfig,
        reduced_motion: bool,
        host: &impl CarouselHost,
    ) -> Result<Self> {
        if items.len() < MIN_ITEMS {
            return Err(Error::TooFewItems {
                found: items.len(),
                required: MIN_ITEMS,
            });
        }

        let ring = Ring::new(items);
        let dom_index = ring.middle_position();
        let offset = centered_offset(host, dom_index)
            .ok_or_else(|| Error::MissingElement(format!("carousel item at position {dom_index}")))?;

        debug!(items = ring.original_len(), dom_index, "Carousel initialized");
        Ok(Self {
            config,
            reduced_motion,
            ring,
            dom_index,
            lock: false,
            phase: CarouselPhase::Idle,
            offset,
            motion: None,
            pending: None,
            drag: None,
            loop_fixing: false,
        })
    }

    /// Swap in a new set of cards, rebuild the clones and recenter on the middle one
    pub fn replace_items(&mut self, items: Vec<T>, host: &impl CarouselHost) -> Result<()> {
        if items.len() < MIN_ITEMS {
            return Err(Error::TooFewItems {
                found: items.len(),
                required: MIN_ITEMS,
            });
        }
        self.ring = Ring::new(items);
        self.dom_index = self.ring.middle_position();
        self.lock = false;
        self.phase = CarouselPhase::Idle;
        self.pending = None;
        self.drag = None;
        self.loop_fixing = false;
        self.motion = None;
        if let Some(offset) = centered_offset(host, self.dom_index) {
            self.offset = offset;
        }
        debug!(items = self.ring.original_len(), "Carousel items replaced");
        Ok(())
    }

    pub fn ring(&self) -> &Ring<T> {
        &self.ring
    }

    pub fn dom_index(&self) -> usize {
        self.dom_index
    }

    /// The active card
    pub fn active_item(&self) -> Option<&T> {
        self.ring.originals().get(self.ring.real_index(self.dom_index))
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.lock
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn view(&self) -> CarouselView {
        CarouselView {
            translate_x: self.offset,
            active_position: self.dom_index,
            active_item: self.ring.real_index(self.dom_index),
            loop_fixing: self.loop_fixing,
            locked: self.lock,
            dragging: self.drag.is_some(),
        }
    }

    /// Whether the host should keep delivering frame ticks
    pub fn needs_frame(&self) -> bool {
        self.motion.is_some() || self.pending.is_some()
    }

    fn reduced(&self, host: &impl CarouselHost) -> bool {
        self.reduced_motion || host.prefers_reduced_motion()
    }

    /// Offset as currently shown, sampling any running animation
    fn visible_offset(&self, now: Duration) -> f64 {
        self.motion.map_or(self.offset, |m| m.sample(now))
    }

    /// Center the card at `position`. Returns whether an animation started.
    pub fn center_on(
        &mut self,
        position: usize,
        animate: bool,
        host: &impl CarouselHost,
        now: Duration,
    ) -> bool {
        let Some(target) = centered_offset(host, position) else {
            debug!(position, "Carousel item missing; skipping center");
            return false;
        };

        if animate && !self.reduced(host) {
            let from = self.visible_offset(now);
            self.motion = Some(Tween::new(
                from,
                target,
                now,
                self.config.transition(),
                self.config.easing,
            ));
            self.offset = from;
            true
        } else {
            self.motion = None;
            self.offset = target;
            false
        }
    }

    /// Move by `delta` positions
    pub fn move_by(&mut self, delta: i64, host: &impl CarouselHost, now: Duration) -> InputOutcome {
        if self.lock {
            return InputOutcome::Locked;
        }
        self.lock = true;
        self.loop_fixing = true;
        self.phase = CarouselPhase::Transitioning;

        let last = self.ring.last_position() as i64;
        self.dom_index = (self.dom_index as i64 + delta).clamp(0, last) as usize;
        trace!(delta, dom_index = self.dom_index, "Carousel move");

        if self.center_on(self.dom_index, true, host, now) {
            self.pending = Some(CompletionGuard::new(now, self.config.completion_timeout()));
        } else {
            self.complete_move(host, now);
        }
        InputOutcome::Committed {
            index: self.ring.real_index(self.dom_index),
        }
    }

    /// The environment reports the track's transition finished.
    /// Returns whether this call ran the completion path.
    pub fn on_transition_end(&mut self, host: &impl CarouselHost, now: Duration) -> bool {
        let Some(guard) = self.pending.as_mut() else {
            return false;
        };
        if !guard.fire() {
            return false;
        }
        if let Some(motion) = self.motion.take() {
            self.offset = motion.target();
        }
        self.complete_move(host, now);
        true
    }

    fn complete_move(&mut self, host: &impl CarouselHost, now: Duration) {
        self.pending = None;

        if self.ring.is_clone(self.dom_index) {
            self.phase = CarouselPhase::LoopCorrecting;
            let from = self.dom_index;
            self.dom_index = self.ring.wrap(from);
            self.center_on(self.dom_index, false, host, now);
            debug!(from, to = self.dom_index, "Carousel loop corrected");
        }

        self.loop_fixing = false;
        self.phase = CarouselPhase::Idle;
        self.lock = false;
    }

    /// Advance by one frame. Returns whether another frame is needed.
    pub fn tick(&mut self, host: &impl CarouselHost, now: Duration) -> bool {
        if let Some(motion) = self.motion {
            if motion.is_complete(now) {
                self.motion = None;
                self.offset = motion.target();
                self.on_transition_end(host, now);
            } else {
                self.offset = motion.sample(now);
            }
        }

        if self.pending.is_some_and(|g| g.is_overdue(now)) {
            debug!("Carousel transition end missed; forcing completion");
            self.on_transition_end(host, now);
        }

        self.needs_frame()
    }

    // ------------------------------------------------------------------
    // Input ports
    // ------------------------------------------------------------------

    pub fn on_prev_click(&mut self, host: &impl CarouselHost, now: Duration) -> InputOutcome {
        self.move_by(-1, host, now)
    }

    pub fn on_next_click(&mut self, host: &impl CarouselHost, now: Duration) -> InputOutcome {
        self.move_by(1, host, now)
    }

    /// Arrow keys while the carousel holds focus
    pub fn on_key(&mut self, press: KeyPress, host: &impl CarouselHost, now: Duration) -> InputOutcome {
        if press.focus != FocusTarget::Carousel {
            return InputOutcome::Ignored;
        }
        match press.key {
            Key::ArrowLeft => self.move_by(-1, host, now),
            Key::ArrowRight => self.move_by(1, host, now),
            _ => InputOutcome::Ignored,
        }
    }

    pub fn on_pointer_down(&mut self, x: f64, target: PointerTarget, now: Duration) -> InputOutcome {
        if target == PointerTarget::Interactive {
            return InputOutcome::Ignored;
        }
        // Freeze wherever the track currently is
        let offset = self.visible_offset(now);
        self.motion = None;
        self.offset = offset;
        self.drag = Some(DragState::new(x, offset));
        InputOutcome::Consumed
    }

    pub fn on_pointer_move(&mut self, x: f64) -> InputOutcome {
        let Some(drag) = self.drag else {
            return InputOutcome::Ignored;
        };
        self.offset = drag.offset_for(x);
        InputOutcome::Consumed
    }

    pub fn on_pointer_up(&mut self, x: f64, host: &impl CarouselHost, now: Duration) -> InputOutcome {
        let Some(drag) = self.drag.take() else {
            return InputOutcome::Ignored;
        };

        let width = host
            .item_extent(self.dom_index)
            .map(|e| e.width)
            .filter(|w| *w > 0.0)
            .unwrap_or(self.config.fallback_item_width);
        let dx = drag.delta(x);
        let swipe = Swipe::resolve(dx, self.config.drag_threshold(width));
        trace!(dx, ?swipe, "Carousel drag released");

        let outcome = match swipe {
            Swipe::Stay => InputOutcome::Consumed,
            _ => self.move_by(swipe.delta(), host, now),
        };
        if matches!(outcome, InputOutcome::Consumed | InputOutcome::Locked) {
            self.center_on(self.dom_index, true, host, now);
        }
        outcome
    }

    pub fn on_pointer_cancel(&mut self, x: f64, host: &impl CarouselHost, now: Duration) -> InputOutcome {
        self.on_pointer_up(x, host, now)
    }

    /// Realign on the current card without animation
    pub fn on_resize(&mut self, host: &impl CarouselHost, now: Duration) {
        self.center_on(self.dom_index, false, host, now);
    }
}

fn centered_offset(host: &impl CarouselHost, position: usize) -> Option<f64> {
    let extent = host.item_extent(position)?;
    Some(-(extent.center() - host.viewport_width() / 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ItemExtent;

    /// Uniform cards laid out edge to edge
    struct Strip {
        viewport: f64,
        card: f64,
        count: usize,
        reduced: bool,
    }

    impl Strip {
        fn new(count: usize) -> Self {
            Self {
                viewport: 1000.0,
                card: 400.0,
                count,
                reduced: false,
            }
        }
    }

    impl CarouselHost for Strip {
        fn viewport_width(&self) -> f64 {
            self.viewport
        }
        fn item_extent(&self, position: usize) -> Option<ItemExtent> {
            (position < self.count + 2).then(|| ItemExtent::new(position as f64 * self.card, self.card))
        }
        fn prefers_reduced_motion(&self) -> bool {
            self.reduced
        }
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn carousel(strip: &Strip) -> Carousel<u32> {
        let items = (0..strip.count as u32).collect();
        Carousel::new(items, CarouselConfig::default(), false, strip).unwrap()
    }

    #[test]
    fn test_rejects_single_item() {
        let strip = Strip::new(1);
        let err = Carousel::new(vec![1], CarouselConfig::default(), false, &strip);
        assert!(matches!(err, Err(Error::TooFewItems { found: 1, required: 2 })));
    }

    #[test]
    fn test_missing_element_declines() {
        let mut strip = Strip::new(5);
        strip.count = 0;
        let err = Carousel::new(vec![1, 2, 3, 4, 5], CarouselConfig::default(), false, &strip);
        assert!(matches!(err, Err(Error::MissingElement(_))));
    }

    #[test]
    fn test_initial_center() {
        let strip = Strip::new(5);
        let c = carousel(&strip);
        assert_eq!(c.dom_index(), 3);
        assert_eq!(c.active_item(), Some(&2));
        // Card 3 spans 1200..1600, centered in a 1000-wide viewport
        assert_eq!(c.offset(), -900.0);
        assert!(!c.needs_frame());
    }

    #[test]
    fn test_move_locks_until_transition_end() {
        let strip = Strip::new(5);
        let mut c = carousel(&strip);
        assert_eq!(c.move_by(1, &strip, ms(0)), InputOutcome::Committed { index: 3 });
        assert!(c.is_locked());
        assert!(c.view().loop_fixing);
        assert_eq!(c.phase(), CarouselPhase::Transitioning);
        assert_eq!(c.move_by(1, &strip, ms(10)), InputOutcome::Locked);

        assert!(c.on_transition_end(&strip, ms(260)));
        assert!(!c.is_locked());
        assert_eq!(c.phase(), CarouselPhase::Idle);
        assert_eq!(c.offset(), -1300.0);
        // Second signal is a no-op
        assert!(!c.on_transition_end(&strip, ms(270)));
    }

    #[test]
    fn test_tick_completes_move() {
        let strip = Strip::new(5);
        let mut c = carousel(&strip);
        c.move_by(-1, &strip, ms(0));
        let mid = {
            c.tick(&strip, ms(130));
            c.offset()
        };
        assert!(mid < -500.0 && mid > -900.0);
        assert!(!c.tick(&strip, ms(260)));
        assert_eq!(c.dom_index(), 2);
        assert_eq!(c.offset(), -500.0);
    }

    #[test]
    fn test_timeout_forces_completion() {
        let strip = Strip::new(5);
        let mut c = carousel(&strip);
        c.move_by(1, &strip, ms(0));
        // Drag freezes the animation, so no transition end will come
        c.on_pointer_down(500.0, PointerTarget::Surface, ms(50));
        c.tick(&strip, ms(299));
        assert!(c.is_locked());
        c.tick(&strip, ms(300));
        assert!(!c.is_locked());
    }

    #[test]
    fn test_forward_wrap() {
        let strip = Strip::new(5);
        let mut c = carousel(&strip);
        c.move_by(3, &strip, ms(0));
        assert_eq!(c.dom_index(), 6);
        c.on_transition_end(&strip, ms(260));
        assert_eq!(c.dom_index(), 1);
        assert_eq!(c.active_item(), Some(&0));
        assert_eq!(c.offset(), -100.0);
    }

    #[test]
    fn test_interactive_target_not_dragged() {
        let strip = Strip::new(5);
        let mut c = carousel(&strip);
        assert_eq!(
            c.on_pointer_down(10.0, PointerTarget::Interactive, ms(0)),
            InputOutcome::Ignored
        );
        assert!(!c.is_dragging());
        assert_eq!(c.on_pointer_move(50.0), InputOutcome::Ignored);
    }

    #[test]
    fn test_drag_follows_pointer_then_swipes() {
        let strip = Strip::new(5);
        let mut c = carousel(&strip);
        c.on_pointer_down(500.0, PointerTarget::Surface, ms(0));
        c.on_pointer_move(450.0);
        assert_eq!(c.offset(), -950.0);
        assert_eq!(
            c.on_pointer_up(400.0, &strip, ms(16)),
            InputOutcome::Committed { index: 3 }
        );
        assert!(!c.is_dragging());
        c.tick(&strip, ms(400));
        assert_eq!(c.dom_index(), 4);
    }

    #[test]
    fn test_small_drag_snaps_back_without_locking() {
        let strip = Strip::new(5);
        let mut c = carousel(&strip);
        c.on_pointer_down(500.0, PointerTarget::Surface, ms(0));
        c.on_pointer_move(540.0);
        assert_eq!(c.on_pointer_up(540.0, &strip, ms(16)), InputOutcome::Consumed);
        assert!(!c.is_locked());
        c.tick(&strip, ms(400));
        assert_eq!(c.offset(), -900.0);
    }

    #[test]
    fn test_fallback_width_threshold() {
        let mut strip = Strip::new(5);
        strip.card = 0.0;
        let mut c = Carousel::new(vec![1, 2, 3, 4, 5], CarouselConfig::default(), false, &strip).unwrap();
        // Fallback 320 wide gives min(90, 80) = 80
        c.on_pointer_down(500.0, PointerTarget::Surface, ms(0));
        assert!(matches!(
            c.on_pointer_up(420.0, &strip, ms(16)),
            InputOutcome::Committed { .. }
        ));
    }

    #[test]
    fn test_keys_need_focus() {
        let strip = Strip::new(5);
        let mut c = carousel(&strip);
        assert_eq!(
            c.on_key(KeyPress::new(Key::ArrowRight), &strip, ms(0)),
            InputOutcome::Ignored
        );
        let press = KeyPress::new(Key::ArrowLeft).focused(FocusTarget::Carousel);
        assert_eq!(c.on_key(press, &strip, ms(0)), InputOutcome::Committed { index: 1 });
    }

    #[test]
    fn test_reduced_motion_is_synchronous() {
        let mut strip = Strip::new(5);
        strip.reduced = true;
        let mut c = carousel(&strip);
        c.on_next_click(&strip, ms(0));
        assert!(!c.is_locked());
        assert!(!c.needs_frame());
        assert_eq!(c.dom_index(), 4);
    }

    #[test]
    fn test_replace_items() {
        let strip = Strip::new(7);
        let mut c = carousel(&Strip::new(5));
        c.replace_items(vec![10, 11, 12, 13, 14, 15, 16], &strip).unwrap();
        assert_eq!(c.ring().len(), 9);
        assert_eq!(c.dom_index(), 4);
        assert_eq!(c.active_item(), Some(&13));
        assert!(c.replace_items(vec![1], &strip).is_err());
    }

    #[test]
    fn test_resize_recenters_instantly() {
        let mut strip = Strip::new(5);
        let mut c = carousel(&strip);
        strip.viewport = 800.0;
        c.on_resize(&strip, ms(0));
        assert_eq!(c.offset(), -1000.0);
        assert!(!c.needs_frame());
    }
}
