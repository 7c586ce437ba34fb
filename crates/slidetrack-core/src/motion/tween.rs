//! Molecular: time-based value animation
//!
//! `Tween` is the pure part (progress in, value out). `ScrollAnimation` wraps
//! one and reports completion exactly once, snapping to the exact target so
//! floating-point drift never leaves a scroll position a fraction short.

use std::time::Duration;

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    start: Duration,
    duration: Duration,
    easing: EasingType,
}

impl Tween {
    pub fn new(from: f64, to: f64, start: Duration, duration: Duration, easing: EasingType) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    pub fn from(&self) -> f64 {
        self.from
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Value for a progress fraction; exactly the target at progress 1
    pub fn value_at(&self, progress: f64) -> f64 {
        if progress >= 1.0 {
            self.to
        } else {
            lerp(self.from, self.to, self.easing.apply(progress))
        }
    }

    pub fn progress(&self, now: Duration) -> f64 {
        progress(self.start, now, self.duration)
    }

    /// Interpolated value at a frame timestamp
    pub fn sample(&self, now: Duration) -> f64 {
        self.value_at(self.progress(now))
    }

    #[inline]
    pub fn is_complete(&self, now: Duration) -> bool {
        is_complete(self.start, now, self.duration)
    }
}

/// One frame of a running animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenStep {
    /// Intermediate value
    Running(f64),
    /// Final frame; the value is exactly the target
    Finished(f64),
}

impl TweenStep {
    pub fn value(&self) -> f64 {
        match *self {
            TweenStep::Running(v) | TweenStep::Finished(v) => v,
        }
    }
}

/// Scroll-to-Y animation stepped by the frame scheduler
#[derive(Debug, Clone)]
pub struct ScrollAnimation {
    tween: Tween,
    finished: bool,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64, start: Duration, duration: Duration, easing: EasingType) -> Self {
        Self {
            tween: Tween::new(from, to, start, duration, easing),
            finished: false,
        }
    }

    /// Linear scroll-to-Y
    pub fn linear(from: f64, to: f64, start: Duration, duration: Duration) -> Self {
        Self::new(from, to, start, duration, EasingType::Linear)
    }

    pub fn target(&self) -> f64 {
        self.tween.target()
    }

    pub fn tween(&self) -> &Tween {
        &self.tween
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance to `now`. Yields `Finished` on the first frame that reaches
    /// full progress and `None` on every call after that.
    pub fn advance(&mut self, now: Duration) -> Option<TweenStep> {
        if self.finished {
            return None;
        }
        if self.tween.is_complete(now) {
            self.finished = true;
            return Some(TweenStep::Finished(self.tween.target()));
        }
        Some(TweenStep::Running(self.tween.sample(now)))
    }

    /// Jump straight to the final frame (used when a safety deadline wins)
    pub fn finish(&mut self) -> Option<f64> {
        if self.finished {
            return None;
        }
        self.finished = true;
        Some(self.tween.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_linear_sampling() {
        let tween = Tween::new(0.0, 100.0, ms(0), ms(100), EasingType::Linear);
        assert!((tween.sample(ms(25)) - 25.0).abs() < 1e-9);
        assert!((tween.sample(ms(50)) - 50.0).abs() < 1e-9);
        assert_eq!(tween.sample(ms(100)), 100.0);
    }

    #[test]
    fn test_completion_reported_once_and_exact() {
        let mut anim = ScrollAnimation::new(3.0, 1003.0, ms(0), ms(560), EasingType::CubicInOut);
        assert!(matches!(anim.advance(ms(16)), Some(TweenStep::Running(_))));
        assert!(matches!(anim.advance(ms(300)), Some(TweenStep::Running(_))));
        assert_eq!(anim.advance(ms(561)), Some(TweenStep::Finished(1003.0)));
        assert_eq!(anim.advance(ms(577)), None);
        assert_eq!(anim.finish(), None);
    }

    #[test]
    fn test_values_stay_between_endpoints() {
        let mut anim = ScrollAnimation::new(500.0, 0.0, ms(0), ms(260), EasingType::CubicOut);
        let mut prev = 500.0;
        for t in (0..260).step_by(16) {
            if let Some(TweenStep::Running(y)) = anim.advance(ms(t)) {
                assert!(y <= prev && y >= 0.0);
                prev = y;
            }
        }
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut anim = ScrollAnimation::linear(0.0, 10.0, ms(5), Duration::ZERO);
        assert_eq!(anim.advance(ms(5)), Some(TweenStep::Finished(10.0)));
    }

    #[test]
    fn test_finish_skips_remaining_frames() {
        let mut anim = ScrollAnimation::linear(0.0, 10.0, ms(0), ms(100));
        assert_eq!(anim.finish(), Some(10.0));
        assert!(anim.is_finished());
        assert_eq!(anim.advance(ms(50)), None);
    }
}
