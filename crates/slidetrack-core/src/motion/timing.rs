//! Atomic: time calculation utilities for animations
//!
//! Timestamps are host-supplied `Duration`s since an arbitrary epoch.

use std::time::Duration;

/// Calculate animation progress (0.0 to 1.0) from start time and duration
///
/// # Arguments
/// * `start` - Animation start timestamp
/// * `now` - Current frame timestamp
/// * `duration` - Total animation duration
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress(start: Duration, now: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_sub(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if animation is complete
#[inline]
pub fn is_complete(start: Duration, now: Duration, duration: Duration) -> bool {
    now.saturating_sub(start) >= duration
}

/// Linear interpolation between two values
///
/// # Arguments
/// * `from` - Start value
/// * `to` - End value
/// * `t` - Interpolation factor [0.0, 1.0]
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
        assert!((lerp(100.0, -100.0, 0.25) - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Duration::from_millis(10);
        assert!((progress(start, start, Duration::ZERO) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_midway_and_clamped() {
        let start = Duration::from_millis(100);
        let dur = Duration::from_millis(200);
        assert!((progress(start, Duration::from_millis(200), dur) - 0.5).abs() < 1e-9);
        assert_eq!(progress(start, Duration::from_millis(900), dur), 1.0);
        // Frame timestamps earlier than the start never go negative
        assert_eq!(progress(start, Duration::from_millis(50), dur), 0.0);
    }

    #[test]
    fn test_is_complete() {
        let start = Duration::from_millis(0);
        let dur = Duration::from_millis(100);
        assert!(!is_complete(start, Duration::from_millis(99), dur));
        assert!(is_complete(start, Duration::from_millis(100), dur));
    }
}
