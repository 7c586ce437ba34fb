//! Atomic: pure easing functions for time-based animations
//!
//! Maps input progress [0, 1] to output [0, 1] with various acceleration curves.

pub use crate::config::EasingType;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::CubicOut => cubic_ease_out(t),
            EasingType::CubicInOut => cubic_ease_in_out(t),
            EasingType::QuinticOut => quintic_ease_out(t),
            EasingType::ExpoOut => exponential_ease_out(t),
            EasingType::Ease => CSS_EASE.solve(t),
        }
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Cubic ease-in-out: 4t³ below the midpoint, mirrored above it
#[inline]
fn cubic_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// Unit cubic bezier with endpoints (0,0) and (1,1), as used by CSS timing functions
#[derive(Debug, Clone, Copy)]
struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

const CSS_EASE: CubicBezier = CubicBezier {
    x1: 0.25,
    y1: 0.1,
    x2: 0.25,
    y2: 1.0,
};

impl CubicBezier {
    const EPSILON: f64 = 1e-6;

    fn coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (a, b, c)
    }

    fn sample(p1: f64, p2: f64, s: f64) -> f64 {
        let (a, b, c) = Self::coefficients(p1, p2);
        ((a * s + b) * s + c) * s
    }

    fn slope_x(&self, s: f64) -> f64 {
        let (a, b, c) = Self::coefficients(self.x1, self.x2);
        (3.0 * a * s + 2.0 * b) * s + c
    }

    /// Find the curve parameter whose x equals `x`
    fn param_for_x(&self, x: f64) -> f64 {
        // Newton first, bisection if the slope flattens out
        let mut s = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, s) - x;
            if err.abs() < Self::EPSILON {
                return s;
            }
            let d = self.slope_x(s);
            if d.abs() < Self::EPSILON {
                break;
            }
            s -= err / d;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        s = x;
        while lo < hi {
            let v = Self::sample(self.x1, self.x2, s);
            if (v - x).abs() < Self::EPSILON {
                break;
            }
            if x > v {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
            if hi - lo < Self::EPSILON {
                break;
            }
        }
        s
    }

    fn solve(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.param_for_x(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 7] = [
        EasingType::None,
        EasingType::Linear,
        EasingType::CubicOut,
        EasingType::CubicInOut,
        EasingType::QuinticOut,
        EasingType::ExpoOut,
        EasingType::Ease,
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            // t=0 should give 0
            assert!((easing.apply(0.0) - 0.0).abs() < 0.001, "{:?} at t=0", easing);
            // t=1 should give 1
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let v = easing.apply(t);
                assert!(v >= prev - 1e-9, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_cubic_in_out_symmetry() {
        let e = EasingType::CubicInOut;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-9);
        assert!((e.apply(0.25) + e.apply(0.75) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_css_ease_reference_points() {
        // Browser reference values for `ease`
        let e = EasingType::Ease;
        assert!((e.apply(0.5) - 0.8024).abs() < 0.002);
        assert!((e.apply(0.25) - 0.4085).abs() < 0.002);
    }

    #[test]
    fn test_out_of_range_clamped() {
        assert_eq!(EasingType::Linear.apply(-1.0), 0.0);
        assert_eq!(EasingType::Linear.apply(2.0), 1.0);
    }
}
