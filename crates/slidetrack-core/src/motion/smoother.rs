//! Molecular: exponential offset smoothing
//!
//! Each frame the current value moves a fixed fraction of the way toward the
//! target, snapping once the residual drops below epsilon. The target can move
//! at any time; the chase just continues from wherever the value is.

#[derive(Debug, Clone)]
pub struct OffsetSmoother {
    current: f64,
    target: f64,
    factor: f64,
    epsilon: f64,
}

impl OffsetSmoother {
    pub fn new(factor: f64, epsilon: f64) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            factor: factor.clamp(f64::EPSILON, 1.0),
            epsilon,
        }
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump to `value` with no interpolation
    pub fn snap_to(&mut self, value: f64) {
        self.target = value;
        self.current = value;
    }

    /// Advance one frame and return the new current value
    pub fn step(&mut self) -> f64 {
        if !self.is_settled() {
            self.current += (self.target - self.current) * self.factor;
            if (self.current - self.target).abs() < self.epsilon {
                self.current = self.target;
            }
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blends_by_factor() {
        let mut s = OffsetSmoother::new(0.1, 0.5);
        s.set_target(100.0);
        assert!((s.step() - 10.0).abs() < 1e-9);
        assert!((s.step() - 19.0).abs() < 1e-9);
    }

    #[test]
    fn test_settles_exactly() {
        let mut s = OffsetSmoother::new(0.1, 0.5);
        s.set_target(1000.0);
        let mut frames = 0;
        while !s.is_settled() {
            s.step();
            frames += 1;
            assert!(frames < 200, "smoother never settled");
        }
        assert_eq!(s.current(), 1000.0);
    }

    #[test]
    fn test_retarget_mid_chase() {
        let mut s = OffsetSmoother::new(0.5, 0.5);
        s.set_target(100.0);
        s.step();
        s.set_target(0.0);
        assert!((s.step() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_snap() {
        let mut s = OffsetSmoother::new(0.1, 0.5);
        s.snap_to(42.0);
        assert!(s.is_settled());
        assert_eq!(s.step(), 42.0);
    }
}
