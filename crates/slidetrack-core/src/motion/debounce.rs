//! Atomic: trailing-edge debouncer
//!
//! Collapses a burst of triggers (resize storms, mostly) into one action that
//! runs once the input has been quiet for `wait`.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Debounce {
    wait: Duration,
    last_trigger: Option<Duration>,
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(Duration::from_millis(150))
    }
}

impl Debounce {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            last_trigger: None,
        }
    }

    /// Record a trigger, restarting the quiet period
    pub fn trigger(&mut self, now: Duration) {
        self.last_trigger = Some(now);
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.last_trigger.is_some()
    }

    /// Returns `true` exactly once per burst, on the first poll after the quiet period
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.last_trigger {
            Some(at) if now.saturating_sub(at) >= self.wait => {
                self.last_trigger = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.last_trigger = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_burst_collapses_to_one() {
        let mut d = Debounce::new(ms(120));
        d.trigger(ms(0));
        d.trigger(ms(50));
        d.trigger(ms(100));
        assert!(!d.poll(ms(200)));
        assert!(d.poll(ms(220)));
        assert!(!d.poll(ms(400)));
        assert!(!d.is_pending());
    }

    #[test]
    fn test_cancel() {
        let mut d = Debounce::default();
        d.trigger(ms(0));
        d.cancel();
        assert!(!d.poll(ms(1000)));
    }
}
