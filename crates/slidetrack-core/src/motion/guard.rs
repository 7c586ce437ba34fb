//! Atomic: one-shot completion guard
//!
//! A transition can be finished by two paths: the environment's completion
//! signal and a safety deadline. Whichever arrives first fires the guard; the
//! other finds it already done and does nothing.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionGuard {
    deadline: Duration,
    done: bool,
}

impl CompletionGuard {
    /// Arm a guard whose safety deadline is `timeout` after `now`
    pub fn new(now: Duration, timeout: Duration) -> Self {
        Self {
            deadline: now + timeout,
            done: false,
        }
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The deadline has passed and nobody has fired the guard yet
    #[inline]
    pub fn is_overdue(&self, now: Duration) -> bool {
        !self.done && now >= self.deadline
    }

    /// Mark the guarded transition complete. Returns `true` only for the first call.
    pub fn fire(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.done = true;
        true
    }
}
