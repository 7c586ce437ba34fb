//! Pointer drag tracking and swipe resolution.

/// Captured at pointer-down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub start_pointer_x: f64,
    /// Track offset when the drag began (possibly mid-animation)
    pub start_offset: f64,
}

impl DragState {
    pub fn new(start_pointer_x: f64, start_offset: f64) -> Self {
        Self {
            start_pointer_x,
            start_offset,
        }
    }

    pub fn delta(&self, pointer_x: f64) -> f64 {
        pointer_x - self.start_pointer_x
    }

    /// Track offset that follows the pointer 1:1
    pub fn offset_for(&self, pointer_x: f64) -> f64 {
        self.start_offset + self.delta(pointer_x)
    }
}

/// What a released drag asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Dragged left far enough: advance
    Next,
    /// Dragged right far enough: go back
    Prev,
    /// Snap back to the current item
    Stay,
}

impl Swipe {
    pub fn resolve(dx: f64, threshold: f64) -> Self {
        if dx <= -threshold {
            Swipe::Next
        } else if dx >= threshold {
            Swipe::Prev
        } else {
            Swipe::Stay
        }
    }

    pub fn delta(&self) -> i64 {
        match self {
            Swipe::Next => 1,
            Swipe::Prev => -1,
            Swipe::Stay => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_follows_pointer() {
        let drag = DragState::new(100.0, -250.0);
        assert_eq!(drag.delta(40.0), -60.0);
        assert_eq!(drag.offset_for(40.0), -310.0);
    }

    #[test]
    fn test_resolve() {
        assert_eq!(Swipe::resolve(-90.0, 90.0), Swipe::Next);
        assert_eq!(Swipe::resolve(90.0, 90.0), Swipe::Prev);
        assert_eq!(Swipe::resolve(-89.9, 90.0), Swipe::Stay);
        assert_eq!(Swipe::resolve(0.0, 90.0), Swipe::Stay);
    }
}
