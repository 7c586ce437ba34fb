//! Display ring: the original items framed by one clone at each end.
//!
//! Positions run `0..=M+1`. Position 0 shows a copy of the last item and
//! position `M+1` a copy of the first, so stepping past either end lands on a
//! lookalike that can be swapped for its real counterpart without a visible jump.

#[derive(Debug, Clone)]
pub struct Ring<T> {
    originals: Vec<T>,
    display: Vec<T>,
}

impl<T: Clone> Ring<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut ring = Self {
            originals: items,
            display: Vec::new(),
        };
        ring.rebuild_clones();
        ring
    }

    /// Drop any existing clones and frame the originals again
    pub fn rebuild_clones(&mut self) {
        self.display.clear();
        let (Some(first), Some(last)) = (self.originals.first(), self.originals.last()) else {
            return;
        };
        self.display.reserve(self.originals.len() + 2);
        self.display.push(last.clone());
        self.display.extend(self.originals.iter().cloned());
        self.display.push(first.clone());
    }

    pub fn originals(&self) -> &[T] {
        &self.originals
    }

    pub fn display_items(&self) -> &[T] {
        &self.display
    }

    pub fn item_at(&self, position: usize) -> Option<&T> {
        self.display.get(position)
    }

    /// Number of original items (M)
    pub fn original_len(&self) -> usize {
        self.originals.len()
    }

    /// Number of display positions (M + 2 once clones are built)
    pub fn len(&self) -> usize {
        self.display.len()
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }

    /// Highest display position
    pub fn last_position(&self) -> usize {
        self.original_len() + 1
    }

    pub fn is_clone(&self, position: usize) -> bool {
        position == 0 || position == self.last_position()
    }

    /// The real position a clone stands in for; real positions map to themselves
    pub fn wrap(&self, position: usize) -> usize {
        let m = self.original_len();
        if position == 0 {
            m
        } else if position >= m + 1 {
            1
        } else {
            position
        }
    }

    /// Index into the originals for a display position
    pub fn real_index(&self, position: usize) -> usize {
        self.wrap(position).saturating_sub(1)
    }

    /// Display position of the middle original, used as the starting item
    pub fn middle_position(&self) -> usize {
        self.original_len() / 2 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> Ring<&'static str> {
        Ring::new(vec!["a", "b", "c", "d", "e"])
    }

    #[test]
    fn test_clones_frame_originals() {
        let r = ring();
        assert_eq!(r.display_items(), &["e", "a", "b", "c", "d", "e", "a"]);
        assert_eq!(r.len(), 7);
        assert_eq!(r.original_len(), 5);
    }

    #[test]
    fn test_rebuild_does_not_stack_clones() {
        let mut r = ring();
        r.rebuild_clones();
        r.rebuild_clones();
        assert_eq!(r.len(), 7);
    }

    #[test]
    fn test_wrap() {
        let r = ring();
        assert_eq!(r.wrap(0), 5);
        assert_eq!(r.wrap(6), 1);
        assert_eq!(r.wrap(3), 3);
        assert!(r.is_clone(0));
        assert!(r.is_clone(6));
        assert!(!r.is_clone(1));
    }

    #[test]
    fn test_real_index_and_middle() {
        let r = ring();
        assert_eq!(r.real_index(0), 4);
        assert_eq!(r.real_index(1), 0);
        assert_eq!(r.real_index(6), 0);
        assert_eq!(r.middle_position(), 3);
        assert_eq!(Ring::new(vec![1, 2]).middle_position(), 2);
    }

    #[test]
    fn test_empty_ring_has_no_display() {
        let r: Ring<u8> = Ring::new(Vec::new());
        assert!(r.is_empty());
    }
}
