//! Input vocabulary shared by both engines' input ports.

/// Logical key identity, independent of any terminal or windowing toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    Space,
    Other,
}

/// Where keyboard focus sits when a key arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Page,
    /// Text inputs, selects and the like; navigation keys belong to them
    FormControl,
    Carousel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
    pub focus: FocusTarget,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            shift: false,
            focus: FocusTarget::Page,
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn focused(mut self, focus: FocusTarget) -> Self {
        self.focus = focus;
        self
    }
}

/// What a pointer-down landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Links, buttons, inputs, labels: they keep their own behaviour
    Interactive,
    Surface,
}

/// Result of feeding one input event to an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Not for this engine; the host should apply its default behaviour
    Ignored,
    /// Handled without starting a transition
    Consumed,
    /// Handled but dropped because a transition is in flight
    Locked,
    /// A transition toward `index` started (or completed, under reduced motion)
    Committed { index: usize },
    /// The pager is heading back to the intro section
    ReturnedToIntro,
}

impl InputOutcome {
    /// Whether the host should suppress its default handling
    pub fn is_handled(&self) -> bool {
        !matches!(self, InputOutcome::Ignored)
    }
}
