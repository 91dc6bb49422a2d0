/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer activation of an element
    Click { target: String },
    /// Value edited (fires on every keystroke)
    Input { target: String, value: String },
    /// Value committed
    Change { target: String, value: String },
    /// Key press, targeted at the focused element if any
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }

    pub fn input(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Input {
            target: target.into(),
            value: value.into(),
        }
    }

    pub fn change(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Change {
            target: target.into(),
            value: value.into(),
        }
    }

    pub fn key(key: Key, modifiers: Modifiers) -> Self {
        Self::Key {
            target: None,
            key,
            modifiers,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Click { .. } => EventKind::Click,
            Self::Input { .. } => EventKind::Input,
            Self::Change { .. } => EventKind::Change,
            Self::Key { .. } => EventKind::Key,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Click { target }
            | Self::Input { target, .. }
            | Self::Change { target, .. } => Some(target),
            Self::Key { target, .. } => target.as_deref(),
        }
    }

    /// The carried value for input/change events.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Input { value, .. } | Self::Change { value, .. } => Some(value),
            _ => None,
        }
    }
}

/// Event discriminant used as a handler registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Input,
    Change,
    Key,
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}
