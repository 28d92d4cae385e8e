//! Raw host input records.
//!
//! The host delivers these to the root view exactly once per native event,
//! untranslated. The root view converts positions into root-container-local
//! space before routing; containers translate further into child-local
//! space as events descend the tree.

use crate::geom::Point;

/// Pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Modifier key flags carried on every input record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
}

/// A single pointer event from the host.
#[derive(Debug, Clone, Copy)]
pub struct PointerInput {
    /// Position in the coordinate space of the receiving node.
    pub position: Point,
    /// Button involved, `None` for plain motion and wheel events.
    pub button: Option<PointerButton>,
    /// Host-reported click count for the press.
    pub click_count: u8,
    /// Vertical wheel delta, positive away from the user.
    pub wheel_delta: f32,
    pub modifiers: Modifiers,
    /// Host timestamp in milliseconds, used for double-click pairing.
    pub time_ms: u64,
}

impl PointerInput {
    pub fn press(button: PointerButton, position: Point, time_ms: u64) -> Self {
        Self {
            position,
            button: Some(button),
            click_count: 1,
            wheel_delta: 0.0,
            modifiers: Modifiers::default(),
            time_ms,
        }
    }

    pub fn release(button: PointerButton, position: Point, time_ms: u64) -> Self {
        Self {
            click_count: 0,
            ..Self::press(button, position, time_ms)
        }
    }

    pub fn motion(position: Point, time_ms: u64) -> Self {
        Self {
            position,
            button: None,
            click_count: 0,
            wheel_delta: 0.0,
            modifiers: Modifiers::default(),
            time_ms,
        }
    }

    pub fn wheel(delta: f32, position: Point, time_ms: u64) -> Self {
        Self {
            wheel_delta: delta,
            ..Self::motion(position, time_ms)
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Copy of this event with the position shifted into the space of a
    /// child whose origin sits at `origin`.
    pub(crate) fn into_local(self, origin: Point) -> Self {
        Self {
            position: Point::new(self.position.x - origin.x, self.position.y - origin.y),
            ..self
        }
    }
}

/// Key identifier. Only Tab has core semantics (focus traversal); everything
/// else is passed through to the focused node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Enter,
    Escape,
    Space,
    Left,
    Right,
    Up,
    Down,
    /// Host-specific key code for anything without a named variant.
    Other(u32),
}

/// A single keyboard event from the host.
#[derive(Debug, Clone, Copy)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyInput {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}
