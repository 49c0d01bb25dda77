//! Input events delivered by the host to the selection engine.
//!
//! Positions are always in viewport (client) coordinates, the way a window
//! system reports them. The engine converts to document coordinates itself.

use crate::constants::{ESCAPE_KEY, PRIMARY_BUTTON};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Keyboard modifier state at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };

    /// Ctrl on Windows/Linux, Cmd on macOS: extend instead of replace.
    #[inline]
    pub fn is_additive(&self) -> bool {
        self.ctrl || self.meta
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Self::NONE
        }
    }
}

/// Pointer down/move/up/click payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub position: Point,
    #[serde(default)]
    pub button: u8,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
            button: PRIMARY_BUTTON,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_button(mut self, button: u8) -> Self {
        self.button = button;
        self
    }

    #[inline]
    pub fn is_primary(&self) -> bool {
        self.button == PRIMARY_BUTTON
    }
}

/// Key press payload. `key` follows the web `KeyboardEvent.key` naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::NONE,
        }
    }

    pub fn escape() -> Self {
        Self::new(ESCAPE_KEY)
    }

    #[inline]
    pub fn is_escape(&self) -> bool {
        self.key == ESCAPE_KEY
    }
}

/// Every event kind the engine listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    PointerDown,
    PointerMove,
    PointerUp,
    Click,
    KeyDown,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::PointerDown,
        EventKind::PointerMove,
        EventKind::PointerUp,
        EventKind::Click,
        EventKind::KeyDown,
    ];
}

/// A single input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp(PointerEvent),
    Click(PointerEvent),
    KeyDown(KeyEvent),
}

impl InputEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::PointerDown(_) => EventKind::PointerDown,
            Self::PointerMove(_) => EventKind::PointerMove,
            Self::PointerUp(_) => EventKind::PointerUp,
            Self::Click(_) => EventKind::Click,
            Self::KeyDown(_) => EventKind::KeyDown,
        }
    }
}
