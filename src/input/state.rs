//! Drag state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging     (primary pointer down on empty content below the chrome)
//! Dragging -> Dragging (pointer move, auto-scroll tick)
//! Dragging -> Idle     (pointer up, Escape, teardown)
//! ```

use crate::geometry::{Point, Rect};
use crate::host::ItemId;
use std::collections::HashSet;

/// One live rubber-band drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Where the drag started, clamped to the selectable bounds (document coordinates)
    pub anchor: Point,
    /// Last clamped pointer position (document coordinates)
    pub current: Point,
    /// Last raw pointer position (viewport coordinates), replayed after scroll ticks
    pub pointer: Point,
    /// Ctrl/cmd was held when the drag started
    pub additive: bool,
    /// Items selected at drag start that an additive drag keeps
    pub baseline: HashSet<ItemId>,
}

impl DragSession {
    pub fn new(anchor: Point, pointer: Point, additive: bool, baseline: HashSet<ItemId>) -> Self {
        Self {
            anchor,
            current: anchor,
            pointer,
            additive,
            baseline,
        }
    }

    /// The selection rectangle in document coordinates.
    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.anchor, self.current)
    }
}

#[derive(Debug, Clone, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    pub fn start(&mut self, session: DragSession) {
        *self = Self::Dragging(session);
    }

    /// Return to Idle, handing back the finished session.
    pub fn finish(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }
}
