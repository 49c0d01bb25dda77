//! Pointer, keyboard and frame input handling for the drag selection.
//!
//! ## Architecture
//!
//! The controller uses an explicit state machine (`DragState`) instead of an
//! `is_dragging` flag plus loose start coordinates, so a session's anchor,
//! pointer and baseline only exist while a drag does.
//!
//! ## Modules
//!
//! - `state` - Drag state machine and session data
//! - `coords` - Viewport/document coordinate conversion
//! - `mouse_down` - Session start (precondition checks, anchor, clearing)
//! - `drag` - Pointer move and auto-scroll ticks (rectangle + reconciliation)
//! - `mouse_up` - Session end and click guard
//! - `click` - Click-to-deselect and item click policy
//! - `keyboard` - Escape handling

pub mod coords;
mod click;
mod drag;
mod keyboard;
mod mouse_down;
mod mouse_up;
mod state;

pub use state::{DragSession, DragState};
