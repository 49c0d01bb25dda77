//! Controller state - the DragSelection struct.

use crate::auto_scroll::{AutoScroller, ScrollVelocity};
use crate::host::{ContainerId, ListenerId};
use crate::input::{DragSession, DragState};
use crate::overlay::SelectionOverlay;
use crate::settings::EngineSettings;

/// Rubber-band selection controller bound to one container.
///
/// Created by [`DragSelection::attach`] and torn down by
/// [`DragSelection::detach`]. All per-session state (the drag, the scroll
/// loop ticket, the overlay handle and the post-drag click guard) lives here
/// rather than in globals, so independent containers get independent
/// controllers.
#[derive(Debug)]
pub struct DragSelection {
    pub(crate) container: ContainerId,
    pub(crate) settings: EngineSettings,
    pub(crate) state: DragState,
    pub(crate) overlay: SelectionOverlay,
    pub(crate) scroller: AutoScroller,
    pub(crate) listeners: Vec<ListenerId>,
    /// One-shot guard so the click that ends a drag keeps its selection
    pub(crate) just_finished: bool,
    pub(crate) active: bool,
}

impl DragSelection {
    pub fn container(&self) -> ContainerId {
        self.container
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// False once detached; a detached controller ignores all input.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.state.session()
    }

    pub fn overlay(&self) -> &SelectionOverlay {
        &self.overlay
    }

    pub fn scroll_velocity(&self) -> ScrollVelocity {
        self.scroller.velocity()
    }

    pub fn is_auto_scrolling(&self) -> bool {
        self.scroller.is_running()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
