//! Engine module - the drag selection controller and its owner.
//!
//! This module is organized into:
//! - `state` - The DragSelection struct definition
//! - `lifecycle` - Attach/detach of listeners, overlay and scroll loop
//!
//! Event handlers live in `crate::input`, one file per event family, as
//! `impl DragSelection` blocks.
//!
//! [`SelectionEngine`] is what a host holds on to. It owns at most one
//! controller, so there is never more than one drag session per engine, and
//! its init/destroy entry points are safe in any order.

mod lifecycle;
mod state;

pub use state::DragSelection;

use crate::events::InputEvent;
use crate::host::{ContainerId, FrameHandle, Host};
use crate::settings::EngineSettings;
use tracing::{trace, warn};

impl DragSelection {
    /// Dispatch one input event. Returns true when the event was consumed
    /// and the host should suppress its default action.
    pub fn handle_event<H: Host + ?Sized>(&mut self, host: &mut H, event: &InputEvent) -> bool {
        if !self.active {
            return false;
        }

        match event {
            InputEvent::PointerDown(e) => self.handle_pointer_down(host, e),
            InputEvent::PointerMove(e) => self.handle_pointer_move(host, e),
            InputEvent::PointerUp(e) => self.handle_pointer_up(host, e),
            InputEvent::Click(e) => self.handle_click(host, e),
            InputEvent::KeyDown(e) => self.handle_key_down(host, e),
        }
    }
}

/// Owner of the drag selection controller for one page.
#[derive(Debug, Default)]
pub struct SelectionEngine {
    settings: EngineSettings,
    controller: Option<DragSelection>,
}

impl SelectionEngine {
    pub fn new(settings: EngineSettings) -> Self {
        warn_if_invalid(&settings);
        Self {
            settings,
            controller: None,
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Settings used by the next `init_drag_selection`.
    pub fn set_settings(&mut self, settings: EngineSettings) {
        warn_if_invalid(&settings);
        self.settings = settings;
    }

    pub fn is_initialized(&self) -> bool {
        self.controller.is_some()
    }

    pub fn controller(&self) -> Option<&DragSelection> {
        self.controller.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.as_ref().is_some_and(DragSelection::is_dragging)
    }

    /// Start handling drag selection for `container`. A previous controller,
    /// if any, is torn down first.
    pub fn init_drag_selection<H: Host + ?Sized>(&mut self, host: &mut H, container: ContainerId) {
        self.destroy_drag_selection(host);
        self.controller = Some(DragSelection::attach(host, container, self.settings.clone()));
    }

    /// Tear down the controller. No-op when nothing is initialized.
    pub fn destroy_drag_selection<H: Host + ?Sized>(&mut self, host: &mut H) {
        if let Some(mut controller) = self.controller.take() {
            controller.detach(host);
        }
    }

    pub fn handle_event<H: Host + ?Sized>(&mut self, host: &mut H, event: &InputEvent) -> bool {
        match self.controller.as_mut() {
            Some(controller) => controller.handle_event(host, event),
            None => false,
        }
    }

    /// Deliver a frame requested through the host's `FrameScheduler`.
    pub fn on_frame<H: Host + ?Sized>(&mut self, host: &mut H, handle: FrameHandle) {
        match self.controller.as_mut() {
            Some(controller) => controller.handle_frame(host, handle),
            None => trace!(?handle, "Frame delivered with no controller"),
        }
    }
}

fn warn_if_invalid(settings: &EngineSettings) {
    if let Err(e) = settings.validate() {
        warn!("Engine settings out of range, velocity will be sanitized: {}", e);
    }
}
