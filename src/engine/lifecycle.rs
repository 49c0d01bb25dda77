//! Controller lifecycle - attach and detach.

use super::DragSelection;
use crate::auto_scroll::AutoScroller;
use crate::events::EventKind;
use crate::host::{ContainerId, Host};
use crate::input::DragState;
use crate::overlay::SelectionOverlay;
use crate::settings::EngineSettings;
use tracing::debug;

impl DragSelection {
    /// Register listeners and create the overlay for `container`.
    pub fn attach<H: Host + ?Sized>(
        host: &mut H,
        container: ContainerId,
        settings: EngineSettings,
    ) -> Self {
        let mut overlay = SelectionOverlay::new();
        overlay.ensure(host);

        let listeners = EventKind::ALL.iter().map(|kind| host.listen(*kind)).collect();

        debug!(?container, "Drag selection attached");

        Self {
            container,
            settings,
            state: DragState::default(),
            overlay,
            scroller: AutoScroller::new(),
            listeners,
            just_finished: false,
            active: true,
        }
    }

    /// Detach listeners, stop the scroll loop and remove the overlay.
    ///
    /// Safe to call any number of times.
    pub fn detach<H: Host + ?Sized>(&mut self, host: &mut H) {
        for id in self.listeners.drain(..) {
            host.unlisten(id);
        }
        self.scroller.stop(host);
        self.state.finish();
        self.just_finished = false;
        self.overlay.remove(host);

        if self.active {
            debug!(container = ?self.container, "Drag selection detached");
        }
        self.active = false;
    }

    /// End an in-flight drag without arming the click guard.
    pub(crate) fn cancel_drag<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.scroller.stop(host);
        if self.state.finish().is_some() {
            self.overlay.hide(host);
            debug!("Drag selection cancelled");
        }
    }
}
