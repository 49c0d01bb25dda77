//! Pointer up handling - finish the drag session.

use crate::engine::DragSelection;
use crate::events::PointerEvent;
use crate::host::Host;
use tracing::debug;

impl DragSelection {
    pub(crate) fn handle_pointer_up<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        _event: &PointerEvent,
    ) -> bool {
        if !self.state.is_dragging() {
            return false;
        }

        self.scroller.stop(host);

        // The click generated by this release must not clear what was just selected
        self.just_finished = true;

        if let Some(session) = self.state.finish() {
            let rect = session.rect();
            debug!(
                width = rect.width,
                height = rect.height,
                additive = session.additive,
                "Drag selection finished"
            );
        }
        self.overlay.hide(host);
        true
    }
}
