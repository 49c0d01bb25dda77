//! Keyboard handling.

use crate::engine::DragSelection;
use crate::events::KeyEvent;
use crate::host::Host;

impl DragSelection {
    /// Escape clears the selection in any state and cancels a live drag.
    pub(crate) fn handle_key_down<H: Host + ?Sized>(&mut self, host: &mut H, event: &KeyEvent) -> bool {
        if !event.is_escape() {
            return false;
        }
        if self.state.is_dragging() {
            self.cancel_drag(host);
        }
        host.clear_selection();
        true
    }
}
