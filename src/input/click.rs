//! Click handling - click-to-deselect and the item click policy.

use crate::engine::DragSelection;
use crate::events::PointerEvent;
use crate::host::{HitTarget, Host};
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::selection::apply_item_click;
use tracing::trace;

impl DragSelection {
    pub(crate) fn handle_click<H: Host + ?Sized>(&mut self, host: &mut H, event: &PointerEvent) -> bool {
        if std::mem::take(&mut self.just_finished) {
            trace!("Click ending a drag, keeping selection");
            return true;
        }

        match host.hit_test(event.position) {
            HitTarget::Item(id) => {
                if !self.settings.select_on_item_click {
                    return false;
                }
                apply_item_click(host, id, event.modifiers);
                true
            }
            HitTarget::Menu => false,
            HitTarget::Content | HitTarget::Outside => {
                if self.overlay.is_visible() {
                    let ctx = CoordinateContext::new(host.scroll_offset());
                    let doc = CoordinateConverter::client_to_document(event.position, &ctx);
                    if self.overlay.bounds().contains_point(doc) {
                        return false;
                    }
                }
                host.clear_selection();
                true
            }
        }
    }
}
