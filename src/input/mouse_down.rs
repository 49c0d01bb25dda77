//! Pointer down handling - decide whether a drag session starts.
//!
//! A drag only starts on empty content below the page chrome. Anything else
//! (items, the context menu, chrome, a detached container) is left to other
//! handlers and silently ignored here.

use crate::bounds::resolve_selectable_bounds;
use crate::engine::DragSelection;
use crate::events::PointerEvent;
use crate::geometry::Rect;
use crate::host::{HitTarget, Host};
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::DragSession;
use crate::profile_scope;
use crate::reconcile::selected_in;
use crate::settings::AdditivePolicy;
use std::collections::HashSet;
use tracing::{debug, trace};

impl DragSelection {
    pub(crate) fn handle_pointer_down<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        event: &PointerEvent,
    ) -> bool {
        profile_scope!("handle_pointer_down");

        // A drag that ended without a trailing click leaves the guard armed;
        // a new press means that click is never coming.
        self.just_finished = false;

        if self.state.is_dragging() {
            return false;
        }
        if self.settings.primary_button_only && !event.is_primary() {
            return false;
        }
        if !host.contains_container(self.container) {
            trace!(container = ?self.container, "Container detached, not starting drag");
            return false;
        }

        match host.hit_test(event.position) {
            HitTarget::Content => {}
            target => {
                trace!(?target, "Pointer down not on empty content");
                return false;
            }
        }

        let Some(bounds) = resolve_selectable_bounds(&*host) else {
            return false;
        };
        if event.position.y < bounds.top {
            trace!(y = event.position.y, top = bounds.top, "Pointer down above selectable area");
            return false;
        }

        let ctx = CoordinateContext::new(host.scroll_offset());
        let anchor = CoordinateConverter::clamp_to_document(event.position, &bounds, &ctx);
        let additive = event.modifiers.is_additive();

        let baseline = if additive && self.settings.additive_policy == AdditivePolicy::PreserveBaseline {
            selected_in(&*host, self.container)
        } else {
            HashSet::new()
        };

        if !additive {
            host.clear_selection();
        }

        self.overlay.show(host, Rect::at(anchor));
        self.state
            .start(DragSession::new(anchor, event.position, additive, baseline));

        debug!(x = anchor.x, y = anchor.y, additive, "Drag selection started");
        true
    }
}
