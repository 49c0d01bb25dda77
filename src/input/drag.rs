//! Drag updates - pointer moves and auto-scroll ticks.
//!
//! ## Performance Notes
//!
//! Both paths run at frame rate while dragging. Each update resolves the
//! bounds once, moves the overlay once and does a single reconciliation pass
//! over the items. Enable profiling with `cargo build --features profiling`
//! to see timing.

use crate::auto_scroll::compute_scroll_velocity;
use crate::bounds::resolve_selectable_bounds;
use crate::constants::RECONCILE_WARN_MS;
use crate::engine::DragSelection;
use crate::events::PointerEvent;
use crate::host::{FrameHandle, Host};
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::perf::measure_and_log;
use crate::profile_scope;
use crate::reconcile::{ReconcileStats, reconcile};
use tracing::trace;

impl DragSelection {
    pub(crate) fn handle_pointer_move<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        event: &PointerEvent,
    ) -> bool {
        profile_scope!("handle_pointer_move");

        let Some(session) = self.state.session_mut() else {
            return false;
        };
        session.pointer = event.position;

        let velocity = compute_scroll_velocity(
            event.position.y,
            host.viewport_size().height,
            &self.settings.auto_scroll,
        );
        self.scroller.update(velocity, host);

        self.apply_selection_box(host);
        true
    }

    /// One auto-scroll tick: scroll, then redo the rectangle against the new
    /// offset since no pointer event fires while the page moves under it.
    pub(crate) fn handle_frame<H: Host + ?Sized>(&mut self, host: &mut H, handle: FrameHandle) {
        profile_scope!("auto_scroll_tick");

        if !self.active || !self.state.is_dragging() {
            trace!(?handle, "Frame after session end");
            self.scroller.stop(host);
            return;
        }

        let Some(velocity) = self.scroller.accept_frame(handle) else {
            return;
        };

        host.scroll_by(velocity.x, velocity.y);
        self.apply_selection_box(host);
        self.scroller.reschedule(host);
    }

    /// Recompute the rectangle from the last pointer position, draw it and
    /// reconcile item selection.
    pub(crate) fn apply_selection_box<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> Option<ReconcileStats> {
        let bounds = resolve_selectable_bounds(&*host)?;
        let ctx = CoordinateContext::new(host.scroll_offset());

        let session = self.state.session_mut()?;
        session.current = CoordinateConverter::clamp_to_document(session.pointer, &bounds, &ctx);
        let rect = session.rect();

        self.overlay.set_bounds(host, rect);

        let client_rect = CoordinateConverter::rect_to_client(&rect, &ctx);
        let container = self.container;
        let stats = measure_and_log("reconcile", RECONCILE_WARN_MS, || {
            reconcile(host, container, &client_rect, &session.baseline)
        });

        trace!(
            examined = stats.examined,
            selected = stats.selected,
            changed = stats.changed,
            "Selection reconciled"
        );
        Some(stats)
    }
}
