//! Selection reconciliation: item flags follow the live rectangle.
//!
//! Runs on every pointer move and every auto-scroll tick, so it does a single
//! pass over freshly resolved item bounds and only writes flags that change.

use crate::geometry::{Rect, intersects};
use crate::host::{ContainerId, ItemId, ItemLayer};
use crate::profile_scope;
use std::collections::HashSet;

/// Counters from one reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileStats {
    pub examined: usize,
    pub selected: usize,
    pub changed: usize,
}

/// Set every item's flag to whether it intersects `rect` (viewport
/// coordinates) or belongs to `baseline`.
pub fn reconcile<L: ItemLayer + ?Sized>(
    layer: &mut L,
    container: ContainerId,
    rect: &Rect,
    baseline: &HashSet<ItemId>,
) -> ReconcileStats {
    profile_scope!("reconcile");

    let items = layer.selectable_items(container);
    let mut stats = ReconcileStats {
        examined: items.len(),
        ..Default::default()
    };

    for item in items {
        let selected = intersects(rect, &item.rect) || baseline.contains(&item.id);
        if selected {
            stats.selected += 1;
        }
        if selected != item.selected {
            layer.set_selected(item.id, selected);
            stats.changed += 1;
        }
    }

    stats
}

/// Ids currently flagged selected inside the container.
pub fn selected_in<L: ItemLayer + ?Sized>(layer: &L, container: ContainerId) -> HashSet<ItemId> {
    layer
        .selectable_items(container)
        .into_iter()
        .filter(|item| item.selected)
        .map(|item| item.id)
        .collect()
}
