//! Shared selection model.
//!
//! The selected flag is not private to the drag engine: item click handlers
//! and the context menu read and write it too. [`SelectionStore`] is the
//! marker a host can hand out to all of them, and the policy functions below
//! are the click behaviors of the file grid, expressed over [`ItemLayer`] so
//! they work with any host.

use crate::events::Modifiers;
use crate::host::{ItemId, ItemLayer};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Selected ids, each tagged with the order it was selected in.
#[derive(Debug, Default)]
struct SelectedIds {
    members: HashMap<ItemId, u64>,
    next_seq: u64,
}

impl SelectedIds {
    fn insert(&mut self, id: ItemId) {
        if !self.members.contains_key(&id) {
            self.members.insert(id, self.next_seq);
            self.next_seq += 1;
        }
    }

    fn clear(&mut self) {
        self.members.clear();
        self.next_seq = 0;
    }
}

/// Cloneable handle to a set of selected ids, kept in selection order.
///
/// Membership checks and updates are O(1); every read-modify-write runs
/// under a single lock guard.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    inner: Arc<RwLock<SelectedIds>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.inner.read().members.contains_key(&id)
    }

    pub fn set(&self, id: ItemId, selected: bool) {
        let mut ids = self.inner.write();
        if selected {
            ids.insert(id);
        } else {
            ids.members.remove(&id);
        }
    }

    /// Flip one id, returning its new state.
    pub fn toggle(&self, id: ItemId) -> bool {
        let mut ids = self.inner.write();
        if ids.members.remove(&id).is_some() {
            false
        } else {
            ids.insert(id);
            true
        }
    }

    pub fn select_only(&self, id: ItemId) {
        let mut ids = self.inner.write();
        ids.clear();
        ids.insert(id);
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Snapshot of the selected ids in the order they were selected.
    pub fn selected_ids(&self) -> Vec<ItemId> {
        let ids = self.inner.read();
        let mut ordered: Vec<(u64, ItemId)> = ids.members.iter().map(|(id, seq)| (*seq, *id)).collect();
        ordered.sort_unstable();
        ordered.into_iter().map(|(_, id)| id).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().members.is_empty()
    }
}

/// Click on an item: ctrl/cmd toggles it, a plain click selects only it.
pub fn apply_item_click<L: ItemLayer + ?Sized>(layer: &mut L, id: ItemId, modifiers: Modifiers) {
    if modifiers.is_additive() {
        let selected = layer.is_selected(id);
        layer.set_selected(id, !selected);
    } else {
        layer.clear_selection();
        layer.set_selected(id, true);
    }
}

/// Prepare the selection before opening the context menu on an item.
///
/// An item that is already part of the selection keeps the whole
/// multi-selection so the menu acts on all of it.
pub fn select_for_context_menu<L: ItemLayer + ?Sized>(layer: &mut L, id: ItemId) {
    if layer.is_selected(id) {
        return;
    }
    layer.clear_selection();
    layer.set_selected(id, true);
}
