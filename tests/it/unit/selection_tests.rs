//! Unit tests for the selection store, click policy and reconciliation.

use crate::helpers::{TestPageBuilder, card_page, down, engine_on, move_to};
use rubberband::events::Modifiers;
use rubberband::geometry::Rect;
use rubberband::host::ItemLayer;
use rubberband::reconcile::{reconcile, selected_in};
use rubberband::selection::{SelectionStore, apply_item_click, select_for_context_menu};
use std::collections::HashSet;
use std::thread;

#[test]
fn test_store_clones_share_state() {
    let store = SelectionStore::new();
    let handle = store.clone();

    handle.set(4, true);
    assert!(store.is_selected(4));

    assert!(!store.toggle(4));
    assert!(handle.is_empty());
}

#[test]
fn test_store_keeps_selection_order() {
    let store = SelectionStore::new();
    store.set(9, true);
    store.set(2, true);
    store.set(5, true);
    assert_eq!(store.selected_ids(), vec![9, 2, 5]);

    store.select_only(2);
    assert_eq!(store.selected_ids(), vec![2]);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_concurrent_toggles_are_not_lost() {
    let store = SelectionStore::new();
    const THREADS: usize = 4;
    const TOGGLES: usize = 1001;

    let turned_on: usize = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let store = store.clone();
                scope.spawn(move || (0..TOGGLES).filter(|_| store.toggle(1)).count())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });

    // An even number of atomic flips ends deselected, half of them turning it on
    assert!(!store.is_selected(1));
    assert_eq!(turned_on, THREADS * TOGGLES / 2);
}

#[test]
fn test_large_grid_drag_selects_and_releases() {
    let mut page = TestPageBuilder::new().build();
    let mut id = 100;
    for row in 0..100 {
        for col in 0..50 {
            page.add_item(id, Rect::new(10.0 + 20.0 * col as f32, 200.0 + 20.0 * row as f32, 10.0, 10.0));
            id += 1;
        }
    }
    let mut engine = engine_on(&mut page);

    page.dispatch(&mut engine, &down(5.0, 70.0));
    page.dispatch(&mut engine, &move_to(999.0, 599.0));
    // Rows starting at y <= 599: 20 rows of 50
    assert_eq!(page.selection().len(), 1000);

    page.dispatch(&mut engine, &move_to(500.0, 70.0));
    assert!(page.selection().is_empty());
}

#[test]
fn test_plain_click_selects_only_that_item() {
    let mut page = card_page();
    page.set_selected(1, true);
    page.set_selected(2, true);

    apply_item_click(&mut page, 3, Modifiers::NONE);

    assert_eq!(page.selected_ids(), vec![3]);
}

#[test]
fn test_modifier_click_toggles() {
    let mut page = card_page();
    page.set_selected(1, true);

    apply_item_click(&mut page, 2, Modifiers::ctrl());
    assert_eq!(page.selected_ids(), vec![1, 2]);

    apply_item_click(&mut page, 1, Modifiers::meta());
    assert_eq!(page.selected_ids(), vec![2]);
}

#[test]
fn test_context_menu_keeps_multi_selection() {
    let mut page = card_page();
    page.set_selected(1, true);
    page.set_selected(2, true);

    select_for_context_menu(&mut page, 2);
    assert_eq!(page.selected_ids(), vec![1, 2]);
}

#[test]
fn test_context_menu_on_unselected_item_replaces_selection() {
    let mut page = card_page();
    page.set_selected(1, true);
    page.set_selected(2, true);

    select_for_context_menu(&mut page, 4);
    assert_eq!(page.selected_ids(), vec![4]);
}

#[test]
fn test_reconcile_selects_intersecting_items() {
    let mut page = card_page();
    let container = page.container();

    let stats = reconcile(&mut page, container, &Rect::new(50.0, 80.0, 400.0, 170.0), &HashSet::new());

    assert_eq!(page.selected_ids(), vec![1, 2]);
    assert_eq!(stats.examined, 5);
    assert_eq!(stats.selected, 2);
    assert_eq!(stats.changed, 2);
}

#[test]
fn test_reconcile_only_writes_changes() {
    let mut page = card_page();
    let container = page.container();
    let rect = Rect::new(50.0, 80.0, 200.0, 170.0);

    reconcile(&mut page, container, &rect, &HashSet::new());
    let stats = reconcile(&mut page, container, &rect, &HashSet::new());

    assert_eq!(stats.changed, 0);
    assert_eq!(page.selected_ids(), vec![1]);
}

#[test]
fn test_reconcile_keeps_baseline() {
    let mut page = card_page();
    let container = page.container();
    page.set_selected(4, true);
    let baseline = selected_in(&page, container);

    reconcile(&mut page, container, &Rect::new(50.0, 80.0, 200.0, 170.0), &baseline);

    assert_eq!(page.selected_ids(), vec![1, 4]);
}

#[test]
fn test_reconcile_uses_viewport_coordinates() {
    let mut page = card_page();
    let container = page.container();
    page.set_scroll(0.0, 100.0);

    // Card 3 sits at document y=300, so y=200 on screen
    reconcile(&mut page, container, &Rect::new(120.0, 210.0, 10.0, 10.0), &HashSet::new());

    assert_eq!(page.selected_ids(), vec![3]);
}
