//! In-memory page implementing every host capability.
//!
//! `ScriptedPage` models a vertically scrolling document: a content container
//! with optional toolbar/heading chrome, a grid of item cards, a context menu
//! and a viewport. Item hit testing goes through the R-tree in
//! [`crate::spatial_index`]. The replay tool and the tests drive the engine
//! against it.

use crate::engine::SelectionEngine;
use crate::events::{EventKind, InputEvent};
use crate::geometry::{Point, Rect, Size};
use crate::host::{
    ContainerId, FrameHandle, FrameScheduler, HitTarget, InputSource, ItemBounds, ItemId,
    ItemLayer, ListenerId, OverlayId, OverlaySurface, Viewport,
};
use crate::scheduler::ManualFrameScheduler;
use crate::selection::SelectionStore;
use crate::spatial_index::SpatialIndex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Container id used by pages built from a [`PageLayout`].
pub const DEFAULT_CONTAINER: ContainerId = ContainerId(1);

/// Page chrome rectangle. Sticky chrome stays put in the viewport; other
/// chrome scrolls with the document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChromeRect {
    pub rect: Rect,
    #[serde(default)]
    pub sticky: bool,
}

/// An item card in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub id: ItemId,
    pub rect: Rect,
}

/// Serializable description of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub viewport: Size,
    /// Content container in document coordinates
    #[serde(default)]
    pub content: Option<Rect>,
    #[serde(default)]
    pub toolbar: Option<ChromeRect>,
    #[serde(default)]
    pub heading: Option<ChromeRect>,
    /// Context menu in viewport coordinates
    #[serde(default)]
    pub menu: Option<Rect>,
    /// Scrollable document height; defaults to the lowest content or item edge
    #[serde(default)]
    pub document_height: Option<f32>,
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

/// State of one overlay element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayRecord {
    pub rect: Rect,
    pub visible: bool,
}

pub struct ScriptedPage {
    layout: PageLayout,
    scroll: Point,
    container: ContainerId,
    container_attached: bool,
    index: SpatialIndex,
    selection: SelectionStore,
    overlays: HashMap<OverlayId, OverlayRecord>,
    overlays_created: u64,
    listeners: HashMap<ListenerId, EventKind>,
    next_listener: u64,
    frames: ManualFrameScheduler,
}

impl ScriptedPage {
    pub fn new(layout: PageLayout) -> Self {
        let index = SpatialIndex::from_items(layout.items.iter().map(|item| (item.id, item.rect)));
        Self {
            layout,
            scroll: Point::default(),
            container: DEFAULT_CONTAINER,
            container_attached: true,
            index,
            selection: SelectionStore::new(),
            overlays: HashMap::new(),
            overlays_created: 0,
            listeners: HashMap::new(),
            next_listener: 0,
            frames: ManualFrameScheduler::new(),
        }
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn container(&self) -> ContainerId {
        self.container
    }

    /// Shared selection marker, as handed to other components.
    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    /// Selected ids in ascending order.
    pub fn selected_ids(&self) -> Vec<ItemId> {
        let mut ids = self.selection.selected_ids();
        ids.sort_unstable();
        ids
    }

    pub fn set_scroll(&mut self, x: f32, y: f32) {
        self.scroll = Point::new(x, y);
        self.clamp_scroll();
    }

    pub fn set_viewport_size(&mut self, size: Size) {
        self.layout.viewport = size;
        self.clamp_scroll();
    }

    pub fn set_container_attached(&mut self, attached: bool) {
        self.container_attached = attached;
    }

    pub fn add_item(&mut self, id: ItemId, rect: Rect) {
        self.layout.items.retain(|item| item.id != id);
        self.layout.items.push(ItemSpec { id, rect });
        self.index.insert(id, rect);
    }

    pub fn remove_item(&mut self, id: ItemId) -> bool {
        self.layout.items.retain(|item| item.id != id);
        self.selection.set(id, false);
        self.index.remove(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_listening(&self, kind: EventKind) -> bool {
        self.listeners.values().any(|k| *k == kind)
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.pending_count()
    }

    pub fn frames_requested(&self) -> u64 {
        self.frames.requested_total()
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    pub fn overlays_created(&self) -> u64 {
        self.overlays_created
    }

    /// The single live overlay, if exactly one exists.
    pub fn overlay(&self) -> Option<OverlayRecord> {
        match self.overlays.len() {
            1 => self.overlays.values().next().copied(),
            _ => None,
        }
    }

    /// Deliver an event the way a browser would: only if someone listens.
    pub fn dispatch(&mut self, engine: &mut SelectionEngine, event: &InputEvent) -> bool {
        if !self.is_listening(event.kind()) {
            return false;
        }
        engine.handle_event(self, event)
    }

    /// Fire up to `max` pending frames in request order. Returns how many ran.
    pub fn run_frames(&mut self, engine: &mut SelectionEngine, max: usize) -> usize {
        let mut ran = 0;
        while ran < max {
            let Some(handle) = self.frames.next_frame() else {
                break;
            };
            engine.on_frame(self, handle);
            ran += 1;
        }
        ran
    }

    fn max_scroll(&self) -> Point {
        let viewport = self.layout.viewport;
        let content = self.layout.content.unwrap_or_default();
        let items_bottom = self
            .layout
            .items
            .iter()
            .map(|item| item.rect.bottom())
            .fold(0.0_f32, f32::max);
        let items_right = self
            .layout
            .items
            .iter()
            .map(|item| item.rect.right())
            .fold(0.0_f32, f32::max);

        let height = self
            .layout
            .document_height
            .unwrap_or_else(|| content.bottom().max(items_bottom));
        let width = content.right().max(items_right);

        Point::new(
            (width - viewport.width).max(0.0),
            (height - viewport.height).max(0.0),
        )
    }

    fn clamp_scroll(&mut self) {
        let max = self.max_scroll();
        self.scroll = Point::new(self.scroll.x.clamp(0.0, max.x), self.scroll.y.clamp(0.0, max.y));
    }

    fn chrome_to_client(&self, chrome: Option<ChromeRect>) -> Option<Rect> {
        chrome.map(|c| {
            if c.sticky {
                c.rect
            } else {
                c.rect.translate(-self.scroll.x, -self.scroll.y)
            }
        })
    }
}

impl Viewport for ScriptedPage {
    fn viewport_size(&self) -> Size {
        self.layout.viewport
    }

    fn scroll_offset(&self) -> Point {
        self.scroll
    }

    fn scroll_by(&mut self, dx: f32, dy: f32) {
        self.scroll = self.scroll.offset(dx, dy);
        self.clamp_scroll();
    }

    fn content_rect(&self) -> Option<Rect> {
        self.layout
            .content
            .map(|rect| rect.translate(-self.scroll.x, -self.scroll.y))
    }

    fn toolbar_rect(&self) -> Option<Rect> {
        self.chrome_to_client(self.layout.toolbar)
    }

    fn heading_rect(&self) -> Option<Rect> {
        self.chrome_to_client(self.layout.heading)
    }
}

impl ItemLayer for ScriptedPage {
    fn contains_container(&self, container: ContainerId) -> bool {
        self.container_attached && container == self.container
    }

    fn selectable_items(&self, container: ContainerId) -> Vec<ItemBounds> {
        if !self.contains_container(container) {
            return Vec::new();
        }
        self.layout
            .items
            .iter()
            .map(|item| ItemBounds {
                id: item.id,
                rect: item.rect.translate(-self.scroll.x, -self.scroll.y),
                selected: self.selection.is_selected(item.id),
            })
            .collect()
    }

    fn set_selected(&mut self, id: ItemId, selected: bool) {
        self.selection.set(id, selected);
    }

    fn is_selected(&self, id: ItemId) -> bool {
        self.selection.is_selected(id)
    }

    fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn hit_test(&self, point: Point) -> HitTarget {
        if self.layout.menu.is_some_and(|menu| menu.contains_point(point)) {
            return HitTarget::Menu;
        }

        let doc = point.offset(self.scroll.x, self.scroll.y);
        if self.container_attached {
            let candidates = self.index.query_point(doc);
            // Later items paint on top
            let topmost = self
                .layout
                .items
                .iter()
                .rev()
                .find(|item| candidates.contains(&item.id));
            if let Some(item) = topmost {
                return HitTarget::Item(item.id);
            }
        }

        match self.content_rect() {
            Some(content) if content.contains_point(point) => HitTarget::Content,
            _ => HitTarget::Outside,
        }
    }
}

impl OverlaySurface for ScriptedPage {
    fn create_overlay(&mut self) -> OverlayId {
        self.overlays_created += 1;
        let id = OverlayId(self.overlays_created);
        self.overlays.insert(id, OverlayRecord::default());
        id
    }

    fn place_overlay(&mut self, id: OverlayId, rect: Rect) {
        if let Some(record) = self.overlays.get_mut(&id) {
            record.rect = rect;
        }
    }

    fn set_overlay_visible(&mut self, id: OverlayId, visible: bool) {
        if let Some(record) = self.overlays.get_mut(&id) {
            record.visible = visible;
        }
    }

    fn remove_overlay(&mut self, id: OverlayId) {
        self.overlays.remove(&id);
    }
}

impl InputSource for ScriptedPage {
    fn listen(&mut self, kind: EventKind) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.insert(id, kind);
        id
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }
}

impl FrameScheduler for ScriptedPage {
    fn request_frame(&mut self) -> FrameHandle {
        self.frames.request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.frames.cancel_frame(handle);
    }
}
