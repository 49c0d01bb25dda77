//! Capabilities the selection engine consumes from its host UI.
//!
//! The engine never touches a rendering toolkit directly. A host (a web view
//! bridge, a native canvas, or [`crate::page::ScriptedPage`] in tests)
//! implements these traits and passes itself into every engine call.
//!
//! Every query here must reflect the live layout: the engine calls them on
//! each pointer move and scroll tick and never caches the answers.

use crate::events::EventKind;
use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

pub use crate::scheduler::{FrameHandle, FrameScheduler};

/// Stable identifier of a selectable item.
pub type ItemId = u64;

/// Handle to the container whose descendants are selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId(pub u64);

/// Handle to the overlay element drawn for the selection rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverlayId(pub u64);

/// Handle to one input listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u64);

/// One selectable item as currently laid out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemBounds {
    pub id: ItemId,
    /// Bounding rectangle in viewport coordinates
    pub rect: Rect,
    pub selected: bool,
}

/// What lies under a viewport point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A selectable item (or one of its children)
    Item(ItemId),
    /// The context menu
    Menu,
    /// Inside the main content region but not on an item
    Content,
    /// Anywhere else (page chrome, sidebars, outside the window)
    Outside,
}

impl HitTarget {
    #[inline]
    pub fn is_item(&self) -> bool {
        matches!(self, Self::Item(_))
    }
}

/// Window geometry and page layout. All rectangles in viewport coordinates.
pub trait Viewport {
    fn viewport_size(&self) -> Size;

    /// Current document scroll offset.
    fn scroll_offset(&self) -> Point;

    /// Scroll the document; the host clamps to its scrollable range.
    fn scroll_by(&mut self, dx: f32, dy: f32);

    /// The main content container, or `None` when it is not mounted.
    fn content_rect(&self) -> Option<Rect>;

    /// Search/filter toolbar inside the content container, if present.
    fn toolbar_rect(&self) -> Option<Rect>;

    /// Page heading inside the content container, if present.
    fn heading_rect(&self) -> Option<Rect>;
}

/// Access to the selectable items and their shared selection marker.
pub trait ItemLayer {
    /// Whether the container is still attached to the page.
    fn contains_container(&self, container: ContainerId) -> bool;

    /// Enumerate the container's selectable items with fresh bounds.
    fn selectable_items(&self, container: ContainerId) -> Vec<ItemBounds>;

    fn set_selected(&mut self, id: ItemId, selected: bool);

    fn is_selected(&self, id: ItemId) -> bool;

    /// Deselect every item on the page.
    fn clear_selection(&mut self);

    fn hit_test(&self, point: Point) -> HitTarget;
}

/// The single overlay element the rectangle is drawn with.
pub trait OverlaySurface {
    fn create_overlay(&mut self) -> OverlayId;

    /// Position the overlay; `rect` is in document coordinates.
    fn place_overlay(&mut self, id: OverlayId, rect: Rect);

    fn set_overlay_visible(&mut self, id: OverlayId, visible: bool);

    fn remove_overlay(&mut self, id: OverlayId);
}

/// Listener registration on the host's event stream.
pub trait InputSource {
    fn listen(&mut self, kind: EventKind) -> ListenerId;

    fn unlisten(&mut self, id: ListenerId);
}

/// Everything the engine needs from a host.
pub trait Host: Viewport + ItemLayer + OverlaySurface + InputSource + FrameScheduler {}

impl<T> Host for T where T: Viewport + ItemLayer + OverlaySurface + InputSource + FrameScheduler {}
