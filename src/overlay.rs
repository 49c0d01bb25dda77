//! The selection rectangle overlay.
//!
//! One overlay element is created lazily and reused by every drag session of
//! an engine instance. This type only projects a rectangle onto the host; it
//! knows nothing about selection.

use crate::geometry::Rect;
use crate::host::{OverlayId, OverlaySurface};

#[derive(Debug, Default)]
pub struct SelectionOverlay {
    id: Option<OverlayId>,
    visible: bool,
    bounds: Rect,
}

impl SelectionOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<OverlayId> {
        self.id
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Last rectangle placed, in document coordinates.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Create the overlay element if it does not exist yet.
    pub fn ensure<S: OverlaySurface + ?Sized>(&mut self, surface: &mut S) -> OverlayId {
        match self.id {
            Some(id) => id,
            None => {
                let id = surface.create_overlay();
                surface.set_overlay_visible(id, false);
                self.id = Some(id);
                id
            }
        }
    }

    pub fn show<S: OverlaySurface + ?Sized>(&mut self, surface: &mut S, rect: Rect) {
        let id = self.ensure(surface);
        self.bounds = rect;
        surface.place_overlay(id, rect);
        surface.set_overlay_visible(id, true);
        self.visible = true;
    }

    pub fn set_bounds<S: OverlaySurface + ?Sized>(&mut self, surface: &mut S, rect: Rect) {
        self.bounds = rect;
        if let Some(id) = self.id {
            surface.place_overlay(id, rect);
        }
    }

    pub fn hide<S: OverlaySurface + ?Sized>(&mut self, surface: &mut S) {
        if let Some(id) = self.id {
            surface.set_overlay_visible(id, false);
        }
        self.visible = false;
    }

    /// Release the overlay element. No-op when it was never created.
    pub fn remove<S: OverlaySurface + ?Sized>(&mut self, surface: &mut S) {
        if let Some(id) = self.id.take() {
            surface.remove_overlay(id);
        }
        self.visible = false;
        self.bounds = Rect::default();
    }
}
