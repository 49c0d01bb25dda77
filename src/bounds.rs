//! Selectable region resolution.
//!
//! The region starts below the page chrome (toolbar, else heading, else the
//! container top), spans the container horizontally and reaches at least to
//! the bottom of the viewport so a drag can extend into empty trailing space.

use crate::geometry::Rect;
use crate::host::Viewport;

/// Resolve the selectable bounds in viewport coordinates.
///
/// Returns `None` when no content container is mounted. Never cached: scroll,
/// resize and content changes all move these edges.
pub fn resolve_selectable_bounds<V: Viewport + ?Sized>(viewport: &V) -> Option<Rect> {
    let content = viewport.content_rect()?;

    let top = viewport
        .toolbar_rect()
        .or_else(|| viewport.heading_rect())
        .map(|chrome| chrome.bottom())
        .unwrap_or(content.top);

    let bottom = content.bottom().max(viewport.viewport_size().height);

    Some(Rect::from_edges(content.left, top, content.right(), bottom))
}
