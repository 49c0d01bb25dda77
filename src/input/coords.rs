//! Coordinate conversion between viewport and document space.
//!
//! Pointer events and item bounds arrive in viewport (client) coordinates.
//! The drag anchor is stored in document coordinates so it stays attached to
//! the content while the page auto-scrolls underneath the pointer.

use crate::geometry::{Point, Rect};

/// Context needed for coordinate conversions
#[derive(Debug, Clone, Copy)]
pub struct CoordinateContext {
    pub scroll_offset: Point,
}

impl CoordinateContext {
    #[inline]
    pub fn new(scroll_offset: Point) -> Self {
        Self { scroll_offset }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a viewport position to a document position
    #[inline]
    pub fn client_to_document(client: Point, ctx: &CoordinateContext) -> Point {
        client.offset(ctx.scroll_offset.x, ctx.scroll_offset.y)
    }

    /// Convert a document position to a viewport position
    #[inline]
    pub fn document_to_client(doc: Point, ctx: &CoordinateContext) -> Point {
        doc.offset(-ctx.scroll_offset.x, -ctx.scroll_offset.y)
    }

    /// Convert a document rectangle to viewport coordinates
    #[inline]
    pub fn rect_to_client(rect: &Rect, ctx: &CoordinateContext) -> Rect {
        rect.translate(-ctx.scroll_offset.x, -ctx.scroll_offset.y)
    }

    /// Clamp a viewport position into `bounds` (viewport coordinates) and
    /// return it in document coordinates.
    #[inline]
    pub fn clamp_to_document(client: Point, bounds: &Rect, ctx: &CoordinateContext) -> Point {
        Self::client_to_document(bounds.clamp_point(client), ctx)
    }
}
