//! Property tests for rectangle intersection.

use proptest::prelude::*;
use rubberband::geometry::{Point, Rect, intersects};

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (-1000.0f32..1000.0, -1000.0f32..1000.0, 0.0f32..500.0, 0.0f32..500.0)
        .prop_map(|(left, top, width, height)| Rect::new(left, top, width, height))
}

proptest! {
    #[test]
    fn intersection_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
        prop_assert_eq!(intersects(&a, &b), intersects(&b, &a));
    }

    #[test]
    fn rect_intersects_itself(a in rect_strategy()) {
        prop_assert!(intersects(&a, &a));
    }

    #[test]
    fn corner_touch_counts(a in rect_strategy(), w in 0.0f32..300.0, h in 0.0f32..300.0) {
        let b = Rect::new(a.right(), a.bottom(), w, h);
        prop_assert!(intersects(&a, &b));
        prop_assert!(intersects(&b, &a));
    }

    #[test]
    fn edge_touch_counts(a in rect_strategy(), w in 0.0f32..300.0) {
        let b = Rect::new(a.right(), a.top, w, a.height);
        prop_assert!(intersects(&a, &b));
    }

    #[test]
    fn horizontal_gap_separates(a in rect_strategy(), gap in 0.5f32..100.0, w in 0.0f32..300.0) {
        let b = Rect::new(a.right() + gap, a.top, w, a.height);
        prop_assert!(!intersects(&a, &b));
        prop_assert!(!intersects(&b, &a));
    }

    #[test]
    fn vertical_gap_separates(a in rect_strategy(), gap in 0.5f32..100.0, h in 0.0f32..300.0) {
        let b = Rect::new(a.left, a.bottom() + gap, a.width, h);
        prop_assert!(!intersects(&a, &b));
    }

    #[test]
    fn from_corners_is_order_independent(
        x1 in -500.0f32..500.0, y1 in -500.0f32..500.0,
        x2 in -500.0f32..500.0, y2 in -500.0f32..500.0,
    ) {
        let forward = Rect::from_corners(Point::new(x1, y1), Point::new(x2, y2));
        let backward = Rect::from_corners(Point::new(x2, y2), Point::new(x1, y1));
        prop_assert_eq!(forward, backward);
        prop_assert!(forward.width >= 0.0);
        prop_assert!(forward.height >= 0.0);
    }
}

#[test]
fn degenerate_rect_inside_other_intersects() {
    let point_rect = Rect::at(Point::new(50.0, 50.0));
    let card = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert!(point_rect.is_empty());
    assert!(intersects(&point_rect, &card));
}
