// Author: Dustin Pilgrim
// License: MIT

use crate::geometry::MinSize;
use crate::handle::HandleRole;
use crate::rect::{Rect, Size};
use crate::thickness::EdgeThickness;

/// Placement of every handle for a target of `size`, indexed by
/// [`HandleRole::index`]. Absent handles get [`Rect::ZERO`].
///
/// Corners are `2 * thickness` boxes anchored at their corner; edges are
/// `thickness` strips running between the two corner boxes. The size is
/// raised to `min` first. Extents that go negative on a tiny target are
/// clamped to zero.
pub fn layout(thickness: &EdgeThickness, size: Size, min: MinSize) -> [Rect; 8] {
    let w = size.width.max(min.width);
    let h = size.height.max(min.height);
    let EdgeThickness {
        left: l,
        top: t,
        right: r,
        bottom: b,
    } = *thickness;

    let span_w = w - 2.0 * l - 2.0 * r;
    let span_h = h - 2.0 * t - 2.0 * b;

    let mut out = [Rect::ZERO; 8];
    for role in HandleRole::ALL {
        if !role.exists(thickness) {
            continue;
        }
        out[role.index()] = match role {
            HandleRole::TopLeft => Rect::safe(0.0, 0.0, 2.0 * l, 2.0 * t),
            HandleRole::Top => Rect::safe(2.0 * l, 0.0, span_w, t),
            HandleRole::TopRight => Rect::safe(w - 2.0 * r, 0.0, 2.0 * r, 2.0 * t),
            HandleRole::Left => Rect::safe(0.0, 2.0 * t, l, span_h),
            HandleRole::Right => Rect::safe(w - r, 2.0 * t, r, span_h),
            HandleRole::BottomLeft => Rect::safe(0.0, h - 2.0 * b, 2.0 * l, 2.0 * b),
            HandleRole::Bottom => Rect::safe(2.0 * l, h - b, span_w, b),
            HandleRole::BottomRight => Rect::safe(w - 2.0 * r, h - 2.0 * b, 2.0 * r, 2.0 * b),
        };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect { x, y, w, h }
    }

    #[test]
    fn default_thickness_places_three_handles() {
        let t = EdgeThickness::default();
        let rects = layout(&t, Size::new(100.0, 50.0), t.default_min_size());

        assert_eq!(rects[HandleRole::Right.index()], rect(94.0, 0.0, 6.0, 38.0));
        assert_eq!(rects[HandleRole::Bottom.index()], rect(0.0, 44.0, 88.0, 6.0));
        assert_eq!(rects[HandleRole::BottomRight.index()], rect(88.0, 38.0, 12.0, 12.0));

        for role in [
            HandleRole::Left,
            HandleRole::Top,
            HandleRole::TopLeft,
            HandleRole::TopRight,
            HandleRole::BottomLeft,
        ] {
            assert_eq!(rects[role.index()], Rect::ZERO, "{role}");
        }
    }

    #[test]
    fn uniform_thickness_frames_the_target() {
        let t = EdgeThickness::uniform(4.0);
        let rects = layout(&t, Size::new(60.0, 40.0), MinSize::default());

        assert_eq!(rects[HandleRole::TopLeft.index()], rect(0.0, 0.0, 8.0, 8.0));
        assert_eq!(rects[HandleRole::Top.index()], rect(8.0, 0.0, 44.0, 4.0));
        assert_eq!(rects[HandleRole::TopRight.index()], rect(52.0, 0.0, 8.0, 8.0));
        assert_eq!(rects[HandleRole::Left.index()], rect(0.0, 8.0, 4.0, 24.0));
        assert_eq!(rects[HandleRole::Right.index()], rect(56.0, 8.0, 4.0, 24.0));
        assert_eq!(rects[HandleRole::BottomLeft.index()], rect(0.0, 32.0, 8.0, 8.0));
        assert_eq!(rects[HandleRole::Bottom.index()], rect(8.0, 36.0, 44.0, 4.0));
        assert_eq!(rects[HandleRole::BottomRight.index()], rect(52.0, 32.0, 8.0, 8.0));
    }

    #[test]
    fn tiny_target_collapses_edges_instead_of_going_negative() {
        let t = EdgeThickness::uniform(6.0);
        let rects = layout(&t, Size::new(10.0, 10.0), MinSize::default());

        for r in rects {
            assert!(r.w >= 0.0 && r.h >= 0.0, "{r:?}");
        }
        assert_eq!(rects[HandleRole::Top.index()].w, 0.0);
        assert_eq!(rects[HandleRole::Left.index()].h, 0.0);
    }

    #[test]
    fn size_is_raised_to_the_floor() {
        let t = EdgeThickness::default();
        let rects = layout(&t, Size::new(2.0, 2.0), MinSize::new(30.0, 20.0));
        assert_eq!(rects[HandleRole::BottomRight.index()], rect(18.0, 8.0, 12.0, 12.0));
    }

    #[test]
    fn layout_is_idempotent() {
        let t = EdgeThickness::new(2.0, 3.0, 4.0, 5.0);
        let a = layout(&t, Size::new(77.0, 41.0), t.default_min_size());
        let b = layout(&t, Size::new(77.0, 41.0), t.default_min_size());
        assert_eq!(a, b);
    }
}
