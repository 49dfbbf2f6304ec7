// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::geometry::{Geometry, MinSize};
use crate::handle::HandleRole;
use crate::modifiers::Modifiers;

/// Pointer displacement since the previous event of the same gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DragDelta {
    pub dx: f64,
    pub dy: f64,
}

impl DragDelta {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// Constraints frozen at construction and shared by every gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragLimits {
    pub min: MinSize,
    /// Position deltas are dropped unless the target can be placed freely.
    pub free_positioning: bool,
}

/// Applies one drag delta from `role` to `geometry` and returns the result.
///
/// Left/top edges move the origin with the pointer and resize by the
/// negated delta; right/bottom edges resize by the raw delta. Shift turns
/// any handle into a move: right/bottom replay the event as left/top (which
/// then skip their resize), corners translate by `(dx, dy)`. Control on a
/// corner keeps the current width/height ratio.
///
/// Sizes are clamped to `limits.min`. Position deltas are applied in full
/// even when the matching size change was clamped away.
pub fn apply_drag(
    role: HandleRole,
    geometry: &Geometry,
    delta: DragDelta,
    modifiers: Modifiers,
    limits: &DragLimits,
) -> Geometry {
    let mut g = *geometry;
    let DragDelta { dx, dy } = delta;

    match role {
        HandleRole::Left => drag_left(&mut g, dx, modifiers, limits),
        HandleRole::Top => drag_top(&mut g, dy, modifiers, limits),

        HandleRole::Right => {
            if modifiers.shift {
                drag_left(&mut g, dx, modifiers, limits);
            } else {
                g.width = (g.width + dx).max(limits.min.width);
            }
        }

        HandleRole::Bottom => {
            if modifiers.shift {
                drag_top(&mut g, dy, modifiers, limits);
            } else {
                g.height = (g.height + dy).max(limits.min.height);
            }
        }

        HandleRole::TopLeft
        | HandleRole::TopRight
        | HandleRole::BottomLeft
        | HandleRole::BottomRight => drag_corner(&mut g, role, dx, dy, modifiers, limits),
    }

    g
}

fn translate(g: &mut Geometry, dx: f64, dy: f64, limits: &DragLimits) {
    if !limits.free_positioning {
        return;
    }
    g.x += dx;
    g.y += dy;
}

fn drag_left(g: &mut Geometry, dx: f64, modifiers: Modifiers, limits: &DragLimits) {
    translate(g, dx, 0.0, limits);
    if !modifiers.shift {
        g.width = (g.width - dx).max(limits.min.width);
    }
}

fn drag_top(g: &mut Geometry, dy: f64, modifiers: Modifiers, limits: &DragLimits) {
    translate(g, 0.0, dy, limits);
    if !modifiers.shift {
        g.height = (g.height - dy).max(limits.min.height);
    }
}

/// Direction in which a positive pointer delta grows each dimension.
fn growth_signs(role: HandleRole) -> (f64, f64) {
    match role {
        HandleRole::TopLeft => (-1.0, -1.0),
        HandleRole::TopRight => (1.0, -1.0),
        HandleRole::BottomLeft => (-1.0, 1.0),
        _ => (1.0, 1.0),
    }
}

fn drag_corner(
    g: &mut Geometry,
    role: HandleRole,
    dx: f64,
    dy: f64,
    modifiers: Modifiers,
    limits: &DragLimits,
) {
    if modifiers.shift {
        translate(g, dx, dy, limits);
        return;
    }

    let (sx, sy) = growth_signs(role);
    let locked = modifiers.control && g.width > 0.0 && g.height > 0.0;

    // Requested growth of each dimension.
    let (grow_w, grow_h) = if locked {
        let (grow_w, grow_h) = locked_growth(g, sx * dx, sy * dy, dx.abs() > dy.abs());
        // One factor for both sides, never below either floor.
        let floor = (limits.min.width / g.width).max(limits.min.height / g.height);
        let scale = (1.0 + grow_w / g.width).max(floor);
        g.width *= scale;
        g.height *= scale;
        // The product can round a hair under the floor.
        g.width = g.width.max(limits.min.width);
        g.height = g.height.max(limits.min.height);
        (grow_w, grow_h)
    } else {
        g.width = (g.width + sx * dx).max(limits.min.width);
        g.height = (g.height + sy * dy).max(limits.min.height);
        (sx * dx, sy * dy)
    };

    // Edges touching the origin pull the element along with the pointer.
    let move_x = if sx < 0.0 { -grow_w } else { 0.0 };
    let move_y = if sy < 0.0 { -grow_h } else { 0.0 };
    translate(g, move_x, move_y, limits);
}

/// Projects a corner drag onto the dominant axis, deriving the other axis
/// from the current width/height ratio.
fn locked_growth(g: &Geometry, grow_w: f64, grow_h: f64, horizontal: bool) -> (f64, f64) {
    let ratio = g.aspect_ratio();
    if horizontal {
        (grow_w, grow_w / ratio)
    } else {
        (grow_h * ratio, grow_h)
    }
}
