// Author: Dustin Pilgrim
// License: MIT

use crate::drag::{DragDelta, DragLimits, apply_drag};
use crate::error::Result;
use crate::geometry::{Geometry, MinSize};
use crate::handle::{Handle, HandleRole};
use crate::layout;
use crate::modifiers::Modifiers;
use crate::rect::Size;
use crate::style::HandleStyle;
use crate::target::Target;
use crate::thickness::EdgeThickness;

/// Resize/move overlay for one target element.
///
/// Owns the target for as long as the overlay is attached; geometry only
/// changes through [`on_drag_delta`](Self::on_drag_delta) and
/// [`set_geometry`](Self::set_geometry), each of which pushes the result to
/// the target and re-lays-out the handles before returning.
pub struct ResizeController<T: Target> {
    target: T,
    thickness: EdgeThickness,
    limits: DragLimits,
    geometry: Geometry,
    handles: [Handle; 8],
    overlay: Size,
    style: HandleStyle,
}

impl<T: Target> ResizeController<T> {
    pub fn new(target: T, thickness: EdgeThickness) -> Result<Self> {
        Self::with_style(target, thickness, HandleStyle::default())
    }

    pub fn with_style(mut target: T, thickness: EdgeThickness, style: HandleStyle) -> Result<Self> {
        target.attach_overlay()?;

        let free_positioning = target.is_on_free_positioning_surface();
        let working = thickness.working(free_positioning);
        let handles = HandleRole::ALL.map(|role| Handle::new(role, &working));

        // The floor comes from the requested thickness, before left/top are
        // dropped for flow surfaces.
        let fallback = thickness.default_min_size();
        let min = MinSize::new(
            target.min_width().unwrap_or(fallback.width),
            target.min_height().unwrap_or(fallback.height),
        );

        let natural = natural_size(&target);
        let explicit = (target.width(), target.height());
        let position = target.position().unwrap_or_default();
        let geometry = Geometry::new(
            position.x,
            position.y,
            explicit.0.unwrap_or(natural.width),
            explicit.1.unwrap_or(natural.height),
        )
        .clamped(min);

        target.set_min_size(min);
        if explicit != (Some(geometry.width), Some(geometry.height)) {
            target.set_geometry(geometry);
        }

        let mut this = Self {
            target,
            thickness: working,
            limits: DragLimits {
                min,
                free_positioning,
            },
            geometry,
            handles,
            overlay: geometry.size(),
            style,
        };
        this.relayout();
        Ok(this)
    }

    /// Handles one incremental pointer movement on `role`.
    ///
    /// Returns the new geometry, or `None` when that handle does not exist
    /// for this overlay (the event is dropped).
    pub fn on_drag_delta(
        &mut self,
        role: HandleRole,
        dx: f64,
        dy: f64,
        modifiers: Modifiers,
    ) -> Option<Geometry> {
        if !self.handles[role.index()].exists {
            return None;
        }

        let next = apply_drag(
            role,
            &self.geometry,
            DragDelta::new(dx, dy),
            modifiers,
            &self.limits,
        );
        self.commit(next);
        Some(next)
    }

    /// Replaces the geometry outright; size is still held to the floor.
    pub fn set_geometry(&mut self, x: f64, y: f64, width: f64, height: f64) -> Geometry {
        let next = Geometry::new(x, y, width, height).clamped(self.limits.min);
        self.commit(next);
        next
    }

    /// Recomputes every handle's rectangle and returns all eight handles.
    pub fn layout(&mut self) -> &[Handle; 8] {
        self.relayout();
        &self.handles
    }

    pub fn handles(&self) -> &[Handle; 8] {
        &self.handles
    }

    pub fn handle(&self, role: HandleRole) -> &Handle {
        &self.handles[role.index()]
    }

    /// Which handle sits under `(px, py)` in overlay-local coordinates.
    ///
    /// Corners win over the edge strips they overlap.
    pub fn hit_test(&self, px: f64, py: f64) -> Option<HandleRole> {
        let mut present: Vec<&Handle> = self.present_handles().collect();
        present.sort_by_key(|h| !h.role.is_corner());
        present
            .into_iter()
            .find(|h| h.rect.contains(px, py))
            .map(|h| h.role)
    }

    /// Handles the host should create hit regions for.
    pub fn present_handles(&self) -> impl Iterator<Item = &Handle> {
        self.handles.iter().filter(|h| h.exists)
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn min_size(&self) -> MinSize {
        self.limits.min
    }

    /// Thickness actually in use (left/top zeroed on flow surfaces).
    pub fn thickness(&self) -> EdgeThickness {
        self.thickness
    }

    pub fn is_free_positioning(&self) -> bool {
        self.limits.free_positioning
    }

    /// Size of the overlay itself; grows with the target, never shrinks.
    pub fn overlay_size(&self) -> Size {
        self.overlay
    }

    pub fn style(&self) -> &HandleStyle {
        &self.style
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Removes the overlay, dropping its geometry and handing the target back.
    pub fn detach(self) -> T {
        self.target
    }

    fn commit(&mut self, geometry: Geometry) {
        self.geometry = geometry;
        self.target.set_geometry(geometry);
        self.relayout();
    }

    fn relayout(&mut self) {
        let rects = layout::layout(&self.thickness, self.geometry.size(), self.limits.min);
        for handle in self.handles.iter_mut() {
            handle.rect = rects[handle.role.index()];
        }

        let wanted = self.geometry.size().max(self.limits.min.as_size());
        self.overlay = self.overlay.max(wanted);
    }
}

/// Natural size, or the measured one when the element reports no preference.
fn natural_size<T: Target>(target: &T) -> Size {
    let natural = target.natural_size();
    if natural.is_empty() {
        target.measured_size()
    } else {
        natural
    }
}
