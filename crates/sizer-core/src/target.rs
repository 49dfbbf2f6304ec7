// Author: Dustin Pilgrim
// License: MIT

use crate::error::Result;
use crate::geometry::{Geometry, MinSize};
use crate::rect::{Point, Size};

/// The element being decorated, as seen through whatever host owns it.
///
/// A host adapter implements this once; the controller never touches the
/// host's rendering tree directly.
pub trait Target {
    /// Registers the overlay on the element's surface.
    ///
    /// Returns [`crate::SizerError::InvalidHost`] when the element cannot be
    /// decorated (no overlay layer, detached element, ...).
    fn attach_overlay(&mut self) -> Result<()>;

    /// Whether the element carries explicit `(x, y)` on its parent.
    fn is_on_free_positioning_surface(&self) -> bool;

    /// Explicit width, `None` when left to the host's layout.
    fn width(&self) -> Option<f64>;
    fn height(&self) -> Option<f64>;

    fn min_width(&self) -> Option<f64>;
    fn min_height(&self) -> Option<f64>;

    /// Size the element would like with no constraints.
    fn natural_size(&self) -> Size;

    /// Size the host's last layout pass measured.
    fn measured_size(&self) -> Size;

    /// Explicit position on a free-positioning surface.
    fn position(&self) -> Option<Point>;

    /// Floor the host's own layout must respect from now on.
    fn set_min_size(&mut self, min: MinSize);

    /// Applies new geometry; repainting is the host's business.
    fn set_geometry(&mut self, geometry: Geometry);
}
