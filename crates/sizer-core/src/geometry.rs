// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::rect::{Point, Size};

/// Position and size of the decorated element.
///
/// `x`/`y` only mean something when the element sits on a free-positioning
/// surface; flow layouts ignore them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Geometry {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Current width/height ratio, or 1.0 for a degenerate height.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Raises width/height to the floor, leaving position alone.
    pub fn clamped(mut self, min: MinSize) -> Self {
        self.width = self.width.max(min.width);
        self.height = self.height.max(min.height);
        self
    }
}

/// Floor below which width/height never shrink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MinSize {
    pub width: f64,
    pub height: f64,
}

impl MinSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn as_size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_only_touches_size() {
        let g = Geometry::new(-4.0, 7.0, 3.0, 90.0).clamped(MinSize::new(20.0, 16.0));
        assert_eq!(g, Geometry::new(-4.0, 7.0, 20.0, 90.0));
    }

    #[test]
    fn aspect_ratio_of_flat_geometry() {
        assert_eq!(Geometry::new(0.0, 0.0, 100.0, 50.0).aspect_ratio(), 2.0);
        assert_eq!(Geometry::new(0.0, 0.0, 100.0, 0.0).aspect_ratio(), 1.0);
    }
}
