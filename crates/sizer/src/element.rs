// Author: Dustin Pilgrim
// License: MIT

use sizer_core::{Geometry, MinSize, Point, Result, SizerError, Size, Target};

use crate::config::{SizerConfig, Surface};

/// In-memory stand-in for a host element: keeps whatever the overlay
/// writes back so the driver can report it.
#[derive(Debug, Clone)]
pub struct Element {
    pub surface: Surface,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub min_width: Option<f64>,
    pub min_height: Option<f64>,
    pub natural: Size,
    pub position: Option<Point>,
    pub attached: bool,
    pub repaints: u32,
}

impl Element {
    pub fn from_config(cfg: &SizerConfig) -> Self {
        Self {
            surface: cfg.surface,
            width: cfg.size.map(|s| s.width),
            height: cfg.size.map(|s| s.height),
            min_width: cfg.min_size.map(|s| s.width),
            min_height: cfg.min_size.map(|s| s.height),
            natural: cfg.natural_size,
            position: cfg.position,
            attached: false,
            repaints: 0,
        }
    }
}

impl Target for Element {
    fn attach_overlay(&mut self) -> Result<()> {
        if self.surface == Surface::Detached {
            return Err(SizerError::invalid_host("element has no parent surface"));
        }
        if self.attached {
            return Err(SizerError::invalid_host("element already carries an overlay"));
        }
        self.attached = true;
        Ok(())
    }

    fn is_on_free_positioning_surface(&self) -> bool {
        self.surface == Surface::Canvas
    }

    fn width(&self) -> Option<f64> {
        self.width
    }

    fn height(&self) -> Option<f64> {
        self.height
    }

    fn min_width(&self) -> Option<f64> {
        self.min_width
    }

    fn min_height(&self) -> Option<f64> {
        self.min_height
    }

    fn natural_size(&self) -> Size {
        self.natural
    }

    fn measured_size(&self) -> Size {
        let natural = self.natural;
        Size::new(
            self.width.unwrap_or(natural.width),
            self.height.unwrap_or(natural.height),
        )
    }

    fn position(&self) -> Option<Point> {
        match self.surface {
            Surface::Canvas => self.position,
            _ => None,
        }
    }

    fn set_min_size(&mut self, min: MinSize) {
        self.min_width = Some(min.width);
        self.min_height = Some(min.height);
    }

    fn set_geometry(&mut self, geometry: Geometry) {
        self.width = Some(geometry.width);
        self.height = Some(geometry.height);
        // Flow parents own the position.
        if self.surface == Surface::Canvas {
            self.position = Some(geometry.position());
        }
        self.repaints += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sizer_core::{EdgeThickness, HandleRole, Modifiers, ResizeController};

    fn config(surface: Surface) -> SizerConfig {
        SizerConfig {
            surface,
            size: Some(Size::new(100.0, 100.0)),
            position: Some(Point::new(10.0, 10.0)),
            ..SizerConfig::default()
        }
    }

    #[test]
    fn detached_element_rejects_overlay() {
        let el = Element::from_config(&config(Surface::Detached));
        let err = ResizeController::new(el, EdgeThickness::default()).err();
        assert!(matches!(err, Some(SizerError::InvalidHost { .. })));
    }

    #[test]
    fn second_overlay_is_rejected() {
        let mut el = Element::from_config(&config(Surface::Flow));
        assert!(el.attach_overlay().is_ok());
        assert!(el.attach_overlay().is_err());
    }

    #[test]
    fn canvas_element_tracks_position() {
        let el = Element::from_config(&config(Surface::Canvas));
        let mut c = ResizeController::new(el, EdgeThickness::uniform(6.0)).unwrap();
        c.on_drag_delta(HandleRole::Left, 20.0, 0.0, Modifiers::NONE);

        let el = c.detach();
        assert_eq!(el.position, Some(Point::new(30.0, 10.0)));
        assert_eq!(el.width, Some(80.0));
        assert_eq!(el.repaints, 1);
    }

    #[test]
    fn flow_element_ignores_configured_position() {
        let el = Element::from_config(&config(Surface::Flow));
        let c = ResizeController::new(el, EdgeThickness::default()).unwrap();
        assert_eq!(c.geometry().position(), Point::default());
        assert_eq!(c.target().min_width, Some(16.0));
    }
}
