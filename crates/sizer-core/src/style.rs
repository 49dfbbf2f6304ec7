// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

/// Presentation hints handed to the host along with handle placements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleStyle {
    pub fill_colour: u32,   // ARGB
    pub fill_opacity: f64,  // 0.0 ..= 1.0
    pub border_colour: u32, // ARGB
    pub border_width: f64,
}

impl Default for HandleStyle {
    fn default() -> Self {
        Self {
            fill_colour: 0xFFFF_B6C1, // light pink
            fill_opacity: 0.3,
            border_colour: 0xFF00_0000,
            border_width: 1.0,
        }
    }
}

impl HandleStyle {
    /// Fill colour with the opacity folded into its alpha channel.
    pub fn fill_with_opacity(&self) -> u32 {
        let base_alpha = ((self.fill_colour >> 24) & 0xFF) as f64;
        let a = (base_alpha * self.fill_opacity.clamp(0.0, 1.0)).round() as u32;
        (a << 24) | (self.fill_colour & 0x00FF_FFFF)
    }
}
