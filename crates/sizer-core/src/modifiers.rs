// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

/// Keyboard modifiers sampled at the moment a drag delta arrives.
///
/// Never stored by the controller; every event carries its own copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Move instead of resize.
    pub shift: bool,
    /// Keep the aspect ratio (corner handles only).
    pub control: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        control: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        control: false,
    };
    pub const CONTROL: Modifiers = Modifiers {
        shift: false,
        control: true,
    };
}
