// Author: Dustin Pilgrim
// License: MIT

pub mod controller;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod handle;
pub mod layout;
pub mod modifiers;
pub mod rect;
pub mod style;
pub mod target;
pub mod thickness;

pub use controller::ResizeController;
pub use drag::{DragDelta, DragLimits, apply_drag};
pub use error::{Result, SizerError};
pub use geometry::{Geometry, MinSize};
pub use handle::{Cursor, Handle, HandleRole};
pub use layout::layout;
pub use modifiers::Modifiers;
pub use rect::{Point, Rect, Size};
pub use style::HandleStyle;
pub use target::Target;
pub use thickness::EdgeThickness;
