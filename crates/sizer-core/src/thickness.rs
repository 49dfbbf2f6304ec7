// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SizerError;
use crate::geometry::MinSize;

/// Extra room (beyond the handle strips) a target keeps when it has no
/// explicit minimum size of its own.
pub const MIN_CONTENT: f64 = 10.0;

/// Width of the draggable strip along each edge. Zero disables that edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeThickness {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for EdgeThickness {
    fn default() -> Self {
        Self::new(0.0, 0.0, 6.0, 6.0)
    }
}

impl EdgeThickness {
    /// Negative values are taken by magnitude, non-finite ones become 0.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left: normalize(left),
            top: normalize(top),
            right: normalize(right),
            bottom: normalize(bottom),
        }
    }

    pub fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    /// The thickness actually laid out for a target.
    ///
    /// Left/top handles move the element, which is only possible on a
    /// free-positioning surface, so they are dropped everywhere else.
    pub fn working(self, free_positioning: bool) -> Self {
        if free_positioning {
            self
        } else {
            Self {
                left: 0.0,
                top: 0.0,
                ..self
            }
        }
    }

    /// Floor used when the target carries no minimum size of its own.
    pub fn default_min_size(&self) -> MinSize {
        MinSize::new(
            MIN_CONTENT + self.left + self.right,
            MIN_CONTENT + self.top + self.bottom,
        )
    }
}

fn normalize(v: f64) -> f64 {
    if v.is_finite() { v.abs() } else { 0.0 }
}

impl fmt::Display for EdgeThickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.left, self.top, self.right, self.bottom)
    }
}

/// Accepts `"uniform"`, `"horizontal,vertical"` or `"left,top,right,bottom"`,
/// separated by commas and/or whitespace.
impl FromStr for EdgeThickness {
    type Err = SizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = |reason: &str| SizerError::InvalidThickness {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let mut values = Vec::with_capacity(4);
        for part in s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
        {
            let v: f64 = part.parse().map_err(|_| bad("expected a number"))?;
            if !v.is_finite() {
                return Err(bad("values must be finite"));
            }
            values.push(v);
        }

        match values.as_slice() {
            [v] => Ok(Self::uniform(*v)),
            [h, v] => Ok(Self::new(*h, *v, *h, *v)),
            [l, t, r, b] => Ok(Self::new(*l, *t, *r, *b)),
            [] => Err(bad("empty")),
            _ => Err(bad("expected 1, 2 or 4 values")),
        }
    }
}
