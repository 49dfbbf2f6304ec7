// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(feature = "clap")]
use clap::ValueEnum;

use crate::error::SizerError;
use crate::rect::Rect;
use crate::thickness::EdgeThickness;

#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HandleRole {
    Left,
    Top,
    Right,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl HandleRole {
    /// Every role, edges first.
    pub const ALL: [HandleRole; 8] = [
        HandleRole::Left,
        HandleRole::Top,
        HandleRole::Right,
        HandleRole::Bottom,
        HandleRole::TopLeft,
        HandleRole::TopRight,
        HandleRole::BottomLeft,
        HandleRole::BottomRight,
    ];

    pub fn index(self) -> usize {
        match self {
            HandleRole::Left => 0,
            HandleRole::Top => 1,
            HandleRole::Right => 2,
            HandleRole::Bottom => 3,
            HandleRole::TopLeft => 4,
            HandleRole::TopRight => 5,
            HandleRole::BottomLeft => 6,
            HandleRole::BottomRight => 7,
        }
    }

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            HandleRole::TopLeft
                | HandleRole::TopRight
                | HandleRole::BottomLeft
                | HandleRole::BottomRight
        )
    }

    pub fn cursor(self) -> Cursor {
        match self {
            HandleRole::Left | HandleRole::Right => Cursor::ResizeHorizontal,
            HandleRole::Top | HandleRole::Bottom => Cursor::ResizeVertical,
            HandleRole::TopLeft | HandleRole::BottomRight => Cursor::ResizeNwse,
            HandleRole::TopRight | HandleRole::BottomLeft => Cursor::ResizeNesw,
        }
    }

    /// Edge handles need their own strip; corners need both adjacent strips.
    pub fn exists(self, t: &EdgeThickness) -> bool {
        match self {
            HandleRole::Left => t.left != 0.0,
            HandleRole::Top => t.top != 0.0,
            HandleRole::Right => t.right != 0.0,
            HandleRole::Bottom => t.bottom != 0.0,
            HandleRole::TopLeft => t.left != 0.0 && t.top != 0.0,
            HandleRole::TopRight => t.top != 0.0 && t.right != 0.0,
            HandleRole::BottomLeft => t.bottom != 0.0 && t.left != 0.0,
            HandleRole::BottomRight => t.bottom != 0.0 && t.right != 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HandleRole::Left => "left",
            HandleRole::Top => "top",
            HandleRole::Right => "right",
            HandleRole::Bottom => "bottom",
            HandleRole::TopLeft => "top-left",
            HandleRole::TopRight => "top-right",
            HandleRole::BottomLeft => "bottom-left",
            HandleRole::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for HandleRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HandleRole {
    type Err = SizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "left" | "l" => Ok(HandleRole::Left),
            "top" | "t" => Ok(HandleRole::Top),
            "right" | "r" => Ok(HandleRole::Right),
            "bottom" | "b" => Ok(HandleRole::Bottom),
            "topleft" | "tl" => Ok(HandleRole::TopLeft),
            "topright" | "tr" => Ok(HandleRole::TopRight),
            "bottomleft" | "bl" => Ok(HandleRole::BottomLeft),
            "bottomright" | "br" => Ok(HandleRole::BottomRight),
            _ => Err(SizerError::UnknownRole(s.to_string())),
        }
    }
}

/// Pointer shape a host should show over a handle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Cursor {
    /// West-east.
    ResizeHorizontal,
    /// North-south.
    ResizeVertical,
    /// Top-left to bottom-right diagonal.
    ResizeNwse,
    /// Top-right to bottom-left diagonal.
    ResizeNesw,
}

impl Cursor {
    /// Cursor name as used by freedesktop/CSS cursor themes.
    pub fn name(self) -> &'static str {
        match self {
            Cursor::ResizeHorizontal => "ew-resize",
            Cursor::ResizeVertical => "ns-resize",
            Cursor::ResizeNwse => "nwse-resize",
            Cursor::ResizeNesw => "nesw-resize",
        }
    }
}

/// One of the eight handles: a dispatch source for drag deltas plus the
/// rectangle the host should hit-test and paint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Handle {
    pub role: HandleRole,
    pub exists: bool,
    pub rect: Rect,
}

impl Handle {
    pub fn new(role: HandleRole, thickness: &EdgeThickness) -> Self {
        Self {
            role,
            exists: role.exists(thickness),
            rect: Rect::ZERO,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.role.cursor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present(t: EdgeThickness) -> Vec<HandleRole> {
        HandleRole::ALL
            .into_iter()
            .filter(|r| r.exists(&t))
            .collect()
    }

    #[test]
    fn existence_follows_thickness() {
        for (l, t, r, b) in [
            (0.0, 0.0, 6.0, 6.0),
            (3.0, 0.0, 0.0, 3.0),
            (1.0, 2.0, 3.0, 4.0),
            (0.0, 0.0, 0.0, 0.0),
            (0.0, 5.0, 0.0, 5.0),
        ] {
            let th = EdgeThickness::new(l, t, r, b);
            for role in HandleRole::ALL {
                let expected = match role {
                    HandleRole::Left => l != 0.0,
                    HandleRole::Top => t != 0.0,
                    HandleRole::Right => r != 0.0,
                    HandleRole::Bottom => b != 0.0,
                    HandleRole::TopLeft => l != 0.0 && t != 0.0,
                    HandleRole::TopRight => t != 0.0 && r != 0.0,
                    HandleRole::BottomLeft => b != 0.0 && l != 0.0,
                    HandleRole::BottomRight => b != 0.0 && r != 0.0,
                };
                assert_eq!(role.exists(&th), expected, "{role} with {th}");
            }
        }
    }

    #[test]
    fn default_thickness_has_three_handles() {
        assert_eq!(
            present(EdgeThickness::default()),
            vec![HandleRole::Right, HandleRole::Bottom, HandleRole::BottomRight]
        );
    }

    #[test]
    fn cursors_match_axis() {
        assert_eq!(HandleRole::Left.cursor(), Cursor::ResizeHorizontal);
        assert_eq!(HandleRole::Bottom.cursor(), Cursor::ResizeVertical);
        assert_eq!(HandleRole::BottomRight.cursor(), Cursor::ResizeNwse);
        assert_eq!(HandleRole::BottomLeft.cursor(), Cursor::ResizeNesw);
    }

    #[test]
    fn parse_role_names() {
        assert_eq!("top-left".parse::<HandleRole>().unwrap(), HandleRole::TopLeft);
        assert_eq!("BottomRight".parse::<HandleRole>().unwrap(), HandleRole::BottomRight);
        assert_eq!("tr".parse::<HandleRole>().unwrap(), HandleRole::TopRight);
        assert_eq!("bottom_left".parse::<HandleRole>().unwrap(), HandleRole::BottomLeft);
        assert!("middle".parse::<HandleRole>().is_err());
    }

    #[test]
    fn index_matches_all_order() {
        for (i, role) in HandleRole::ALL.into_iter().enumerate() {
            assert_eq!(role.index(), i);
            assert_eq!(role.as_str().parse::<HandleRole>().unwrap(), role);
        }
    }
}
