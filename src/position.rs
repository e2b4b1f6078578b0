//! Flyout auto-positioning.
//!
//! Picks the side (or corner) of a trigger element that a panel should open
//! towards so that it stays inside the viewport. The default is below and to
//! the right of the trigger; each axis flips independently when the panel
//! would clip.

use std::fmt;
use std::str::FromStr;

use crate::error::PositionError;
use crate::geometry::{BoundingRect, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalSide {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalSide {
    Left,
    Right,
}

impl VerticalSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalSide::Top => "top",
            VerticalSide::Bottom => "bottom",
        }
    }
}

impl HorizontalSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            HorizontalSide::Left => "left",
            HorizontalSide::Right => "right",
        }
    }
}

/// Where a panel is anchored relative to its trigger.
///
/// Formats as the placement label used for styling: `top`, `bottom`, `left`,
/// `right`, or `"<vertical>-<horizontal>"` for corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Top,
    Bottom,
    Left,
    Right,
    Corner(VerticalSide, HorizontalSide),
}

impl Position {
    /// Sides named by this position, vertical first.
    pub fn sides(&self) -> (Option<VerticalSide>, Option<HorizontalSide>) {
        match *self {
            Position::Top => (Some(VerticalSide::Top), None),
            Position::Bottom => (Some(VerticalSide::Bottom), None),
            Position::Left => (None, Some(HorizontalSide::Left)),
            Position::Right => (None, Some(HorizontalSide::Right)),
            Position::Corner(v, h) => (Some(v), Some(h)),
        }
    }

    pub fn is_corner(&self) -> bool {
        matches!(self, Position::Corner(..))
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::Corner(VerticalSide::Bottom, HorizontalSide::Right)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Top => f.write_str("top"),
            Position::Bottom => f.write_str("bottom"),
            Position::Left => f.write_str("left"),
            Position::Right => f.write_str("right"),
            Position::Corner(v, h) => write!(f, "{}-{}", v.as_str(), h.as_str()),
        }
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let vertical = |t: &str| match t {
            "top" => Some(VerticalSide::Top),
            "bottom" => Some(VerticalSide::Bottom),
            _ => None,
        };
        let horizontal = |t: &str| match t {
            "left" => Some(HorizontalSide::Left),
            "right" => Some(HorizontalSide::Right),
            _ => None,
        };
        let label = s.trim().to_ascii_lowercase();
        match label.as_str() {
            "top" => Ok(Position::Top),
            "bottom" => Ok(Position::Bottom),
            "left" => Ok(Position::Left),
            "right" => Ok(Position::Right),
            other => other
                .split_once('-')
                .and_then(|(v, h)| Some(Position::Corner(vertical(v)?, horizontal(h)?)))
                .ok_or_else(|| PositionError::UnknownLabel(s.to_string())),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Position {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Position {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// Which viewport edges a panel would cross on each side of the trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Collisions {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Collisions {
    /// Test the panel's extent against the viewport on all four sides of
    /// the trigger. Only the panel's `width` and `height` are read.
    pub fn detect(panel: &BoundingRect, trigger: &BoundingRect, viewport: &Viewport) -> Self {
        let bottom = trigger.top + trigger.height;
        let right = trigger.left + trigger.width;
        Self {
            top: trigger.top - panel.height < 0.0,
            bottom: bottom + panel.height > viewport.height(),
            left: trigger.left - panel.width < 0.0,
            right: right + panel.width > viewport.width(),
        }
    }

    pub fn all(&self) -> bool {
        self.top && self.bottom && self.left && self.right
    }

    /// Whether placing the panel at `position` crosses a viewport edge.
    pub fn blocks(&self, position: Position) -> bool {
        let (v, h) = position.sides();
        let v_hit = match v {
            Some(VerticalSide::Top) => self.top,
            Some(VerticalSide::Bottom) => self.bottom,
            None => false,
        };
        let h_hit = match h {
            Some(HorizontalSide::Left) => self.left,
            Some(HorizontalSide::Right) => self.right,
            None => false,
        };
        v_hit || h_hit
    }
}

/// Choose where to open `panel` relative to `trigger` within `viewport`.
pub fn resolve_position(
    panel: &BoundingRect,
    trigger: &BoundingRect,
    viewport: &Viewport,
) -> Position {
    let collisions = Collisions::detect(panel, trigger, viewport);
    let position = resolve_with(&collisions, panel, trigger);
    log::trace!("flyout collisions {collisions:?} -> {position}");
    position
}

fn resolve_with(c: &Collisions, panel: &BoundingRect, trigger: &BoundingRect) -> Position {
    let mut vertical = VerticalSide::Bottom;
    let mut horizontal = HorizontalSide::Right;

    // Later checks override earlier ones.
    if c.bottom {
        vertical = VerticalSide::Top;
    }
    if c.top {
        vertical = VerticalSide::Bottom;
    }
    if c.left {
        horizontal = HorizontalSide::Right;
    }
    if c.right {
        horizontal = HorizontalSide::Left;
    }

    if c.all() {
        // Compares the panel's own edge coordinates, not the free space on
        // each side.
        let candidates = [
            (Position::Left, panel.left),
            (Position::Right, panel.right),
            (Position::Top, panel.top),
            (Position::Bottom, panel.bottom),
        ];
        let mut best = candidates[0];
        for candidate in &candidates[1..] {
            if candidate.1 > best.1 {
                best = *candidate;
            }
        }
        return best.0;
    }

    let bottom = trigger.top + trigger.height;
    let right = trigger.left + trigger.width;

    if c.left && c.right {
        if c.top {
            return Position::Bottom;
        }
        if c.bottom {
            return Position::Top;
        }
        return if trigger.top > bottom {
            Position::Top
        } else {
            Position::Bottom
        };
    }

    if c.top && c.bottom {
        if c.left {
            return Position::Right;
        }
        if c.right {
            return Position::Left;
        }
        return if trigger.left > right {
            Position::Left
        } else {
            Position::Right
        };
    }

    Position::Corner(vertical, horizontal)
}
