//! Viewport-relative rectangles and viewport sizes used by the positioning
//! resolver and the slider mapper.

use floem::kurbo::{Rect, Size};

/// Edge-and-extent rectangle in viewport pixels.
///
/// Mirrors what a layout query reports for an element: all six fields are
/// stored, and `right - left == width` / `bottom - top == height` is expected
/// but not enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingRect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    pub height: f64,
    pub width: f64,
}

impl BoundingRect {
    /// Rectangle from its top-left corner and size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
            left,
            right: left + width,
            height,
            width,
        }
    }

    /// Rectangle of the given size anchored at the origin.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}

impl From<Rect> for BoundingRect {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }
}

impl From<BoundingRect> for Rect {
    fn from(b: BoundingRect) -> Self {
        Rect::new(b.left, b.top, b.left + b.width, b.top + b.height)
    }
}

/// Space available for placing a flyout.
///
/// The inner size is what the window reports. When one of its axes is zero
/// (or the window could not be queried), the matching client axis is used.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    inner_width: f64,
    inner_height: f64,
    client_width: f64,
    client_height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            inner_width: width,
            inner_height: height,
            client_width: 0.0,
            client_height: 0.0,
        }
    }

    /// Document-level size to fall back on per axis.
    pub fn with_client_fallback(mut self, width: f64, height: f64) -> Self {
        self.client_width = width;
        self.client_height = height;
        self
    }

    pub fn width(&self) -> f64 {
        if self.inner_width > 0.0 {
            self.inner_width
        } else {
            self.client_width
        }
    }

    pub fn height(&self) -> f64 {
        if self.inner_height > 0.0 {
            self.inner_height
        } else {
            self.client_height
        }
    }
}

impl From<Size> for Viewport {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}
