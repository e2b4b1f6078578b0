//! Sizing and styling constants for the picker views.

/// Minimum slider track height
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Cursor ring radius on slider surfaces
pub const CURSOR_RADIUS: f64 = 8.0;

/// Border radius for slider tracks
pub const RADIUS: f32 = 4.0;

/// Numeric input field width
pub const INPUT_WIDTH: f32 = 36.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;
