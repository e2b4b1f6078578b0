//! # floem-picker-kit
//!
//! Interaction helpers for color pickers built with
//! [Floem](https://github.com/lapce/floem).
//!
//! - [`resolve_position`]: pick the side of a trigger a flyout should open
//!   towards so it stays inside the viewport.
//! - [`Slider`]: map pointer drags over a 1D or 2D surface to normalized,
//!   range-tagged values, with document-level drag sessions.
//! - [`TextInput`]: turn text edits into raw strings or tagged numbers.
//!
//! The core types are framework-agnostic. [`slider_view`] and [`text_field`]
//! plug them into a Floem view tree.
//!
//! ## Usage
//!
//! ```rust
//! use floem_picker_kit::{resolve_position, BoundingRect, Viewport};
//!
//! let panel = BoundingRect::from_size(300.0, 300.0);
//! let trigger = BoundingRect::new(10.0, 10.0, 20.0, 20.0);
//! let pos = resolve_position(&panel, &trigger, &Viewport::new(960.0, 600.0));
//! assert_eq!(pos.to_string(), "bottom-right");
//! ```

mod constants;
mod document;
mod error;
mod geometry;
mod inputs;
mod options;
mod position;
mod slider;
mod slider_view;
mod text;

pub use document::{Document, DocumentEventKind, ListenerId, PointerButton, PointerEvent};
pub use error::{ConfigError, InputError, OptionError, PositionError};
pub use geometry::{BoundingRect, Viewport};
pub use inputs::text_field;
pub use options::{AlphaChannel, ColorMode, OutputFormat, SliderDimension, SliderPosition};
pub use position::{Collisions, HorizontalSide, Position, VerticalSide, resolve_position};
pub use slider::{DragSession, RangeTag, Slider, SliderChannels, SliderValue};
pub use slider_view::{SliderView, slider_view};
pub use text::{TextInput, TextValue, parse_leading_float};
