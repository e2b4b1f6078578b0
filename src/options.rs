//! Picker option vocabulary and cursor placement tuples.

use std::fmt;
use std::str::FromStr;

use crate::error::OptionError;

macro_rules! string_option {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $variant:ident => $canonical:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant ),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $canonical ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = OptionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $( $canonical $(| $alias)* => Ok($name::$variant), )+
                    _ => Err(OptionError::Unknown {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let token = String::deserialize(deserializer)?;
                token.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

string_option! {
    /// Which palette the picker shows.
    ColorMode, "color mode" {
        Color => "color" | "c" | "1",
        Grayscale => "grayscale" | "g" | "2",
        Presets => "presets" | "p" | "3",
    }
}

string_option! {
    /// How the alpha channel is exposed.
    ///
    /// `Always` keeps alpha in the output even when opaque; `Forced` also
    /// hides the alpha slider while doing so.
    AlphaChannel, "alpha channel" {
        Enabled => "enabled",
        Disabled => "disabled",
        Always => "always",
        Forced => "forced",
    }
}

string_option! {
    OutputFormat, "output format" {
        Auto => "auto",
        Hex => "hex",
        Rgba => "rgba",
        Hsla => "hsla",
    }
}

impl Default for ColorMode {
    fn default() -> Self {
        ColorMode::Color
    }
}

impl Default for AlphaChannel {
    fn default() -> Self {
        AlphaChannel::Enabled
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Auto
    }
}

/// Cursor offsets in pixels for the hue, saturation, value and alpha
/// sliders.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderPosition {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

/// Track length in pixels of each slider.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderDimension {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

impl SliderDimension {
    pub fn new(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self { h, s, v, a }
    }

    /// Where to draw each slider's cursor for an HSVA color (components in
    /// `0.0..=1.0`). `offset` centers the cursor glyph on the value; value
    /// runs top-down so it is inverted.
    pub fn cursor_position(&self, h: f64, s: f64, v: f64, a: f64, offset: f64) -> SliderPosition {
        SliderPosition {
            h: h * self.h - offset,
            s: s * self.s - offset,
            v: (1.0 - v) * self.v - offset,
            a: a * self.a - offset,
        }
    }
}
