//! Error types for picker helper configuration and input handling.

use thiserror::Error;

/// Errors raised while configuring a slider.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither a horizontal nor a vertical range tag was supplied, so the
    /// slider would never emit a value.
    #[error("slider needs at least one range tag (rg_x or rg_y)")]
    NoChannel,
}

/// Errors raised by the text-input adapter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A range-tagged input received text without a numeric prefix.
    #[error("not a number: {input:?}")]
    NotANumber {
        /// The raw text that failed to parse
        input: String,
    },
}

/// Errors raised when parsing picker option tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// The token does not name any known variant of the option.
    #[error("unknown {kind} '{value}'")]
    Unknown {
        /// Which option was being parsed (e.g. "color mode")
        kind: &'static str,
        /// The offending token
        value: String,
    },
}

/// Errors raised when parsing a position label.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("unknown position label '{0}'")]
    UnknownLabel(String),
}
