//! Text-input change adapter.
//!
//! Untagged inputs pass their text through unchanged; tagged inputs parse
//! it as a number with the same leniency as a browser's `parseFloat`
//! (leading whitespace skipped, trailing garbage ignored).

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::InputError;
use crate::slider::RangeTag;

/// Value emitted for a text edit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextValue {
    Raw(String),
    Numeric { v: f64, rg: RangeTag },
}

type TextCallback = Rc<dyn Fn(TextValue)>;

/// Converts raw input text into [`TextValue`]s.
#[derive(Clone, Default)]
pub struct TextInput {
    rg: Option<RangeTag>,
    on_value: RefCell<Option<TextCallback>>,
}

impl TextInput {
    /// Adapter that emits the raw text.
    pub fn raw() -> Self {
        Self::default()
    }

    /// Adapter that emits `{v, rg}` for the given channel.
    pub fn numeric(rg: RangeTag) -> Self {
        Self {
            rg: Some(rg),
            on_value: RefCell::new(None),
        }
    }

    pub fn range_tag(&self) -> Option<RangeTag> {
        self.rg
    }

    pub fn on_value(&self, f: impl Fn(TextValue) + 'static) {
        *self.on_value.borrow_mut() = Some(Rc::new(f));
    }

    /// Convert `text` without emitting.
    pub fn convert(&self, text: &str) -> Result<TextValue, InputError> {
        match self.rg {
            None => Ok(TextValue::Raw(text.to_string())),
            Some(rg) => parse_leading_float(text)
                .map(|v| TextValue::Numeric { v, rg })
                .ok_or_else(|| InputError::NotANumber {
                    input: text.to_string(),
                }),
        }
    }

    /// Handle an input event. Nothing is emitted when a tagged input
    /// receives non-numeric text.
    pub fn on_input(&self, text: &str) -> Result<TextValue, InputError> {
        let value = self.convert(text).inspect_err(|err| {
            log::debug!("text input rejected: {err}");
        })?;
        let cb = self.on_value.borrow().clone();
        if let Some(cb) = cb {
            cb(value.clone());
        }
        Ok(value)
    }
}

/// Parse the longest numeric prefix of `text`.
///
/// Accepts an optional sign, digits with an optional fraction, an optional
/// exponent, or `Infinity`. Returns `None` when no digits lead the text.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        let inf = f64::INFINITY;
        return Some(if s.starts_with('-') { -inf } else { inf });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
