//! Floem text field driven by a [`TextInput`] adapter.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};

use crate::constants;
use crate::text::TextInput;

/// A text field that feeds every edit of `text` through `adapter`.
///
/// Register the adapter's `on_value` callback before handing it over. The
/// border turns red while a numeric field holds text that does not parse.
pub fn text_field(text: RwSignal<String>, adapter: TextInput) -> impl IntoView {
    let invalid = RwSignal::new(false);

    create_effect(move |prev: Option<()>| {
        let raw = text.get();
        // The first run only subscribes; the initial text is not an edit.
        if prev.is_none() {
            return;
        }
        let ok = adapter.on_input(&raw).is_ok();
        if invalid.get_untracked() == ok {
            invalid.set(!ok);
        }
    });

    text_input(text).style(move |s| {
        let border = if invalid.get() {
            Color::rgb8(220, 60, 60)
        } else {
            Color::rgb8(200, 200, 200)
        };
        s.width(constants::INPUT_WIDTH)
            .padding(2.0)
            .font_size(constants::INPUT_FONT)
            .font_family("monospace".to_string())
            .background(Color::WHITE)
            .border(1.0)
            .border_color(border)
            .border_radius(3.0)
    })
}
