//! Standalone demo: a saturation/value area, a hue strip and a hue text
//! field, with the flyout placement for a panel anchored to the area.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_picker_kit::{
    BoundingRect, RangeTag, SliderChannels, SliderValue, TextInput, TextValue, Viewport,
    resolve_position, slider_view, text_field,
};

const HUE: RangeTag = RangeTag(0);
const SAT: RangeTag = RangeTag(1);
const VAL: RangeTag = RangeTag(2);

fn main() {
    let area = RwSignal::new(None::<SliderValue>);
    let hue = RwSignal::new(None::<SliderValue>);
    let hue_text = RwSignal::new(String::from("0"));

    let placement = resolve_position(
        &BoundingRect::from_size(232.0, 300.0),
        &BoundingRect::new(16.0, 16.0, 200.0, 150.0),
        &Viewport::new(260.0, 420.0),
    );

    floem::Application::new()
        .window(
            move |_| {
                let adapter = TextInput::numeric(HUE);
                adapter.on_value(move |v| {
                    if let TextValue::Numeric { v, rg } = v {
                        let fraction = (v / 360.0).clamp(0.0, 1.0);
                        hue.set(Some(SliderValue::Horizontal { v: fraction, rg_x: rg }));
                    }
                });

                v_stack((
                    slider_view(SliderChannels::area(SAT, VAL), area)
                        .style(|s| s.height(150.0).width_full()),
                    slider_view(SliderChannels::Horizontal(HUE), hue)
                        .style(|s| s.height(16.0).width_full()),
                    text_field(hue_text, adapter),
                    label(move || match area.get() {
                        Some(SliderValue::Area { s, v, .. }) => format!("s {s:.2}  v {v:.2}"),
                        _ => "drag the area".to_string(),
                    }),
                    label(move || format!("flyout opens {placement}")),
                ))
                .style(|s| s.gap(8.0).padding(8.0).size_full())
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((260.0, 420.0))
                    .title("floem-picker-kit"),
            ),
        )
        .run();
}
