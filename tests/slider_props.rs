//! Property tests for pointer-to-fraction mapping and drag sessions.

use std::cell::RefCell;
use std::rc::Rc;

use floem::kurbo::Point;
use floem_picker_kit::{
    BoundingRect, Document, DocumentEventKind, PointerEvent, RangeTag, Slider, SliderChannels,
    SliderValue,
};
use proptest::prelude::*;

fn channels() -> impl Strategy<Value = SliderChannels> {
    prop_oneof![
        Just(SliderChannels::area(RangeTag(0), RangeTag(1))),
        Just(SliderChannels::Horizontal(RangeTag(2))),
        Just(SliderChannels::Vertical(RangeTag(3))),
    ]
}

fn in_unit(x: f64) -> bool {
    (0.0..=1.0).contains(&x)
}

proptest! {
    #[test]
    fn fractions_stay_in_unit_range(
        ch in channels(),
        x in -1e6f64..1e6,
        y in -1e6f64..1e6,
        w in 0.0f64..2000.0,
        h in 0.0f64..2000.0,
    ) {
        let value = ch.map(Point::new(x, y), w, h);
        prop_assert!(in_unit(value.v()));
        if let Some(s) = value.s() {
            prop_assert!(in_unit(s));
        }
    }

    #[test]
    fn single_axis_sliders_report_plain_ratio(
        x in 0.0f64..200.0,
        y in 0.0f64..100.0,
    ) {
        let v = SliderChannels::Vertical(RangeTag(9)).map(Point::new(x, y), 200.0, 100.0);
        prop_assert_eq!(v, SliderValue::Vertical { v: y / 100.0, rg_y: RangeTag(9) });
        let h = SliderChannels::Horizontal(RangeTag(8)).map(Point::new(x, y), 200.0, 100.0);
        prop_assert_eq!(h, SliderValue::Horizontal { v: x / 200.0, rg_x: RangeTag(8) });
    }

    #[test]
    fn nothing_emitted_after_release(moves in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 1..8)) {
        let doc = Document::new();
        let slider = Slider::new(
            SliderChannels::area(RangeTag(0), RangeTag(1)),
            doc.clone(),
            BoundingRect::new(50.0, 50.0, 200.0, 100.0),
        );
        let count = Rc::new(RefCell::new(0usize));
        let sink = count.clone();
        slider.on_value(move |_| *sink.borrow_mut() += 1);

        slider.pointer_down(&PointerEvent::mouse(DocumentEventKind::MouseDown, Point::new(60.0, 60.0)));
        for &(x, y) in &moves {
            doc.dispatch(&PointerEvent::mouse(DocumentEventKind::MouseMove, Point::new(x, y)));
        }
        doc.dispatch(&PointerEvent::mouse(DocumentEventKind::MouseUp, Point::ZERO));
        let during = *count.borrow();
        prop_assert_eq!(during, moves.len() + 1);

        for &(x, y) in &moves {
            doc.dispatch(&PointerEvent::mouse(DocumentEventKind::MouseMove, Point::new(x, y)));
        }
        prop_assert_eq!(*count.borrow(), during);
        prop_assert_eq!(doc.listener_count(), 0);
    }
}

#[test]
fn worked_example_area_value() {
    let value = SliderChannels::area(RangeTag(0), RangeTag(1)).map(Point::new(50.0, 25.0), 200.0, 100.0);
    assert_eq!(
        value,
        SliderValue::Area {
            s: 0.25,
            v: 0.75,
            rg_x: RangeTag(0),
            rg_y: RangeTag(1),
        }
    );
}
