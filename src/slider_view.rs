//! Floem view wrapping a [`Slider`].
//!
//! Floem routes pointer moves and releases to the active view even when the
//! pointer has left it, so the view forwards those to a private
//! [`Document`] while a drag is in progress. Paints a track outline and a
//! ring cursor at the current value.

use floem::kurbo::{Circle, Rect, Stroke};
use floem::peniko::Color;

use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::constants;
use crate::document::{Document, DocumentEventKind, PointerButton, PointerEvent};
use crate::geometry::BoundingRect;
use crate::slider::{Slider, SliderChannels, SliderValue};

enum SliderUpdate {
    Value(Option<SliderValue>),
}

pub struct SliderView {
    id: ViewId,
    slider: Slider,
    document: Document,
    value: Option<SliderValue>,
    size: floem::taffy::prelude::Size<f32>,
}

/// Creates a draggable slider surface.
///
/// `value` receives every emitted [`SliderValue`]; external writes move the
/// painted cursor.
pub fn slider_view(channels: SliderChannels, value: RwSignal<Option<SliderValue>>) -> SliderView {
    let id = ViewId::new();

    create_effect(move |_| {
        let v = value.get();
        id.update_state(SliderUpdate::Value(v));
    });

    let document = Document::new();
    let slider = Slider::new(channels, document.clone(), BoundingRect::default());
    slider.on_value(move |v| value.set(Some(v)));

    SliderView {
        id,
        slider,
        document,
        value: value.get_untracked(),
        size: Default::default(),
    }
    .style(|s| {
        s.min_height(constants::SLIDER_HEIGHT)
            .border_radius(constants::RADIUS)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl SliderView {
    pub fn on_drag_start(self, f: impl Fn() + 'static) -> Self {
        self.slider.on_drag_start(f);
        self
    }

    pub fn on_drag_end(self, f: impl Fn() + 'static) -> Self {
        self.slider.on_drag_end(f);
        self
    }

    fn forward(&self, kind: DocumentEventKind, pos: floem::kurbo::Point) {
        self.document.dispatch(&PointerEvent::mouse(kind, pos));
    }
}

impl View for SliderView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SliderUpdate>() {
            match *update {
                SliderUpdate::Value(v) => self.value = v,
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                let button = if e.button.is_primary() {
                    PointerButton::Primary
                } else {
                    PointerButton::Secondary
                };
                let press =
                    PointerEvent::mouse(DocumentEventKind::MouseDown, e.pos).with_button(button);
                let propagation = self.slider.pointer_down(&press);
                if matches!(propagation, EventPropagation::Stop) {
                    cx.update_active(self.id());
                    self.id.request_layout();
                }
                propagation
            }
            Event::PointerMove(e) => {
                if self.slider.is_dragging() {
                    self.forward(DocumentEventKind::MouseMove, e.pos);
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(e) => {
                if self.slider.is_dragging() {
                    self.forward(DocumentEventKind::MouseUp, e.pos);
                }
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.slider.cancel();
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        // Floem pointer positions are already local to the view.
        self.slider.set_bounds(BoundingRect::from_size(
            self.size.width as f64,
            self.size.height as f64,
        ));
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rrect = Rect::new(0.0, 0.0, w, h).to_rounded_rect(constants::RADIUS as f64);
        cx.stroke(&rrect, Color::rgba8(0, 0, 0, 40), &Stroke::new(1.0));

        let Some(value) = self.value else {
            return;
        };
        let center = value.local_position(w, h);
        let outer = Circle::new(center, constants::CURSOR_RADIUS + 1.0);
        cx.stroke(&outer, Color::rgba8(0, 0, 0, 80), &Stroke::new(1.0));
        let cursor = Circle::new(center, constants::CURSOR_RADIUS);
        cx.stroke(&cursor, Color::WHITE, &Stroke::new(2.0));
        let inner = Circle::new(center, constants::CURSOR_RADIUS - 1.5);
        cx.stroke(&inner, Color::rgba8(0, 0, 0, 80), &Stroke::new(1.0));
    }
}
