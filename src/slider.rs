//! Pointer-to-fraction mapping and drag sessions for 1D/2D sliders.
//!
//! A [`Slider`] turns pointer positions over a draggable surface into
//! normalized channel values. Pressing on the surface starts a
//! [`DragSession`], which listens on the owning [`Document`] so that moves
//! and releases outside the surface still reach the slider.
//!
//! ```
//! use floem::kurbo::Point;
//! use floem_picker_kit::{
//!     BoundingRect, Document, DocumentEventKind, PointerEvent, RangeTag, Slider,
//!     SliderChannels, SliderValue,
//! };
//!
//! let doc = Document::new();
//! let channels = SliderChannels::area(RangeTag(0), RangeTag(1));
//! let slider = Slider::new(channels, doc.clone(), BoundingRect::from_size(200.0, 100.0));
//!
//! let last = std::rc::Rc::new(std::cell::Cell::new(None));
//! let sink = last.clone();
//! slider.on_value(move |v| sink.set(Some(v)));
//!
//! slider.pointer_down(&PointerEvent::mouse(DocumentEventKind::MouseDown, Point::new(50.0, 25.0)));
//! assert_eq!(
//!     last.get(),
//!     Some(SliderValue::Area { s: 0.25, v: 0.75, rg_x: RangeTag(0), rg_y: RangeTag(1) })
//! );
//!
//! doc.dispatch(&PointerEvent::mouse(DocumentEventKind::MouseUp, Point::ZERO));
//! assert!(!slider.is_dragging());
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use floem::event::EventPropagation;
use floem::kurbo::{Point, Vec2};

use crate::document::{Document, DocumentEventKind, ListenerId, PointerButton, PointerEvent};
use crate::error::ConfigError;
use crate::geometry::BoundingRect;

/// Identifies which numeric channel a slider or input drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeTag(pub u32);

impl fmt::Display for RangeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Axes a slider reports, with the tag attached to each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SliderChannels {
    /// 2D area: saturation on x, value on y.
    Area { x: RangeTag, y: RangeTag },
    Horizontal(RangeTag),
    Vertical(RangeTag),
}

impl SliderChannels {
    pub fn area(x: RangeTag, y: RangeTag) -> Self {
        SliderChannels::Area { x, y }
    }

    /// Build from optional `rg_x` / `rg_y` tags. At least one is required.
    pub fn from_tags(x: Option<RangeTag>, y: Option<RangeTag>) -> Result<Self, ConfigError> {
        match (x, y) {
            (Some(x), Some(y)) => Ok(SliderChannels::Area { x, y }),
            (Some(x), None) => Ok(SliderChannels::Horizontal(x)),
            (None, Some(y)) => Ok(SliderChannels::Vertical(y)),
            (None, None) => Err(ConfigError::NoChannel),
        }
    }

    pub fn rg_x(&self) -> Option<RangeTag> {
        match *self {
            SliderChannels::Area { x, .. } | SliderChannels::Horizontal(x) => Some(x),
            SliderChannels::Vertical(_) => None,
        }
    }

    pub fn rg_y(&self) -> Option<RangeTag> {
        match *self {
            SliderChannels::Area { y, .. } | SliderChannels::Vertical(y) => Some(y),
            SliderChannels::Horizontal(_) => None,
        }
    }

    /// Map a position relative to the surface's top-left corner to a value.
    ///
    /// The position is clamped to the surface before dividing, so fractions
    /// stay in `0.0..=1.0`. A surface with no extent on an axis reports 0.
    pub fn map(&self, local: Point, width: f64, height: f64) -> SliderValue {
        let fx = fraction(local.x, width);
        let fy = fraction(local.y, height);
        match *self {
            SliderChannels::Area { x, y } => SliderValue::Area {
                s: fx,
                v: 1.0 - fy,
                rg_x: x,
                rg_y: y,
            },
            SliderChannels::Vertical(y) => SliderValue::Vertical { v: fy, rg_y: y },
            SliderChannels::Horizontal(x) => SliderValue::Horizontal { v: fx, rg_x: x },
        }
    }
}

fn fraction(pos: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        pos.clamp(0.0, extent) / extent
    } else {
        0.0
    }
}

/// Value emitted by a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SliderValue {
    /// Saturation from x, value from y (top = 1.0).
    Area {
        s: f64,
        v: f64,
        rg_x: RangeTag,
        rg_y: RangeTag,
    },
    /// Top = 0.0.
    Vertical { v: f64, rg_y: RangeTag },
    /// Left = 0.0.
    Horizontal { v: f64, rg_x: RangeTag },
}

impl SliderValue {
    pub fn v(&self) -> f64 {
        match *self {
            SliderValue::Area { v, .. }
            | SliderValue::Vertical { v, .. }
            | SliderValue::Horizontal { v, .. } => v,
        }
    }

    pub fn s(&self) -> Option<f64> {
        match *self {
            SliderValue::Area { s, .. } => Some(s),
            _ => None,
        }
    }

    /// Position within a `width` x `height` surface that maps back to this
    /// value. Axes the value does not cover are centered.
    pub fn local_position(&self, width: f64, height: f64) -> Point {
        match *self {
            SliderValue::Area { s, v, .. } => Point::new(s * width, (1.0 - v) * height),
            SliderValue::Vertical { v, .. } => Point::new(width / 2.0, v * height),
            SliderValue::Horizontal { v, .. } => Point::new(v * width, height / 2.0),
        }
    }
}

/// Listeners registered on a [`Document`] for one drag. Dropping the
/// session removes them.
pub struct DragSession {
    document: Document,
    listeners: Vec<ListenerId>,
}

impl DragSession {
    fn new(document: Document) -> Self {
        Self {
            document,
            listeners: Vec::with_capacity(4),
        }
    }

    fn listen(&mut self, kind: DocumentEventKind, handler: impl Fn(&PointerEvent) + 'static) {
        let id = self.document.add_listener(kind, handler);
        self.listeners.push(id);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Remove every listener this session registered.
    pub fn release(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        for id in self.listeners.drain(..) {
            self.document.remove_listener(id);
        }
    }
}

impl Drop for DragSession {
    fn drop(&mut self) {
        if !self.listeners.is_empty() {
            log::debug!("releasing {} drag listeners", self.listeners.len());
            self.detach();
        }
    }
}

type ValueCallback = Rc<dyn Fn(SliderValue)>;
type SignalCallback = Rc<dyn Fn()>;

struct SliderInner {
    channels: SliderChannels,
    document: Document,
    bounds: Cell<BoundingRect>,
    scroll: Cell<Vec2>,
    session: RefCell<Option<DragSession>>,
    on_value: RefCell<Option<ValueCallback>>,
    on_drag_start: RefCell<Option<SignalCallback>>,
    on_drag_end: RefCell<Option<SignalCallback>>,
}

impl SliderInner {
    fn set_cursor(&self, event: &PointerEvent) {
        let Some(page) = event.page_position() else {
            log::warn!("{:?} event without coordinates ignored", event.kind);
            return;
        };
        let bounds = self.bounds.get();
        let scroll = self.scroll.get();
        let local = Point::new(
            page.x - bounds.left - scroll.x,
            page.y - bounds.top - scroll.y,
        );
        let value = self.channels.map(local, bounds.width, bounds.height);
        log::trace!("slider {:?} -> {value:?}", event.kind);
        let cb = self.on_value.borrow().clone();
        if let Some(cb) = cb {
            cb(value);
        }
    }

    fn track(&self, event: &PointerEvent) {
        event.prevent_default();
        self.set_cursor(event);
    }

    fn stop(&self) {
        let Some(session) = self.session.borrow_mut().take() else {
            return;
        };
        session.release();
        log::debug!("slider drag ended");
        let cb = self.on_drag_end.borrow().clone();
        if let Some(cb) = cb {
            cb();
        }
    }
}

/// A draggable 1D or 2D slider surface.
///
/// State is `idle` until [`Slider::pointer_down`] accepts a press, then
/// `dragging` until a mouse-up or touch-end reaches the document.
pub struct Slider {
    inner: Rc<SliderInner>,
}

impl Slider {
    pub fn new(channels: SliderChannels, document: Document, bounds: BoundingRect) -> Self {
        Self {
            inner: Rc::new(SliderInner {
                channels,
                document,
                bounds: Cell::new(bounds),
                scroll: Cell::new(Vec2::ZERO),
                session: RefCell::new(None),
                on_value: RefCell::new(None),
                on_drag_start: RefCell::new(None),
                on_drag_end: RefCell::new(None),
            }),
        }
    }

    /// Build from optional `rg_x` / `rg_y` tags.
    pub fn from_tags(
        rg_x: Option<RangeTag>,
        rg_y: Option<RangeTag>,
        document: Document,
        bounds: BoundingRect,
    ) -> Result<Self, ConfigError> {
        let channels = SliderChannels::from_tags(rg_x, rg_y)?;
        Ok(Self::new(channels, document, bounds))
    }

    pub fn channels(&self) -> SliderChannels {
        self.inner.channels
    }

    /// Current page-space bounds of the surface.
    pub fn set_bounds(&self, bounds: BoundingRect) {
        self.inner.bounds.set(bounds);
    }

    pub fn bounds(&self) -> BoundingRect {
        self.inner.bounds.get()
    }

    /// Page scroll, subtracted from event coordinates.
    pub fn set_scroll_offset(&self, scroll: Vec2) {
        self.inner.scroll.set(scroll);
    }

    pub fn on_value(&self, f: impl Fn(SliderValue) + 'static) {
        *self.inner.on_value.borrow_mut() = Some(Rc::new(f));
    }

    pub fn on_drag_start(&self, f: impl Fn() + 'static) {
        *self.inner.on_drag_start.borrow_mut() = Some(Rc::new(f));
    }

    pub fn on_drag_end(&self, f: impl Fn() + 'static) {
        *self.inner.on_drag_end.borrow_mut() = Some(Rc::new(f));
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.session.borrow().is_some()
    }

    /// Handle a press on the surface.
    ///
    /// Accepts primary mouse-down and touch-start, emitting the initial value
    /// and starting a drag. A press during an active drag replaces the old
    /// session. Anything else is left to propagate.
    pub fn pointer_down(&self, event: &PointerEvent) -> EventPropagation {
        let accepted = match event.kind {
            DocumentEventKind::MouseDown => event.button == PointerButton::Primary,
            DocumentEventKind::TouchStart => true,
            _ => false,
        };
        if !accepted {
            return EventPropagation::Continue;
        }

        self.inner.set_cursor(event);

        if let Some(old) = self.inner.session.borrow_mut().take() {
            log::debug!("slider drag restarted, dropping previous session");
            old.release();
        }

        let mut session = DragSession::new(self.inner.document.clone());
        for kind in [DocumentEventKind::MouseUp, DocumentEventKind::TouchEnd] {
            let weak: Weak<SliderInner> = Rc::downgrade(&self.inner);
            session.listen(kind, move |_| {
                if let Some(inner) = weak.upgrade() {
                    inner.stop();
                }
            });
        }
        for kind in [DocumentEventKind::MouseMove, DocumentEventKind::TouchMove] {
            let weak: Weak<SliderInner> = Rc::downgrade(&self.inner);
            session.listen(kind, move |ev| {
                if let Some(inner) = weak.upgrade() {
                    inner.track(ev);
                }
            });
        }
        *self.inner.session.borrow_mut() = Some(session);

        log::debug!(
            "slider drag started ({})",
            if event.kind.is_touch() { "touch" } else { "mouse" }
        );
        let cb = self.inner.on_drag_start.borrow().clone();
        if let Some(cb) = cb {
            cb();
        }
        EventPropagation::Stop
    }

    /// End the current drag as if the pointer had been released.
    pub fn cancel(&self) {
        self.inner.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collector(slider: &Slider) -> Rc<RefCell<Vec<SliderValue>>> {
        let out = Rc::new(RefCell::new(Vec::new()));
        let sink = out.clone();
        slider.on_value(move |v| sink.borrow_mut().push(v));
        out
    }

    fn down(x: f64, y: f64) -> PointerEvent {
        PointerEvent::mouse(DocumentEventKind::MouseDown, Point::new(x, y))
    }

    fn mv(x: f64, y: f64) -> PointerEvent {
        PointerEvent::mouse(DocumentEventKind::MouseMove, Point::new(x, y))
    }

    fn up() -> PointerEvent {
        PointerEvent::mouse(DocumentEventKind::MouseUp, Point::ZERO)
    }

    #[test]
    fn no_tags_is_a_config_error() {
        assert_eq!(
            SliderChannels::from_tags(None, None),
            Err(ConfigError::NoChannel)
        );
        assert!(Slider::from_tags(None, None, Document::new(), BoundingRect::default()).is_err());
    }

    #[test]
    fn tags_select_channel_shape() {
        assert_eq!(
            SliderChannels::from_tags(Some(RangeTag(2)), None),
            Ok(SliderChannels::Horizontal(RangeTag(2)))
        );
        assert_eq!(
            SliderChannels::from_tags(None, Some(RangeTag(3))),
            Ok(SliderChannels::Vertical(RangeTag(3)))
        );
        let area = SliderChannels::from_tags(Some(RangeTag(0)), Some(RangeTag(1))).unwrap();
        assert_eq!(area.rg_x(), Some(RangeTag(0)));
        assert_eq!(area.rg_y(), Some(RangeTag(1)));
    }

    #[test]
    fn area_maps_saturation_and_inverted_value() {
        let value = SliderChannels::area(RangeTag(0), RangeTag(1)).map(Point::new(50.0, 25.0), 200.0, 100.0);
        assert_eq!(
            value,
            SliderValue::Area {
                s: 0.25,
                v: 0.75,
                rg_x: RangeTag(0),
                rg_y: RangeTag(1)
            }
        );
    }

    #[test]
    fn vertical_and_horizontal_report_single_value() {
        let v = SliderChannels::Vertical(RangeTag(4)).map(Point::new(50.0, 25.0), 200.0, 100.0);
        assert_eq!(v, SliderValue::Vertical { v: 0.25, rg_y: RangeTag(4) });
        assert_eq!(v.s(), None);

        let h = SliderChannels::Horizontal(RangeTag(5)).map(Point::new(50.0, 25.0), 200.0, 100.0);
        assert_eq!(h, SliderValue::Horizontal { v: 0.25, rg_x: RangeTag(5) });
    }

    #[test]
    fn positions_outside_surface_clamp() {
        let ch = SliderChannels::area(RangeTag(0), RangeTag(1));
        assert_eq!(ch.map(Point::new(-500.0, -500.0), 200.0, 100.0).s(), Some(0.0));
        assert_eq!(ch.map(Point::new(-500.0, -500.0), 200.0, 100.0).v(), 1.0);
        assert_eq!(ch.map(Point::new(9e9, 9e9), 200.0, 100.0).s(), Some(1.0));
        assert_eq!(ch.map(Point::new(9e9, 9e9), 200.0, 100.0).v(), 0.0);
    }

    #[test]
    fn zero_sized_surface_reports_zero() {
        let v = SliderChannels::Horizontal(RangeTag(0)).map(Point::new(10.0, 10.0), 0.0, 0.0);
        assert_eq!(v.v(), 0.0);
    }

    #[test]
    fn local_position_inverts_map() {
        let ch = SliderChannels::area(RangeTag(0), RangeTag(1));
        let p = ch.map(Point::new(50.0, 25.0), 200.0, 100.0).local_position(200.0, 100.0);
        assert_eq!(p, Point::new(50.0, 25.0));
    }

    #[test]
    fn drag_cycle_emits_then_goes_quiet() {
        let doc = Document::new();
        let slider = Slider::new(
            SliderChannels::area(RangeTag(0), RangeTag(1)),
            doc.clone(),
            BoundingRect::new(100.0, 100.0, 200.0, 100.0),
        );
        let values = collector(&slider);
        let started = Rc::new(Cell::new(0));
        let ended = Rc::new(Cell::new(0));
        let (s, e) = (started.clone(), ended.clone());
        slider.on_drag_start(move || s.set(s.get() + 1));
        slider.on_drag_end(move || e.set(e.get() + 1));

        assert!(matches!(
            slider.pointer_down(&down(150.0, 125.0)),
            EventPropagation::Stop
        ));
        assert!(slider.is_dragging());
        assert_eq!(started.get(), 1);
        assert_eq!(doc.listener_count(), 4);

        let move_event = mv(300.0, 100.0);
        doc.dispatch(&move_event);
        assert!(move_event.default_prevented());

        doc.dispatch(&up());
        assert!(!slider.is_dragging());
        assert_eq!(ended.get(), 1);
        assert_eq!(doc.listener_count(), 0);

        doc.dispatch(&mv(120.0, 120.0));
        let values = values.borrow();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].s(), Some(0.25));
        assert_eq!(values[0].v(), 0.75);
        assert_eq!(values[1].s(), Some(1.0));
        assert_eq!(values[1].v(), 1.0);
    }

    #[test]
    fn touch_drag_uses_first_touch_and_touch_end_stops() {
        let doc = Document::new();
        let slider = Slider::new(
            SliderChannels::Vertical(RangeTag(7)),
            doc.clone(),
            BoundingRect::from_size(10.0, 200.0),
        );
        let values = collector(&slider);

        slider.pointer_down(&PointerEvent::touch(
            DocumentEventKind::TouchStart,
            vec![Point::new(5.0, 50.0), Point::new(5.0, 190.0)],
        ));
        doc.dispatch(&PointerEvent::touch(
            DocumentEventKind::TouchMove,
            vec![Point::new(5.0, 150.0)],
        ));
        doc.dispatch(&PointerEvent::touch(DocumentEventKind::TouchEnd, vec![]));

        assert!(!slider.is_dragging());
        assert_eq!(
            *values.borrow(),
            vec![
                SliderValue::Vertical { v: 0.25, rg_y: RangeTag(7) },
                SliderValue::Vertical { v: 0.75, rg_y: RangeTag(7) },
            ]
        );
    }

    #[test]
    fn secondary_button_does_not_start_drag() {
        let doc = Document::new();
        let slider = Slider::new(
            SliderChannels::Horizontal(RangeTag(0)),
            doc.clone(),
            BoundingRect::from_size(100.0, 10.0),
        );
        let values = collector(&slider);

        let press = down(10.0, 5.0).with_button(PointerButton::Secondary);
        assert!(matches!(
            slider.pointer_down(&press),
            EventPropagation::Continue
        ));
        assert!(!slider.is_dragging());
        assert!(values.borrow().is_empty());
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn restart_while_dragging_replaces_listeners() {
        let doc = Document::new();
        let slider = Slider::new(
            SliderChannels::Horizontal(RangeTag(0)),
            doc.clone(),
            BoundingRect::from_size(100.0, 10.0),
        );
        let values = collector(&slider);

        slider.pointer_down(&down(10.0, 5.0));
        slider.pointer_down(&down(20.0, 5.0));
        assert_eq!(doc.listener_count(), 4);

        doc.dispatch(&mv(30.0, 5.0));
        assert_eq!(values.borrow().len(), 3);
    }

    #[test]
    fn dropping_slider_mid_drag_releases_listeners() {
        let doc = Document::new();
        let slider = Slider::new(
            SliderChannels::Horizontal(RangeTag(0)),
            doc.clone(),
            BoundingRect::from_size(100.0, 10.0),
        );
        slider.pointer_down(&down(10.0, 5.0));
        assert_eq!(doc.listener_count(), 4);

        drop(slider);
        assert_eq!(doc.listener_count(), 0);
        assert_eq!(doc.dispatch(&mv(30.0, 5.0)), 0);
    }

    #[test]
    fn scroll_offset_shifts_local_position() {
        let doc = Document::new();
        let slider = Slider::new(
            SliderChannels::Horizontal(RangeTag(0)),
            doc,
            BoundingRect::new(10.0, 0.0, 100.0, 10.0),
        );
        slider.set_scroll_offset(Vec2::new(20.0, 0.0));
        let values = collector(&slider);
        slider.pointer_down(&down(80.0, 5.0));
        assert_eq!(values.borrow()[0].v(), 0.5);
    }

    #[test]
    fn cancel_ends_drag() {
        let doc = Document::new();
        let slider = Slider::new(
            SliderChannels::Horizontal(RangeTag(0)),
            doc.clone(),
            BoundingRect::from_size(100.0, 10.0),
        );
        slider.pointer_down(&down(10.0, 5.0));
        slider.cancel();
        assert!(!slider.is_dragging());
        assert_eq!(doc.listener_count(), 0);
    }
}
