//! Document-level pointer listeners.
//!
//! A [`Document`] is the surface that keeps receiving pointer events while a
//! drag is in progress, even after the pointer leaves the element that
//! started it. Listeners are plain callbacks registered per
//! [`DocumentEventKind`]; the host forwards raw events through
//! [`Document::dispatch`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use floem::kurbo::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentEventKind {
    MouseDown,
    MouseMove,
    MouseUp,
    TouchStart,
    TouchMove,
    TouchEnd,
}

impl DocumentEventKind {
    pub fn is_touch(&self) -> bool {
        matches!(
            self,
            DocumentEventKind::TouchStart | DocumentEventKind::TouchMove | DocumentEventKind::TouchEnd
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Auxiliary,
}

/// A raw pointer or touch event in page coordinates.
#[derive(Debug, Clone)]
pub struct PointerEvent {
    pub kind: DocumentEventKind,
    /// Page position of a mouse event. Touch events usually leave this empty
    /// and report their points in `touches`.
    pub page: Option<Point>,
    pub touches: Vec<Point>,
    pub button: PointerButton,
    default_prevented: Cell<bool>,
}

impl PointerEvent {
    pub fn mouse(kind: DocumentEventKind, page: Point) -> Self {
        Self {
            kind,
            page: Some(page),
            touches: Vec::new(),
            button: PointerButton::Primary,
            default_prevented: Cell::new(false),
        }
    }

    pub fn touch(kind: DocumentEventKind, touches: Vec<Point>) -> Self {
        Self {
            kind,
            page: None,
            touches,
            button: PointerButton::Primary,
            default_prevented: Cell::new(false),
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// The event's own page position, or its first touch point.
    pub fn page_position(&self) -> Option<Point> {
        self.page.or_else(|| self.touches.first().copied())
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// Handle returned by [`Document::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Handler = Rc<dyn Fn(&PointerEvent)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, DocumentEventKind, Handler)>,
}

/// Shared listener registry. Cloning yields another handle to the same
/// document.
#[derive(Clone, Default)]
pub struct Document {
    listeners: Rc<RefCell<Listeners>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(
        &self,
        kind: DocumentEventKind,
        handler: impl Fn(&PointerEvent) + 'static,
    ) -> ListenerId {
        let mut listeners = self.listeners.borrow_mut();
        let id = ListenerId(listeners.next_id);
        listeners.next_id += 1;
        listeners.entries.push((id, kind, Rc::new(handler)));
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.entries.len();
        listeners.entries.retain(|(entry, _, _)| *entry != id);
        listeners.entries.len() != before
    }

    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.listeners
            .borrow()
            .entries
            .iter()
            .any(|(entry, _, _)| *entry == id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }

    /// Deliver `event` to every listener registered for its kind and return
    /// how many ran.
    ///
    /// Handlers may add or remove listeners. A listener removed by an earlier
    /// handler in the same dispatch is skipped.
    pub fn dispatch(&self, event: &PointerEvent) -> usize {
        let snapshot: Vec<(ListenerId, Handler)> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .filter(|(_, kind, _)| *kind == event.kind)
            .map(|(id, _, handler)| (*id, handler.clone()))
            .collect();

        let mut delivered = 0;
        for (id, handler) in snapshot {
            if !self.is_registered(id) {
                continue;
            }
            handler(event);
            delivered += 1;
        }
        delivered
    }
}
