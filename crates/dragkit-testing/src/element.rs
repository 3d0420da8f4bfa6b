//! In-memory host element for tests.

use dragkit::{DragElement, ListenerId, ListenerRegistration, PointerEvent, PointerHandler};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Records every interaction a drag unit has with its host element:
/// listener registrations and removals, transform and transition writes.
/// Tests drive it by dispatching synthetic [`PointerEvent`]s.
pub struct TestElement {
    listeners: RefCell<Vec<(ListenerId, ListenerRegistration, PointerHandler)>>,
    next_id: Cell<ListenerId>,
    added: Cell<usize>,
    removed: Cell<usize>,
    transforms: RefCell<Vec<String>>,
    transitions: RefCell<Vec<String>>,
    style_log: RefCell<Vec<String>>,
}

impl TestElement {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
            added: Cell::new(0),
            removed: Cell::new(0),
            transforms: RefCell::new(Vec::new()),
            transitions: RefCell::new(Vec::new()),
            style_log: RefCell::new(Vec::new()),
        })
    }

    /// Delivers an event to every listener matching its modality and phase,
    /// regardless of scope (a real document-level listener sees element
    /// events too). Returns whether a handler prevented default handling.
    pub fn dispatch(&self, event: &PointerEvent) -> bool {
        // Snapshot handlers first; one of them may mutate the registry
        // (e.g. update_config re-subscribing mid-dispatch).
        let handlers: Vec<PointerHandler> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(_, registration, _)| {
                registration.modality == event.modality && registration.phase == event.phase
            })
            .map(|(_, _, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(event);
        }
        event.is_default_prevented()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Registrations currently live, in registration order.
    pub fn registrations(&self) -> Vec<ListenerRegistration> {
        self.listeners
            .borrow()
            .iter()
            .map(|(_, registration, _)| *registration)
            .collect()
    }

    /// Total listeners ever added / removed, for re-subscription assertions.
    pub fn added_count(&self) -> usize {
        self.added.get()
    }

    pub fn removed_count(&self) -> usize {
        self.removed.get()
    }

    pub fn transforms(&self) -> Vec<String> {
        self.transforms.borrow().clone()
    }

    pub fn last_transform(&self) -> Option<String> {
        self.transforms.borrow().last().cloned()
    }

    pub fn transitions(&self) -> Vec<String> {
        self.transitions.borrow().clone()
    }

    /// Every style write in order, as `"<property>: <value>"` entries, for
    /// asserting that transitions land before the transform they ease.
    pub fn style_log(&self) -> Vec<String> {
        self.style_log.borrow().clone()
    }
}

impl DragElement for TestElement {
    fn add_listener(
        &self,
        registration: ListenerRegistration,
        handler: PointerHandler,
    ) -> ListenerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.added.set(self.added.get() + 1);
        self.listeners.borrow_mut().push((id, registration, handler));
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _, _)| *listener_id != id);
        self.removed.set(self.removed.get() + before - listeners.len());
    }

    fn set_transform(&self, transform: &str) {
        self.transforms.borrow_mut().push(transform.to_string());
        self.style_log
            .borrow_mut()
            .push(format!("transform: {transform}"));
    }

    fn set_transition(&self, transition: &str) {
        self.transitions.borrow_mut().push(transition.to_string());
        self.style_log
            .borrow_mut()
            .push(format!("transition: {transition}"));
    }
}
