//! The drag behavior unit.
//!
//! [`Draggable::attach`] wires pointer listeners onto a host element and
//! keeps a single gesture slot: Idle until an accepted start event, Dragging
//! until the matching end/cancel. Every accepted move runs the same
//! pipeline (raw delta from the anchor, optional step snapping, axis
//! freeze, bounds clamp) and commits the result to the position and,
//! unless disabled, the element's transform.
//!
//! Mouse and touch share the one gesture slot: when both modalities are
//! enabled and deliver interleaved sequences, the later events win the
//! anchor. That is the unit's contract, not a race to coordinate away.

use crate::config::{DragConfig, DragDirection};
use crate::element::{
    DragElement, ListenerId, ListenerRegistration, ListenerScope, PointerHandler,
};
use crate::event::{PointerButton, PointerEvent, PointerModality, PointerPhase};
use crate::style::translate3d;
use dragkit_geometry::Point;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Identifier for a registered position watcher.
pub type WatcherId = u64;

/// Inline capacity fits the worst-case listener set (four touch plus three
/// mouse registrations), so attach never allocates.
type ListenerVec = SmallVec<[ListenerId; 7]>;
type WatcherVec = SmallVec<[(WatcherId, Rc<dyn Fn(Point)>); 2]>;

struct DragState {
    /// Weak self-reference handed to listener closures and setters, so the
    /// element and host-held setters never keep the unit alive.
    this: Weak<DragState>,
    element: Rc<dyn DragElement>,
    config: RefCell<DragConfig>,
    position: Cell<Point>,
    dragging: Cell<bool>,
    /// Pointer coordinate at gesture start, relative to the carried
    /// position; moves are measured against it.
    anchor: Cell<Point>,
    listeners: RefCell<ListenerVec>,
    watchers: RefCell<WatcherVec>,
    next_watcher: Cell<WatcherId>,
    detached: Cell<bool>,
}

impl DragState {
    /// Whether an event participates in the gesture at all. Disabled
    /// modalities and non-primary mouse buttons are ignored identically:
    /// no state transition, no callback, no side effect.
    fn accepts(&self, event: &PointerEvent) -> bool {
        let config = self.config.borrow();
        match event.modality {
            PointerModality::Mouse => {
                config.mouse && event.button == Some(PointerButton::Primary)
            }
            PointerModality::Touch => config.touch,
        }
    }

    fn handle_start(&self, event: &PointerEvent) {
        if !self.accepts(event) {
            return;
        }

        let anchor = event.position - self.position.get();
        self.anchor.set(anchor);
        self.dragging.set(true);
        log::trace!("drag started, anchor ({}, {})", anchor.x, anchor.y);

        let on_start = self.config.borrow().on_start.clone();
        if let Some(on_start) = on_start {
            on_start(&self.element, anchor, &self.setter());
        }
    }

    fn handle_move(&self, event: &PointerEvent) {
        if !self.dragging.get() || !self.accepts(event) {
            return;
        }

        // Clone what the pipeline needs up front; callbacks invoked below
        // may re-enter through the setter or update_config.
        let (prevent, step, direction, bounds, on_move) = {
            let config = self.config.borrow();
            (
                config.prevent_default_on_move,
                config.step,
                config.direction,
                config.bounds,
                config.on_move.clone(),
            )
        };

        if prevent {
            event.prevent_default();
        }

        let carried = self.position.get();
        let raw = event.position - self.anchor.get();
        let snapped = step.apply(raw);
        let constrained = match direction {
            DragDirection::Vertical => Point::new(carried.x, snapped.y),
            DragDirection::Horizontal => Point::new(snapped.x, carried.y),
            DragDirection::Both => snapped,
        };
        let next = bounds.clamp(constrained);

        self.commit(next, None);
        if let Some(on_move) = on_move {
            // The setter re-commits, so a callback override wins.
            on_move(&self.element, next, &self.setter());
        }
    }

    fn handle_end(&self, event: &PointerEvent) {
        if !self.dragging.get() || !self.accepts(event) {
            return;
        }

        self.dragging.set(false);
        let last = self.position.get();
        log::trace!("drag ended at ({}, {})", last.x, last.y);

        let on_end = self.config.borrow().on_end.clone();
        if let Some(on_end) = on_end {
            on_end(&self.element, last, &self.setter());
        }
    }

    /// Stores and publishes a position; mirrors it onto the element while
    /// still attached.
    fn commit(&self, position: Point, transition: Option<&str>) {
        self.position.set(position);

        if self.config.borrow().apply_transform && !self.detached.get() {
            if let Some(transition) = transition {
                self.element.set_transition(transition);
            }
            self.element.set_transform(&translate3d(position));
        }

        let watchers: SmallVec<[Rc<dyn Fn(Point)>; 2]> = self
            .watchers
            .borrow()
            .iter()
            .map(|(_, watcher)| watcher.clone())
            .collect();
        for watcher in watchers {
            watcher(position);
        }
    }

    /// Quantizes like a move would, but does not clamp: explicit positions
    /// are the caller's to place.
    fn set_position(&self, position: Point, transition: Option<&str>) {
        if self.detached.get() {
            log::warn!("set_position after detach; element style left untouched");
        }
        let snapped = self.config.borrow().step.apply(position);
        self.commit(snapped, transition);
    }

    fn setter(&self) -> PositionSetter {
        PositionSetter {
            state: self.this.clone(),
        }
    }

    fn subscribe(&self) {
        use PointerModality::{Mouse, Touch};
        use PointerPhase::{Cancel, End, Move, Start};

        let config = self.config.borrow();
        let mut ids = self.listeners.borrow_mut();
        debug_assert!(ids.is_empty(), "subscribe with listeners still registered");

        if config.touch {
            let mut touch_move = ListenerRegistration::new(ListenerScope::Document, Touch, Move);
            if config.prevent_default_on_move {
                // Passive listeners cannot suppress default handling.
                touch_move = touch_move.non_passive();
            }
            ids.push(self.add(
                ListenerRegistration::new(ListenerScope::Target, Touch, Start),
                Self::handle_start,
            ));
            ids.push(self.add(touch_move, Self::handle_move));
            ids.push(self.add(
                ListenerRegistration::new(ListenerScope::Document, Touch, End),
                Self::handle_end,
            ));
            ids.push(self.add(
                ListenerRegistration::new(ListenerScope::Document, Touch, Cancel),
                Self::handle_end,
            ));
        }
        if config.mouse {
            ids.push(self.add(
                ListenerRegistration::new(ListenerScope::Target, Mouse, Start),
                Self::handle_start,
            ));
            ids.push(self.add(
                ListenerRegistration::new(ListenerScope::Document, Mouse, Move),
                Self::handle_move,
            ));
            ids.push(self.add(
                ListenerRegistration::new(ListenerScope::Document, Mouse, End),
                Self::handle_end,
            ));
        }
    }

    /// Registers one listener whose handler holds only the weak
    /// self-reference.
    fn add(
        &self,
        registration: ListenerRegistration,
        handle: fn(&DragState, &PointerEvent),
    ) -> ListenerId {
        let state = self.this.clone();
        let handler: PointerHandler = Rc::new(move |event| {
            if let Some(state) = state.upgrade() {
                handle(&state, event);
            }
        });
        self.element.add_listener(registration, handler)
    }

    fn unsubscribe(&self) {
        for id in self.listeners.borrow_mut().drain(..) {
            self.element.remove_listener(id);
        }
    }

    fn detach(&self) {
        // Draining the listener list makes repeat calls a natural no-op.
        let first = !self.detached.replace(true);
        self.unsubscribe();
        self.dragging.set(false);
        if first {
            log::trace!("detached");
        }
    }

    fn update_config(&self, config: DragConfig) {
        if self.detached.get() {
            log::warn!("update_config after detach ignored");
            return;
        }
        let resubscribe = !self.config.borrow().subscription_eq(&config);
        *self.config.borrow_mut() = config;
        if resubscribe {
            self.unsubscribe();
            self.subscribe();
        }
    }
}

/// Entry point for attaching drag behavior to an element.
pub struct Draggable;

impl Draggable {
    /// Registers pointer listeners per the enabled modalities and returns
    /// the handle the host reads positions from. Position starts at
    /// `(0, 0)`.
    pub fn attach(element: Rc<dyn DragElement>, config: DragConfig) -> DragHandle {
        let state = Rc::new_cyclic(|this| DragState {
            this: this.clone(),
            element,
            config: RefCell::new(config),
            position: Cell::new(Point::ZERO),
            dragging: Cell::new(false),
            anchor: Cell::new(Point::ZERO),
            listeners: RefCell::new(SmallVec::new()),
            watchers: RefCell::new(SmallVec::new()),
            next_watcher: Cell::new(0),
            detached: Cell::new(false),
        });
        state.subscribe();
        log::trace!("attached with {} listeners", state.listeners.borrow().len());
        DragHandle { state }
    }
}

/// Handle to an attached drag behavior unit.
///
/// Dropping the handle detaches: every listener registered during attach is
/// removed (scoped release). `detach` may also be called explicitly and is
/// idempotent.
pub struct DragHandle {
    state: Rc<DragState>,
}

impl DragHandle {
    /// The current position. `(0, 0)` until a move or setter commits one.
    pub fn position(&self) -> Point {
        self.state.position.get()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.dragging.get()
    }

    /// Forcibly sets the position. The value is quantized like a move but
    /// deliberately not clamped to the configured bounds; an optional
    /// transition effect is written before the visual update.
    pub fn set_position(&self, position: Point, transition: Option<&str>) {
        self.state.set_position(position, transition);
    }

    /// A setter equivalent to the one lifecycle callbacks receive.
    pub fn setter(&self) -> PositionSetter {
        self.state.setter()
    }

    /// Registers a watcher invoked with every published position: each
    /// accepted move and each explicit set.
    pub fn watch_position<F>(&self, watcher: F) -> WatcherId
    where
        F: Fn(Point) + 'static,
    {
        let id = self.state.next_watcher.get();
        self.state.next_watcher.set(id + 1);
        self.state.watchers.borrow_mut().push((id, Rc::new(watcher)));
        id
    }

    pub fn unwatch_position(&self, id: WatcherId) {
        self.state
            .watchers
            .borrow_mut()
            .retain(|(watcher_id, _)| *watcher_id != id);
    }

    /// Replaces the effective configuration. Listeners are re-registered
    /// only when a subscription-affecting field changed (`touch`, `mouse`,
    /// `prevent_default_on_move`); everything else takes effect on the next
    /// event.
    pub fn update_config(&self, config: DragConfig) {
        self.state.update_config(config);
    }

    /// Scoped release: removes every listener added during attach.
    /// Idempotent and safe to call any number of times.
    pub fn detach(&self) {
        self.state.detach();
    }
}

impl Drop for DragHandle {
    fn drop(&mut self) {
        self.state.detach();
    }
}

/// Setter handed to lifecycle callbacks; also available on the handle.
///
/// Holds only a weak reference to the unit, so a host that stashes one past
/// detach gets a silent no-op instead of a kept-alive unit.
#[derive(Clone)]
pub struct PositionSetter {
    state: Weak<DragState>,
}

impl PositionSetter {
    /// Same contract as [`DragHandle::set_position`].
    pub fn set(&self, position: Point, transition: Option<&str>) {
        if let Some(state) = self.state.upgrade() {
            state.set_position(position, transition);
        }
    }
}
