//! Host element seam.
//!
//! The behavior unit borrows the element through [`DragElement`]: it
//! registers pointer listeners while attached and, when visual transforms
//! are enabled, writes `transform`/`transition` style values. The host owns
//! the element, implements this trait for its UI runtime, and must not
//! concurrently mutate the same style properties while a unit is attached.

use crate::event::{PointerEvent, PointerModality, PointerPhase};
use std::rc::Rc;

pub type PointerHandler = Rc<dyn Fn(&PointerEvent)>;

/// Opaque handle to a registered listener, used for removal.
pub type ListenerId = u64;

/// Where a listener is registered.
///
/// Start listeners attach to the target element itself; move/end/cancel
/// listeners attach document-wide so an in-flight drag keeps receiving
/// events after the pointer leaves the element's bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerScope {
    Target,
    Document,
}

/// A single listener registration request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerRegistration {
    pub scope: ListenerScope,
    pub modality: PointerModality,
    pub phase: PointerPhase,
    /// Passive listeners cannot suppress the runtime's default handling.
    /// Touch-move registrations are made non-passive when the unit intends
    /// to call [`PointerEvent::prevent_default`] on them.
    pub passive: bool,
}

impl ListenerRegistration {
    pub fn new(scope: ListenerScope, modality: PointerModality, phase: PointerPhase) -> Self {
        Self {
            scope,
            modality,
            phase,
            passive: true,
        }
    }

    pub fn non_passive(mut self) -> Self {
        self.passive = false;
        self
    }
}

/// Borrowed handle to the host element the unit is attached to.
pub trait DragElement {
    /// Registers a pointer listener and returns its removal handle.
    fn add_listener(
        &self,
        registration: ListenerRegistration,
        handler: PointerHandler,
    ) -> ListenerId;

    /// Removes a previously registered listener. Unknown ids are ignored.
    fn remove_listener(&self, id: ListenerId);

    /// Writes the element's transform style value.
    fn set_transform(&self, transform: &str);

    /// Writes the element's transition style value.
    fn set_transition(&self, transition: &str);
}
