//! Tagged pointer events produced by host adapters.
//!
//! Host runtimes translate their native mouse/touch objects into this one
//! variant at the boundary, so everything downstream dispatches on the
//! modality tag instead of downcasting runtime event types.

use dragkit_geometry::Point;
use std::cell::Cell;
use std::rc::Rc;

/// The input device class an event originates from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerModality {
    Mouse,
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary = 0,
    Secondary = 1,
    Middle = 2,
    Back = 3,
    Forward = 4,
}

/// Pointer event with default-handling suppression tracking.
///
/// The `default_prevented` flag is shared across clones via `Rc<Cell>` so a
/// handler can mark it during dispatch and the adapter that produced the
/// event still observes the mark afterwards (and can then suppress the
/// runtime's own handling, e.g. page scrolling during a touch drag).
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub modality: PointerModality,
    pub phase: PointerPhase,
    /// Pointer coordinate in the host's client space.
    pub position: Point,
    /// Mouse only; touch events carry no button.
    pub button: Option<PointerButton>,
    default_prevented: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn mouse(phase: PointerPhase, position: Point, button: PointerButton) -> Self {
        Self::new(PointerModality::Mouse, phase, position, Some(button))
    }

    pub fn touch(phase: PointerPhase, position: Point) -> Self {
        Self::new(PointerModality::Touch, phase, position, None)
    }

    fn new(
        modality: PointerModality,
        phase: PointerPhase,
        position: Point,
        button: Option<PointerButton>,
    ) -> Self {
        Self {
            modality,
            phase,
            position,
            button,
            default_prevented: Rc::new(Cell::new(false)),
        }
    }

    /// Marks the event so the producing adapter suppresses the runtime's
    /// default handling. Only meaningful when the adapter registered the
    /// listener as non-passive.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}
