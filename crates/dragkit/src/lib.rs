//! Drag-interaction behavior for a single visual element.
//!
//! The host hands [`Draggable::attach`] an element handle and a
//! [`DragConfig`]; the unit registers pointer listeners through the handle
//! and converts raw mouse/touch deltas into a bounded, optionally quantized
//! 2D position. The position is readable (and watchable) on the returned
//! [`DragHandle`], and is mirrored onto the element as a
//! `translate3d(..)` transform unless that is disabled.
//!
//! Hosts adapt their runtime's native events into [`PointerEvent`] values at
//! the boundary; everything past the adapter is runtime-agnostic.

pub mod config;
pub mod draggable;
pub mod element;
pub mod event;
pub mod style;

pub use config::*;
pub use draggable::*;
pub use element::*;
pub use event::*;
pub use style::*;

pub use dragkit_geometry::{clamp, nearest_step, Axis, Point};

pub mod prelude {
    pub use crate::config::{AxisBounds, DragBounds, DragConfig, DragDirection, StepSize};
    pub use crate::draggable::{DragHandle, Draggable, PositionSetter};
    pub use crate::element::{
        DragElement, ListenerId, ListenerRegistration, ListenerScope, PointerHandler,
    };
    pub use crate::event::{PointerButton, PointerEvent, PointerModality, PointerPhase};
    pub use dragkit_geometry::prelude::*;
}
