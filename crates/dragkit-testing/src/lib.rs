//! Testing utilities and harness for Dragkit
//!
//! [`TestElement`] is an in-memory host element: it records listener
//! registrations and style writes, and dispatches synthetic pointer events
//! to whatever is attached. [`DragRobot`] scripts press/move/release
//! sequences against one.

mod element;
mod robot;

pub use element::TestElement;
pub use robot::DragRobot;
