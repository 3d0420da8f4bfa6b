//! Scripted pointer sequences against a [`TestElement`].

use crate::TestElement;
use dragkit::{PointerButton, PointerEvent, PointerPhase};
use dragkit_geometry::Point;
use std::rc::Rc;

/// Drives one pointer at a time through press/move/release sequences, the
/// way a user (or an end-to-end runner) would.
pub struct DragRobot {
    element: Rc<TestElement>,
}

impl DragRobot {
    pub fn new(element: Rc<TestElement>) -> Self {
        Self { element }
    }

    pub fn mouse_down(&self, x: f32, y: f32) -> bool {
        self.mouse_down_with(PointerButton::Primary, x, y)
    }

    pub fn mouse_down_with(&self, button: PointerButton, x: f32, y: f32) -> bool {
        self.element.dispatch(&PointerEvent::mouse(
            PointerPhase::Start,
            Point::new(x, y),
            button,
        ))
    }

    pub fn mouse_move(&self, x: f32, y: f32) -> bool {
        self.mouse_move_with(PointerButton::Primary, x, y)
    }

    pub fn mouse_move_with(&self, button: PointerButton, x: f32, y: f32) -> bool {
        self.element.dispatch(&PointerEvent::mouse(
            PointerPhase::Move,
            Point::new(x, y),
            button,
        ))
    }

    pub fn mouse_up(&self, x: f32, y: f32) -> bool {
        self.element.dispatch(&PointerEvent::mouse(
            PointerPhase::End,
            Point::new(x, y),
            PointerButton::Primary,
        ))
    }

    /// Press, move in a straight line, release.
    pub fn mouse_drag(&self, from: (f32, f32), to: (f32, f32)) {
        self.mouse_down(from.0, from.1);
        self.mouse_move(to.0, to.1);
        self.mouse_up(to.0, to.1);
    }

    pub fn touch_start(&self, x: f32, y: f32) -> bool {
        self.element
            .dispatch(&PointerEvent::touch(PointerPhase::Start, Point::new(x, y)))
    }

    pub fn touch_move(&self, x: f32, y: f32) -> bool {
        self.element
            .dispatch(&PointerEvent::touch(PointerPhase::Move, Point::new(x, y)))
    }

    pub fn touch_end(&self, x: f32, y: f32) -> bool {
        self.element
            .dispatch(&PointerEvent::touch(PointerPhase::End, Point::new(x, y)))
    }

    pub fn touch_cancel(&self, x: f32, y: f32) -> bool {
        self.element
            .dispatch(&PointerEvent::touch(PointerPhase::Cancel, Point::new(x, y)))
    }

    /// Press, move through each waypoint, release at the last one.
    pub fn touch_drag(&self, from: (f32, f32), waypoints: &[(f32, f32)]) {
        self.touch_start(from.0, from.1);
        let mut last = from;
        for waypoint in waypoints {
            self.touch_move(waypoint.0, waypoint.1);
            last = *waypoint;
        }
        self.touch_end(last.0, last.1);
    }
}
