//! Headless version of the classic demo: one draggable element and a second
//! element mirroring its position with the sign flipped.
//!
//! A real host would implement `DragElement` over its UI runtime; here the
//! in-memory test element stands in and a robot plays the user.

use dragkit::{DragConfig, Draggable};
use dragkit_testing::{DragRobot, TestElement};

fn main() {
    let element = TestElement::new();
    let handle = Draggable::attach(element.clone(), DragConfig::default());

    handle.watch_position(|position| {
        println!(
            "dragged to ({:>5.1}, {:>5.1})   reflected at translate({}px, {}px)",
            position.x, position.y, -position.x, -position.y
        );
    });

    let robot = DragRobot::new(element.clone());
    robot.mouse_down(10.0, 10.0);
    for step in 1..=5 {
        let step = step as f32;
        robot.mouse_move(10.0 + step * 8.0, 10.0 + step * 4.0);
    }
    robot.mouse_up(50.0, 30.0);

    println!(
        "final position {:?}, element transform {:?}",
        handle.position(),
        element.last_transform()
    );
}
