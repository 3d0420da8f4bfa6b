//! Attach/detach lifecycle: listener registration, scoped release, and
//! configuration updates.

use dragkit::{
    DragConfig, DragDirection, Draggable, ListenerScope, Point, PointerModality, PointerPhase,
};
use dragkit_testing::{DragRobot, TestElement};

#[test]
fn attach_registers_the_full_listener_set() {
    let element = TestElement::new();
    let _handle = Draggable::attach(element.clone(), DragConfig::default());

    let registrations = element.registrations();
    assert_eq!(registrations.len(), 7);

    // Start listeners live on the target; move/end/cancel are
    // document-wide so the drag survives leaving the element's bounds.
    for registration in &registrations {
        let expected_scope = if registration.phase == PointerPhase::Start {
            ListenerScope::Target
        } else {
            ListenerScope::Document
        };
        assert_eq!(registration.scope, expected_scope, "{registration:?}");
    }

    let touch_moves: Vec<_> = registrations
        .iter()
        .filter(|r| r.modality == PointerModality::Touch && r.phase == PointerPhase::Move)
        .collect();
    assert_eq!(touch_moves.len(), 1);
    // Non-passive, because the default config prevents default on move.
    assert!(!touch_moves[0].passive);

    let cancels: Vec<_> = registrations
        .iter()
        .filter(|r| r.phase == PointerPhase::Cancel)
        .collect();
    assert_eq!(cancels.len(), 1);
    assert_eq!(cancels[0].modality, PointerModality::Touch);
}

#[test]
fn touch_move_is_passive_when_default_handling_is_kept() {
    let element = TestElement::new();
    let _handle = Draggable::attach(
        element.clone(),
        DragConfig::new().with_prevent_default_on_move(false),
    );

    let touch_move = element
        .registrations()
        .into_iter()
        .find(|r| r.modality == PointerModality::Touch && r.phase == PointerPhase::Move)
        .expect("touch move listener registered");
    assert!(touch_move.passive);
}

#[test]
fn disabled_modalities_register_no_listeners() {
    let element = TestElement::new();
    let _handle = Draggable::attach(element.clone(), DragConfig::new().with_touch(false));
    assert_eq!(element.listener_count(), 3);
    assert!(element
        .registrations()
        .iter()
        .all(|r| r.modality == PointerModality::Mouse));

    let element = TestElement::new();
    let _handle = Draggable::attach(
        element.clone(),
        DragConfig::new().with_touch(false).with_mouse(false),
    );
    assert_eq!(element.listener_count(), 0);
}

#[test]
fn detach_is_an_idempotent_scoped_release() {
    let element = TestElement::new();
    let handle = Draggable::attach(element.clone(), DragConfig::default());
    let robot = DragRobot::new(element.clone());

    handle.detach();
    assert_eq!(element.listener_count(), 0);

    handle.detach();
    assert_eq!(element.listener_count(), 0);

    // No residual listeners: input produces no position change.
    robot.mouse_drag((0.0, 0.0), (100.0, 100.0));
    assert_eq!(handle.position(), Point::ZERO);
}

#[test]
fn dropping_the_handle_detaches() {
    let element = TestElement::new();
    {
        let _handle = Draggable::attach(element.clone(), DragConfig::default());
        assert_eq!(element.listener_count(), 7);
    }
    assert_eq!(element.listener_count(), 0);
}

#[test]
fn update_config_resubscribes_only_for_subscription_fields() {
    let element = TestElement::new();
    let handle = Draggable::attach(element.clone(), DragConfig::default());
    assert_eq!(element.added_count(), 7);

    // Direction is not a subscription concern: listener set untouched.
    handle.update_config(DragConfig::new().with_direction(DragDirection::Vertical));
    assert_eq!(element.added_count(), 7);
    assert_eq!(element.removed_count(), 0);

    // Dropping a modality is: the old set goes, a mouse-only set arrives.
    handle.update_config(DragConfig::new().with_touch(false));
    assert_eq!(element.removed_count(), 7);
    assert_eq!(element.added_count(), 10);
    assert_eq!(element.listener_count(), 3);
}

#[test]
fn update_config_changes_behavior_without_restarting_the_gesture() {
    let element = TestElement::new();
    let handle = Draggable::attach(element.clone(), DragConfig::default());
    let robot = DragRobot::new(element.clone());

    robot.mouse_down(0.0, 0.0);
    robot.mouse_move(10.0, 10.0);
    assert_eq!(handle.position(), Point::new(10.0, 10.0));

    handle.update_config(DragConfig::new().with_direction(DragDirection::Vertical));
    assert!(handle.is_dragging());
    robot.mouse_move(50.0, 20.0);
    assert_eq!(handle.position(), Point::new(10.0, 20.0));
}

#[test]
fn set_position_after_detach_leaves_the_element_alone() {
    let element = TestElement::new();
    let handle = Draggable::attach(element.clone(), DragConfig::default());

    handle.set_position(Point::new(5.0, 5.0), None);
    let writes_before = element.transforms().len();

    handle.detach();
    handle.set_position(Point::new(10.0, 10.0), None);

    assert_eq!(handle.position(), Point::new(10.0, 10.0));
    assert_eq!(element.transforms().len(), writes_before);
}

#[test]
fn update_config_after_detach_is_ignored() {
    let element = TestElement::new();
    let handle = Draggable::attach(element.clone(), DragConfig::default());

    handle.detach();
    handle.update_config(DragConfig::new().with_touch(false));

    assert_eq!(element.listener_count(), 0);
    assert_eq!(element.added_count(), 7);
}
