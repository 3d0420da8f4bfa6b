use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dragkit::{AxisBounds, DragBounds, DragConfig, Draggable, StepSize};
use dragkit_testing::{DragRobot, TestElement};

/// Full per-move pipeline: dispatch, delta from anchor, step snap, bounds
/// clamp, commit. Transform mirroring is disabled so the bench measures the
/// pipeline rather than string formatting.
fn bench_move_pipeline(c: &mut Criterion) {
    let element = TestElement::new();
    let handle = Draggable::attach(
        element.clone(),
        DragConfig::new()
            .with_apply_transform(false)
            .with_step(StepSize::Uniform(8.0))
            .with_bounds(DragBounds::new(
                AxisBounds::new(-500.0, 500.0),
                AxisBounds::new(-500.0, 500.0),
            )),
    );
    let robot = DragRobot::new(element.clone());

    robot.mouse_down(0.0, 0.0);
    let mut x = 0.0f32;
    c.bench_function("move_pipeline", |b| {
        b.iter(|| {
            x = (x + 7.0) % 400.0;
            robot.mouse_move(black_box(x), black_box(x * 0.5));
            black_box(handle.position())
        })
    });
    robot.mouse_up(x, x * 0.5);
}

criterion_group!(benches, bench_move_pipeline);
criterion_main!(benches);
