//! Drag behavior configuration.
//!
//! [`DragConfig`] is fully populated: `Default` is the explicit default
//! table and the `with_*` builders overlay caller choices once, before
//! attach. The behavior unit never consults partial or optional fields
//! afterwards.

use crate::draggable::PositionSetter;
use crate::element::DragElement;
use dragkit_geometry::{clamp, nearest_step, Axis, Point};
use std::fmt;
use std::rc::Rc;

/// Which axes a drag is allowed to move the element on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragDirection {
    /// Movement on x only; y stays at its carried value.
    Horizontal,
    /// Movement on y only; x stays at its carried value.
    Vertical,
    Both,
}

/// Inclusive travel limits for one axis, relative to the element's origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    pub min: f32,
    pub max: f32,
}

impl AxisBounds {
    pub const UNBOUNDED: Self = Self {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Per-axis travel limits applied to every accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DragBounds {
    pub x: AxisBounds,
    pub y: AxisBounds,
}

impl DragBounds {
    pub const UNBOUNDED: Self = Self {
        x: AxisBounds::UNBOUNDED,
        y: AxisBounds::UNBOUNDED,
    };

    pub const fn new(x: AxisBounds, y: AxisBounds) -> Self {
        Self { x, y }
    }

    /// Limits on x only.
    pub const fn horizontal(min: f32, max: f32) -> Self {
        Self {
            x: AxisBounds::new(min, max),
            y: AxisBounds::UNBOUNDED,
        }
    }

    /// Limits on y only.
    pub const fn vertical(min: f32, max: f32) -> Self {
        Self {
            x: AxisBounds::UNBOUNDED,
            y: AxisBounds::new(min, max),
        }
    }

    /// Clamps each coordinate into its axis range.
    pub fn clamp(&self, position: Point) -> Point {
        Point::new(
            clamp(position.x, self.x.min, self.x.max),
            clamp(position.y, self.y.min, self.y.max),
        )
    }
}

/// Quantization increment applied to committed positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepSize {
    Disabled,
    Uniform(f32),
    PerAxis { x: f32, y: f32 },
}

impl StepSize {
    /// The effective step for one axis, or `None` when quantization is off.
    /// Non-positive steps behave as `Disabled`.
    pub fn for_axis(self, axis: Axis) -> Option<f32> {
        let step = match self {
            StepSize::Disabled => return None,
            StepSize::Uniform(step) => step,
            StepSize::PerAxis { x, y } => match axis {
                Axis::X => x,
                Axis::Y => y,
            },
        };
        (step > 0.0).then_some(step)
    }

    /// Snaps each coordinate to its axis step, where one is configured.
    pub fn apply(self, position: Point) -> Point {
        let mut snapped = position;
        for axis in Axis::BOTH {
            if let Some(step) = self.for_axis(axis) {
                snapped = snapped.with_axis(axis, nearest_step(position.axis(axis), step));
            }
        }
        snapped
    }
}

impl Default for StepSize {
    fn default() -> Self {
        StepSize::Disabled
    }
}

/// Lifecycle callback: receives the element handle, the position the event
/// produced, and a setter the callback may use to override it.
pub type DragCallback = Rc<dyn Fn(&Rc<dyn DragElement>, Point, &PositionSetter)>;

#[derive(Clone)]
pub struct DragConfig {
    /// Suppress the runtime's default handling during accepted move events.
    pub prevent_default_on_move: bool,
    /// Listen for touch events.
    pub touch: bool,
    /// Listen for mouse events.
    pub mouse: bool,
    pub direction: DragDirection,
    /// Mirror the position onto the element as a `translate3d` transform.
    pub apply_transform: bool,
    pub bounds: DragBounds,
    pub step: StepSize,
    pub on_start: Option<DragCallback>,
    pub on_move: Option<DragCallback>,
    pub on_end: Option<DragCallback>,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            prevent_default_on_move: true,
            touch: true,
            mouse: true,
            direction: DragDirection::Both,
            apply_transform: true,
            bounds: DragBounds::UNBOUNDED,
            step: StepSize::Disabled,
            on_start: None,
            on_move: None,
            on_end: None,
        }
    }
}

impl DragConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prevent_default_on_move(mut self, prevent: bool) -> Self {
        self.prevent_default_on_move = prevent;
        self
    }

    pub fn with_touch(mut self, touch: bool) -> Self {
        self.touch = touch;
        self
    }

    pub fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    pub fn with_direction(mut self, direction: DragDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_apply_transform(mut self, apply: bool) -> Self {
        self.apply_transform = apply;
        self
    }

    pub fn with_bounds(mut self, bounds: DragBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_step(mut self, step: StepSize) -> Self {
        self.step = step;
        self
    }

    pub fn with_on_start<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Rc<dyn DragElement>, Point, &PositionSetter) + 'static,
    {
        self.on_start = Some(Rc::new(callback));
        self
    }

    pub fn with_on_move<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Rc<dyn DragElement>, Point, &PositionSetter) + 'static,
    {
        self.on_move = Some(Rc::new(callback));
        self
    }

    pub fn with_on_end<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Rc<dyn DragElement>, Point, &PositionSetter) + 'static,
    {
        self.on_end = Some(Rc::new(callback));
        self
    }

    /// True when `other` would produce the same listener registrations.
    /// Changing any other field takes effect without re-subscribing.
    pub(crate) fn subscription_eq(&self, other: &Self) -> bool {
        self.touch == other.touch
            && self.mouse == other.mouse
            && self.prevent_default_on_move == other.prevent_default_on_move
    }
}

impl fmt::Debug for DragConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragConfig")
            .field("prevent_default_on_move", &self.prevent_default_on_move)
            .field("touch", &self.touch)
            .field("mouse", &self.mouse)
            .field("direction", &self.direction)
            .field("apply_transform", &self.apply_transform)
            .field("bounds", &self.bounds)
            .field("step", &self.step)
            .field("on_start", &self.on_start.is_some())
            .field("on_move", &self.on_move.is_some())
            .field("on_end", &self.on_end.is_some())
            .finish()
    }
}
