//! Style-string formatting for the visual side-channel.

use dragkit_geometry::Point;

/// Formats the transform applied to dragged elements:
/// `translate3d(<x>px, <y>px, 0)`. The 3D form keeps the element on its
/// own compositing layer in hosts that honor it.
pub fn translate3d(position: Point) -> String {
    format!("translate3d({}px, {}px, 0)", position.x, position.y)
}
