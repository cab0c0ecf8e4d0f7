//! Position resolution: write a snap outcome back to the active object.

use crate::model::SceneObject;
use crate::snap::SnapOutcome;
use kurbo::Point;

/// The center the object should end up at. Axes without a snap keep the
/// current coordinate.
pub fn resolve_position(current: Point, outcome: &SnapOutcome) -> Point {
    Point::new(
        outcome.x.unwrap_or(current.x),
        outcome.y.unwrap_or(current.y),
    )
}

/// Move `object` to its resolved center. Returns `true` if it moved.
pub fn apply_snap<O: SceneObject + ?Sized>(object: &mut O, outcome: &SnapOutcome) -> bool {
    let current = object.center();
    let resolved = resolve_position(current, outcome);
    if resolved == current {
        return false;
    }
    log::debug!(
        "snap {} ({}, {}) -> ({}, {})",
        object.id(),
        current.x,
        current.y,
        resolved.x,
        resolved.y
    );
    object.set_center(resolved);
    true
}
