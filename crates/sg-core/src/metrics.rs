//! Object metrics: center, half-extents, and corners in logical units.

use crate::geometry::ViewportTransform;
use crate::model::SceneObject;
use kurbo::Point;

/// Unit offsets of the four corners from the center, clockwise from
/// top-left: TL, TR, BR, BL.
pub const CORNER_SIGNS: [(f64, f64); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

/// Geometry of one object for a single snap pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectMetrics {
    pub center: Point,
    pub half_width: f64,
    pub half_height: f64,
    /// TL, TR, BR, BL. See [`CORNER_SIGNS`].
    pub corners: [Point; 4],
}

impl ObjectMetrics {
    pub fn new(center: Point, half_width: f64, half_height: f64) -> Self {
        let corners = CORNER_SIGNS
            .map(|(sx, sy)| Point::new(center.x + sx * half_width, center.y + sy * half_height));
        Self {
            center,
            half_width,
            half_height,
            corners,
        }
    }

    /// Measure `object` under `viewport`.
    ///
    /// The bounding box comes back in device pixels and is divided by the
    /// viewport scale, so the result is zoom-independent. For rotated objects
    /// the box edges are the rotated box's extents, not the shape's own edges.
    ///
    /// Returns `None` on a degenerate viewport.
    pub fn measure<O: SceneObject + ?Sized>(object: &O, viewport: &ViewportTransform) -> Option<Self> {
        if viewport.is_degenerate() {
            return None;
        }
        let rect = object.bounding_rect(viewport);
        let width = rect.width() / viewport.scale_x;
        let height = rect.height() / viewport.scale_y;
        Some(Self::new(object.center(), width.abs() / 2.0, height.abs() / 2.0))
    }

    pub fn left(&self) -> f64 {
        self.center.x - self.half_width
    }

    pub fn right(&self) -> f64 {
        self.center.x + self.half_width
    }

    pub fn top(&self) -> f64 {
        self.center.y - self.half_height
    }

    pub fn bottom(&self) -> f64 {
        self.center.y + self.half_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ObjectId;
    use crate::model::SceneShape;
    use pretty_assertions::assert_eq;

    #[test]
    fn corners_run_clockwise_from_top_left() {
        let m = ObjectMetrics::new(Point::new(100.0, 100.0), 20.0, 15.0);
        assert_eq!(
            m.corners,
            [
                Point::new(80.0, 85.0),
                Point::new(120.0, 85.0),
                Point::new(120.0, 115.0),
                Point::new(80.0, 115.0),
            ]
        );
        assert_eq!((m.left(), m.right(), m.top(), m.bottom()), (80.0, 120.0, 85.0, 115.0));
    }

    #[test]
    fn zoom_does_not_change_logical_extents() {
        let shape = SceneShape::new(ObjectId::intern("zoomed"), Point::new(50.0, 60.0), 40.0, 30.0);
        let plain = ObjectMetrics::measure(&shape, &ViewportTransform::IDENTITY).unwrap();
        let zoomed = ObjectMetrics::measure(&shape, &ViewportTransform::new(2.5, 40.0, -10.0)).unwrap();
        assert_eq!(plain.center, zoomed.center);
        assert!((plain.half_width - zoomed.half_width).abs() < 1e-9);
        assert!((plain.half_height - zoomed.half_height).abs() < 1e-9);
        assert!((plain.half_width - 20.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_viewport_yields_nothing() {
        let shape = SceneShape::new(ObjectId::intern("flat"), Point::ZERO, 10.0, 10.0);
        assert_eq!(ObjectMetrics::measure(&shape, &ViewportTransform::new(0.0, 0.0, 0.0)), None);
    }
}
