//! Scene objects as seen by the guide engine.
//!
//! The host canvas owns its objects. The engine only needs identity, the
//! logical center (the position anchor), the screen-space bounding box, and
//! a way to move the active object's center. `SceneShape` is a ready-made
//! implementation for hosts that don't carry their own object model.

use crate::geometry::ViewportTransform;
use crate::id::ObjectId;
use kurbo::{Affine, Point, Rect};
use serde::{Deserialize, Serialize};

/// A manipulable object on the host canvas.
pub trait SceneObject {
    fn id(&self) -> ObjectId;

    /// Logical center. This is the anchor snapping writes back through
    /// [`set_center`](Self::set_center).
    fn center(&self) -> Point;

    /// Axis-aligned bounding box of the rotated/scaled object, in device
    /// coordinates under `viewport`.
    fn bounding_rect(&self, viewport: &ViewportTransform) -> Rect;

    fn set_center(&mut self, center: Point);
}

/// A rectangle-like shape positioned by its center, with rotation and scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneShape {
    pub id: ObjectId,
    pub center: Point,
    /// Unscaled width.
    pub width: f64,
    /// Unscaled height.
    pub height: f64,
    /// Rotation in degrees, clockwise in a y-down canvas.
    #[serde(default)]
    pub angle: f64,
    #[serde(default = "unit_scale")]
    pub scale_x: f64,
    #[serde(default = "unit_scale")]
    pub scale_y: f64,
}

fn unit_scale() -> f64 {
    1.0
}

impl SceneShape {
    pub fn new(id: ObjectId, center: Point, width: f64, height: f64) -> Self {
        Self {
            id,
            center,
            width,
            height,
            angle: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Logical → device transform of this shape's local frame.
    pub fn transform(&self, viewport: &ViewportTransform) -> Affine {
        viewport.to_affine()
            * Affine::translate(self.center.to_vec2())
            * Affine::rotate(self.angle.to_radians())
            * Affine::scale_non_uniform(self.scale_x, self.scale_y)
    }
}

impl SceneObject for SceneShape {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn center(&self) -> Point {
        self.center
    }

    fn bounding_rect(&self, viewport: &ViewportTransform) -> Rect {
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        self.transform(viewport)
            .transform_rect_bbox(Rect::new(-hw, -hh, hw, hh))
    }

    fn set_center(&mut self, center: Point) {
        self.center = center;
    }
}
