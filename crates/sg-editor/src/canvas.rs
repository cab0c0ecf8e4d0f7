//! The host canvas contract.
//!
//! The guide coordinator never owns objects or surfaces. It talks to the
//! host through [`Canvas`]: enumerate objects, move the active one, read the
//! viewport, draw on the overlay, and ask for a repaint.

use crate::events::{CanvasEvent, EventHub, dispatch};
use kurbo::Size;
use sg_core::{ObjectId, SceneObject, ViewportTransform};
use sg_render::OverlaySurface;

/// A canvas that can host aligning guidelines.
pub trait Canvas: Sized + 'static {
    type Object: SceneObject;

    /// All objects, in the host's enumeration order. Snap candidates are
    /// visited in this order.
    fn objects(&self) -> impl Iterator<Item = &Self::Object>;

    fn object_mut(&mut self, id: ObjectId) -> Option<&mut Self::Object>;

    /// Current logical → device transform.
    fn viewport_transform(&self) -> ViewportTransform;

    fn zoom(&self) -> f64;

    /// Size of the drawing surface in device pixels.
    fn size(&self) -> Size;

    /// True while an object transform (drag, scale, rotate) is in progress.
    fn has_current_transform(&self) -> bool;

    /// The guide overlay, separate from the main content surface.
    fn overlay(&mut self) -> &mut dyn OverlaySurface;

    /// Schedule a repaint. Hosts must not paint synchronously when this is
    /// called from inside an event handler.
    fn request_render(&mut self);

    fn events(&mut self) -> &mut EventHub<Self>;

    /// Run every handler subscribed to `event`.
    fn fire(&mut self, event: CanvasEvent) {
        let handlers = self.events().handlers_for(event.kind());
        dispatch(handlers, self, &event);
    }
}
