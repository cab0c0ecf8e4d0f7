//! A self-contained canvas host built on [`SceneShape`]s.
//!
//! Plays the role a UI framework normally does: turns pointer input into
//! gesture and transform events and runs the two-phase paint. Renders
//! requested while an event is being dispatched are deferred until the
//! dispatch returns.

use crate::canvas::Canvas;
use crate::events::{CanvasEvent, EventHub};
use kurbo::{Point, Size};
use sg_core::{ObjectId, SceneShape, ViewportTransform};
use sg_render::OverlaySurface;

pub struct SceneCanvas<S: OverlaySurface> {
    objects: Vec<SceneShape>,
    viewport: ViewportTransform,
    size: Size,
    overlay: S,
    events: EventHub<Self>,
    /// Object under transform, set between pointer down and pointer up.
    current: Option<ObjectId>,
    render_pending: bool,
}

impl<S: OverlaySurface + 'static> SceneCanvas<S> {
    pub fn new(size: Size, overlay: S) -> Self {
        Self {
            objects: Vec::new(),
            viewport: ViewportTransform::IDENTITY,
            size,
            overlay,
            events: EventHub::new(),
            current: None,
            render_pending: false,
        }
    }

    /// Add a shape on top of the existing ones. A shape with an id already on
    /// the canvas replaces it in place.
    pub fn add(&mut self, shape: SceneShape) {
        match self.objects.iter_mut().find(|o| o.id == shape.id) {
            Some(existing) => *existing = shape,
            None => self.objects.push(shape),
        }
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<SceneShape> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(index))
    }

    pub fn shape(&self, id: ObjectId) -> Option<&SceneShape> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn shapes(&self) -> &[SceneShape] {
        &self.objects
    }

    pub fn set_viewport(&mut self, viewport: ViewportTransform) {
        self.viewport = viewport;
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn surface(&self) -> &S {
        &self.overlay
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.overlay
    }

    pub fn current(&self) -> Option<ObjectId> {
        self.current
    }

    /// Set the object under transform without firing anything.
    pub fn set_current(&mut self, id: Option<ObjectId>) {
        self.current = id.filter(|id| self.shape(*id).is_some());
    }

    pub fn render_pending(&self) -> bool {
        self.render_pending
    }

    // ─── Input ───────────────────────────────────────────────────────────

    /// Pointer pressed, optionally on an object. Starts a gesture.
    pub fn pointer_down(&mut self, target: Option<ObjectId>) {
        self.set_current(target);
        self.fire(CanvasEvent::GestureStart);
        self.flush_render();
    }

    /// Drag the current object so its center is at `center`. Returns the
    /// center after snapping, or `None` when nothing is being transformed.
    pub fn drag_to(&mut self, center: Point) -> Option<Point> {
        self.transform_current(
            |shape| shape.center = center,
            |target| CanvasEvent::ObjectMoving { target },
        )
    }

    /// Set the scale factors of the current object.
    pub fn scale_to(&mut self, scale_x: f64, scale_y: f64) -> Option<Point> {
        self.transform_current(
            |shape| {
                shape.scale_x = scale_x;
                shape.scale_y = scale_y;
            },
            |target| CanvasEvent::ObjectScaling { target },
        )
    }

    /// Set the rotation of the current object, in degrees.
    pub fn rotate_to(&mut self, angle: f64) -> Option<Point> {
        self.transform_current(
            |shape| shape.angle = angle,
            |target| CanvasEvent::ObjectRotating { target },
        )
    }

    /// Pointer released. Ends the gesture.
    pub fn pointer_up(&mut self) {
        self.fire(CanvasEvent::GestureEnd);
        self.current = None;
        self.flush_render();
    }

    // ─── Paint ───────────────────────────────────────────────────────────

    /// Run a paint pass: before-render, then after-render.
    pub fn render(&mut self) {
        self.render_pending = false;
        self.fire(CanvasEvent::BeforeRender);
        self.fire(CanvasEvent::AfterRender);
    }

    fn flush_render(&mut self) {
        if self.render_pending {
            self.render();
        }
    }

    fn transform_current(
        &mut self,
        edit: impl FnOnce(&mut SceneShape),
        event: impl FnOnce(ObjectId) -> CanvasEvent,
    ) -> Option<Point> {
        let target = self.current?;
        edit(self.object_mut(target)?);
        self.fire(event(target));
        // Transforms repaint right away.
        self.render_pending = true;
        self.flush_render();
        self.shape(target).map(|shape| shape.center)
    }
}

impl<S: OverlaySurface + 'static> Canvas for SceneCanvas<S> {
    type Object = SceneShape;

    fn objects(&self) -> impl Iterator<Item = &SceneShape> {
        self.objects.iter()
    }

    fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneShape> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    fn viewport_transform(&self) -> ViewportTransform {
        self.viewport
    }

    fn zoom(&self) -> f64 {
        self.viewport.scale_x
    }

    fn size(&self) -> Size {
        self.size
    }

    fn has_current_transform(&self) -> bool {
        self.current.is_some()
    }

    fn overlay(&mut self) -> &mut dyn OverlaySurface {
        &mut self.overlay
    }

    fn request_render(&mut self) {
        self.render_pending = true;
    }

    fn events(&mut self) -> &mut EventHub<Self> {
        &mut self.events
    }
}
