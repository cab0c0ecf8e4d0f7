//! WASM bridge for SG — exposes aligning guidelines to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page owns the main
//! canvas and its drawing; this side owns the shapes' geometry, snaps them
//! while they are dragged, and paints guides on an overlay canvas.

mod overlay2d;

pub use overlay2d::Canvas2dOverlay;

use sg_core::{GuideConfig, ObjectId, Point, SceneShape, Size, ViewportTransform};
use sg_editor::{Canvas, EventHub, SceneCanvas, init_aligning_guidelines};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The WASM-facing canvas controller.
///
/// Positions cross the boundary as `[x, y]` arrays in logical coordinates.
#[wasm_bindgen]
pub struct GuideCanvas {
    canvas: SceneCanvas<Canvas2dOverlay>,
}

#[wasm_bindgen]
impl GuideCanvas {
    /// Create a controller for a canvas of `width × height` device pixels,
    /// with the default guide configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        console_error_panic_hook_setup();

        let mut canvas = SceneCanvas::new(Size::new(width, height), Canvas2dOverlay::new());
        init_aligning_guidelines(&mut canvas, GuideConfig::default());
        Self { canvas }
    }

    /// Replace the guide configuration with a JSON document. Missing fields
    /// take their defaults. Returns `false` (and keeps the old configuration)
    /// when the document doesn't parse.
    pub fn set_config(&mut self, json: &str) -> bool {
        match GuideConfig::from_json(json) {
            Ok(config) => {
                // The hub only carries the guide subscriptions.
                *self.canvas.events() = EventHub::new();
                init_aligning_guidelines(&mut self.canvas, config);
                true
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("SG config: {e}").into());
                false
            }
        }
    }

    /// Attach the overlay canvas context guides are painted on.
    pub fn set_overlay(&mut self, ctx: CanvasRenderingContext2d) {
        self.canvas.surface_mut().attach(ctx);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_size(Size::new(width, height));
    }

    /// Add or replace a rectangle-like shape. `angle` is in degrees.
    pub fn add_shape(&mut self, id: &str, cx: f64, cy: f64, width: f64, height: f64, angle: f64) {
        let mut shape = SceneShape::new(ObjectId::intern(id), Point::new(cx, cy), width, height);
        shape.angle = angle;
        self.canvas.add(shape);
    }

    pub fn remove_shape(&mut self, id: &str) -> bool {
        ObjectId::lookup(id)
            .and_then(|id| self.canvas.remove(id))
            .is_some()
    }

    /// Uniform zoom and pan (device pixels).
    pub fn set_viewport(&mut self, zoom: f64, pan_x: f64, pan_y: f64) {
        self.canvas.set_viewport(ViewportTransform::new(zoom, pan_x, pan_y));
    }

    /// Viewport from a Canvas2D/SVG matrix `[a, b, c, d, e, f]`.
    pub fn set_viewport_matrix(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        self.canvas
            .set_viewport(ViewportTransform::from_matrix([a, b, c, d, e, f]));
    }

    // ─── Gestures ────────────────────────────────────────────────────────

    /// Pointer pressed, on the shape `id` or on empty canvas.
    pub fn pointer_down(&mut self, id: Option<String>) {
        self.canvas.pointer_down(id.as_deref().and_then(ObjectId::lookup));
    }

    /// Drag the pressed shape. Returns its snapped center.
    pub fn object_moving(&mut self, cx: f64, cy: f64) -> Option<Vec<f64>> {
        self.canvas.drag_to(Point::new(cx, cy)).map(to_pair)
    }

    pub fn object_scaling(&mut self, scale_x: f64, scale_y: f64) -> Option<Vec<f64>> {
        self.canvas.scale_to(scale_x, scale_y).map(to_pair)
    }

    /// Rotate the pressed shape to `angle` degrees.
    pub fn object_rotating(&mut self, angle: f64) -> Option<Vec<f64>> {
        self.canvas.rotate_to(angle).map(to_pair)
    }

    pub fn pointer_up(&mut self) {
        self.canvas.pointer_up();
    }

    // ─── Paint ───────────────────────────────────────────────────────────

    /// Run a paint pass on `ctx`: clear the overlay, then draw pending guides.
    pub fn render(&mut self, ctx: &CanvasRenderingContext2d) {
        self.canvas.surface_mut().attach(ctx.clone());
        self.canvas.render();
    }

    pub fn shape_center(&self, id: &str) -> Option<Vec<f64>> {
        let shape = self.canvas.shape(ObjectId::lookup(id)?)?;
        Some(to_pair(shape.center))
    }

    pub fn shape_count(&self) -> usize {
        self.canvas.shapes().len()
    }
}

fn to_pair(p: Point) -> Vec<f64> {
    vec![p.x, p.y]
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("SG WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
