//! Canvas2D overlay surface.
//!
//! The overlay is a second `<canvas>` stacked above the main one. Guides are
//! drawn in its pixel space; the context transform is left alone.

use kurbo::Point;
use sg_core::LineStyle;
use sg_render::OverlaySurface;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// [`OverlaySurface`] over a 2D context. Draws nothing until a context is
/// attached.
#[derive(Debug, Default)]
pub struct Canvas2dOverlay {
    ctx: Option<CanvasRenderingContext2d>,
}

impl Canvas2dOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, ctx: CanvasRenderingContext2d) {
        self.ctx = Some(ctx);
    }
}

impl OverlaySurface for Canvas2dOverlay {
    fn clear(&mut self) {
        let Some(ctx) = &self.ctx else {
            return;
        };
        let Some(canvas) = ctx.canvas() else {
            return;
        };
        ctx.save();
        let _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        ctx.restore();
    }

    fn stroke_line(&mut self, from: Point, to: Point, style: &LineStyle) {
        let Some(ctx) = &self.ctx else {
            return;
        };
        ctx.save();
        ctx.set_line_width(style.width);
        ctx.set_stroke_style_str(&style.color.to_css());
        let dash: js_sys::Array = style.dash.iter().map(|&d| JsValue::from_f64(d)).collect();
        if let Err(e) = ctx.set_line_dash(&dash) {
            log::warn!("set_line_dash rejected {:?}: {e:?}", style.dash);
        }
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.stroke();
        ctx.restore();
    }
}
