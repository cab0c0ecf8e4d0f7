//! Vello backend: guides as strokes in an overlay `Scene`.

use crate::surface::OverlaySurface;
use kurbo::{Affine, Line, Point, Stroke};
use peniko::Color;
use sg_core::LineStyle;
use vello::Scene;

impl OverlaySurface for Scene {
    fn clear(&mut self) {
        self.reset();
    }

    fn stroke_line(&mut self, from: Point, to: Point, style: &LineStyle) {
        let mut stroke = Stroke::new(style.width);
        if style.is_dashed() {
            stroke = stroke.with_dashes(0.0, style.dash.iter().copied());
        }
        let [r, g, b, a] = style.color.to_rgba8();
        let color = Color::from_rgba8(r, g, b, a);
        self.stroke(&stroke, Affine::IDENTITY, color, None, &Line::new(from, to));
    }
}
