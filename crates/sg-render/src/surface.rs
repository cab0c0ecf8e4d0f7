//! Overlay drawing surfaces.
//!
//! Guides go to a surface separate from the main content. The painter only
//! needs two operations from it: wipe everything, and stroke a straight
//! segment given in device pixels.

use kurbo::Point;
use sg_core::LineStyle;

/// An overlay the guide painter can draw on.
pub trait OverlaySurface {
    /// Remove everything previously drawn.
    fn clear(&mut self);

    /// Stroke the segment `from → to` (device pixels).
    fn stroke_line(&mut self, from: Point, to: Point, style: &LineStyle);
}

/// One recorded `stroke_line` call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedStroke {
    pub from: Point,
    pub to: Point,
    pub style: LineStyle,
}

/// A surface that remembers what is currently drawn on it.
///
/// Used by headless hosts and tests. `clear` empties `strokes`; `clears`
/// counts how often that happened.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub strokes: Vec<RecordedStroke>,
    pub clears: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        self.strokes.is_empty()
    }
}

impl OverlaySurface for RecordingSurface {
    fn clear(&mut self) {
        self.strokes.clear();
        self.clears += 1;
    }

    fn stroke_line(&mut self, from: Point, to: Point, style: &LineStyle) {
        self.strokes.push(RecordedStroke {
            from,
            to,
            style: style.clone(),
        });
    }
}
