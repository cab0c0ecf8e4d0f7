//! Alignment matches, cross marks, and the per-frame render queue.

use kurbo::Point;

/// Orientation of a guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuideAxis {
    /// Line of constant x. Produced by an x snap.
    Vertical,
    /// Line of constant y. Produced by a y snap.
    Horizontal,
}

/// Which relation produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    Center,
    Edge,
    Corner,
    CornerToCenter,
    CanvasCenter,
}

/// A guide line to draw, in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentMatch {
    pub axis: GuideAxis,
    pub kind: MatchKind,
    /// x for vertical lines, y for horizontal ones.
    pub coordinate: f64,
    /// Always `<= extent_end`.
    pub extent_start: f64,
    pub extent_end: f64,
}

impl AlignmentMatch {
    pub fn vertical(kind: MatchKind, x: f64, y0: f64, y1: f64) -> Self {
        Self {
            axis: GuideAxis::Vertical,
            kind,
            coordinate: x,
            extent_start: y0.min(y1),
            extent_end: y0.max(y1),
        }
    }

    pub fn horizontal(kind: MatchKind, y: f64, x0: f64, x1: f64) -> Self {
        Self {
            axis: GuideAxis::Horizontal,
            kind,
            coordinate: y,
            extent_start: x0.min(x1),
            extent_end: x0.max(x1),
        }
    }

    /// Line endpoints in logical coordinates.
    pub fn endpoints(&self) -> (Point, Point) {
        match self.axis {
            GuideAxis::Vertical => (
                Point::new(self.coordinate, self.extent_start),
                Point::new(self.coordinate, self.extent_end),
            ),
            GuideAxis::Horizontal => (
                Point::new(self.extent_start, self.coordinate),
                Point::new(self.extent_end, self.coordinate),
            ),
        }
    }
}

/// A point where an x snap and a y snap coincide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossMark {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for CrossMark {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Guides waiting for the next paint pass.
#[derive(Debug, Clone, Default)]
pub struct RenderQueue {
    pub matches: Vec<AlignmentMatch>,
    pub crosses: Vec<CrossMark>,
}

impl RenderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop whatever is pending and queue the given guides instead.
    pub fn replace(&mut self, matches: &[AlignmentMatch], crosses: &[CrossMark]) {
        self.clear();
        self.matches.extend_from_slice(matches);
        self.crosses.extend_from_slice(crosses);
    }

    pub fn clear(&mut self) {
        self.matches.clear();
        self.crosses.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty() && self.crosses.is_empty()
    }
}
