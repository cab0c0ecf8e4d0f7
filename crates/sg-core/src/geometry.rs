//! Coordinate spaces and the rounded range tests used by the snap detector.
//!
//! Logical coordinates are what scene objects store. Device coordinates are
//! what lands on the overlay surface: `device = logical * zoom + pan`.

use kurbo::{Affine, Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Scale factors below this are treated as a collapsed viewport.
pub const MIN_SCALE: f64 = 1e-9;

// ─── Viewport transform ──────────────────────────────────────────────────

/// Logical → device transform of the host canvas (zoom + pan, no skew).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewportTransform {
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Uniform zoom with a pan offset in device pixels.
    pub fn new(zoom: f64, pan_x: f64, pan_y: f64) -> Self {
        Self {
            scale_x: zoom,
            scale_y: zoom,
            translate_x: pan_x,
            translate_y: pan_y,
        }
    }

    /// Read a 2D matrix `[a, b, c, d, e, f]` (Canvas2D / SVG order). The skew
    /// terms `b` and `c` are ignored.
    pub fn from_matrix(m: [f64; 6]) -> Self {
        Self {
            scale_x: m[0],
            scale_y: m[3],
            translate_x: m[4],
            translate_y: m[5],
        }
    }

    pub fn to_affine(&self) -> Affine {
        Affine::new([
            self.scale_x,
            0.0,
            0.0,
            self.scale_y,
            self.translate_x,
            self.translate_y,
        ])
    }

    /// True when either scale factor is zero, near-zero, or not finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.scale_x.is_finite() && self.scale_y.is_finite())
            || self.scale_x.abs() < MIN_SCALE
            || self.scale_y.abs() < MIN_SCALE
    }

    /// Device → logical. `None` on a degenerate viewport.
    pub fn to_logical(&self, device: Point) -> Option<Point> {
        if self.is_degenerate() {
            return None;
        }
        Some(Point::new(
            (device.x - self.translate_x) / self.scale_x,
            (device.y - self.translate_y) / self.scale_y,
        ))
    }
}

/// Viewport state captured at gesture start and held for the whole gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSnapshot {
    pub transform: ViewportTransform,
    pub zoom: f64,
}

impl ViewportSnapshot {
    pub fn new(transform: ViewportTransform, zoom: f64) -> Self {
        Self { transform, zoom }
    }

    /// Map a logical point to the overlay: `logical * zoom + pan`.
    pub fn to_device(&self, logical: Point) -> Point {
        Point::new(
            logical.x * self.zoom + self.transform.translate_x,
            logical.y * self.zoom + self.transform.translate_y,
        )
    }
}

// ─── Canvas frame ────────────────────────────────────────────────────────

/// The visible canvas area in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasFrame {
    pub center: Point,
    pub bounds: Rect,
}

impl CanvasFrame {
    /// Visible frame of a `size` device-pixel canvas under `viewport`.
    /// `None` for a degenerate viewport.
    pub fn visible(size: Size, viewport: &ViewportTransform) -> Option<Self> {
        let top_left = viewport.to_logical(Point::ZERO)?;
        let bottom_right = viewport.to_logical(Point::new(size.width, size.height))?;
        let bounds = Rect::from_points(top_left, bottom_right);
        Some(Self {
            center: bounds.center(),
            bounds,
        })
    }
}

// ─── Range tests ─────────────────────────────────────────────────────────

/// Round to the nearest integer, halves toward +∞ (`-2.5 → -2`, `2.5 → 3`).
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Two coordinates are aligned when their rounded values differ by at most
/// `margin`. Rounding happens before differencing.
pub fn in_range(a: f64, b: f64, margin: f64) -> bool {
    (round_half_up(a) - round_half_up(b)).abs() <= margin
}

/// Whether `value` rounds onto the integer window around `mid`: the set
/// `round(mid - margin + k)` for `k = 0, 1, ...` while the sample stays within
/// `mid + margin`.
///
/// Consecutive samples round to consecutive integers, so the window is the
/// closed range `lo..=lo + floor(2 * margin)`.
pub fn in_center_window(value: f64, mid: f64, margin: f64) -> bool {
    if !margin.is_finite() || !mid.is_finite() || margin < 0.0 {
        return false;
    }
    let target = round_half_up(value);
    let lo = round_half_up(mid - margin);
    let hi = lo + (2.0 * margin).floor();
    lo <= target && target <= hi
}
