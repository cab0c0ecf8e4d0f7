//! Guide configuration: snap margin, relation toggles, and line styles.
//!
//! Everything here is fixed at initialization time. The defaults reproduce
//! the stock aligning/centering guideline constants, so a host that passes
//! `GuideConfig::default()` gets the stock behavior.

use crate::color::Color;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

// ─── Line style ───────────────────────────────────────────────────────────

/// Stroke style for one family of guides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Color,
    /// Stroke width in device pixels.
    pub width: f64,
    /// Dash pattern in device pixels (dash, gap, ...). Empty = solid.
    #[serde(default)]
    pub dash: SmallVec<[f64; 2]>,
}

impl LineStyle {
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: SmallVec::new(),
        }
    }

    pub fn dashed(color: Color, width: f64, dash: f64, gap: f64) -> Self {
        Self {
            color,
            width,
            dash: smallvec![dash, gap],
        }
    }

    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }
}

// ─── Config ───────────────────────────────────────────────────────────────

/// Configuration passed to the guide coordinator at initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    /// Maximum rounded coordinate difference (logical units) still treated as
    /// aligned. Default: **4**.
    pub margin: f64,

    /// Snap against other objects (center, edge, corner relations).
    /// Default: **true**.
    pub snap_to_objects: bool,

    /// Include the corner-to-corner and corner-to-center relations. These are
    /// the most expensive checks (16 + 4 pair tests per candidate).
    /// Default: **true**.
    pub snap_to_corners: bool,

    /// Snap the object's center to the canvas mid-lines. Default: **true**.
    pub snap_to_canvas_center: bool,

    /// Style for object-to-object guides. Default: `rgb(0,255,0)`, 3px, dash 3/3.
    pub align_line: LineStyle,

    /// Style for canvas-center guides. Default: `rgba(127,0,255,0.5)`, 3px, dash 3/3.
    pub center_line: LineStyle,

    /// Style for cross marks. Default: `rgb(0,255,0)`, 2px, solid.
    pub cross_mark: LineStyle,

    /// Half-length of each cross-mark diagonal, in device pixels. Default: **6**.
    pub cross_size: f64,
}

impl Default for GuideConfig {
    fn default() -> Self {
        let green = Color::from_rgb8_alpha(0, 255, 0, 1.0);
        Self {
            margin: 4.0,
            snap_to_objects: true,
            snap_to_corners: true,
            snap_to_canvas_center: true,
            align_line: LineStyle::dashed(green, 3.0, 3.0, 3.0),
            center_line: LineStyle::dashed(Color::from_rgb8_alpha(127, 0, 255, 0.5), 3.0, 3.0, 3.0),
            cross_mark: LineStyle::solid(green, 2.0),
            cross_size: 6.0,
        }
    }
}

impl GuideConfig {
    /// Parse a (possibly partial) JSON configuration. Missing fields keep
    /// their defaults.
    ///
    /// # Errors
    /// Returns a message when the JSON is malformed, a color does not parse,
    /// or a numeric field is out of range.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("Guide config error: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the detector or renderer misbehave.
    ///
    /// # Errors
    /// Returns a message naming the offending field.
    pub fn validate(&self) -> Result<(), String> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(format!("margin must be a non-negative number, got {}", self.margin));
        }
        if !self.cross_size.is_finite() || self.cross_size < 0.0 {
            return Err(format!(
                "cross_size must be a non-negative number, got {}",
                self.cross_size
            ));
        }
        for (name, style) in [
            ("align_line", &self.align_line),
            ("center_line", &self.center_line),
            ("cross_mark", &self.cross_mark),
        ] {
            if !style.width.is_finite() || style.width <= 0.0 {
                return Err(format!("{name}.width must be positive, got {}", style.width));
            }
            if style.dash.iter().any(|d| !d.is_finite() || *d < 0.0) {
                return Err(format!("{name}.dash must contain non-negative lengths"));
            }
        }
        Ok(())
    }
}
