//! Guide rendering for SG.
//!
//! | Module | Role |
//! |--------|------|
//! | [`surface`] | Overlay surface trait and a recording implementation |
//! | [`paint`] | Render queue → strokes in device space |
//! | `scene` | `OverlaySurface` for `vello::Scene` |

pub mod paint;
mod scene;
pub mod surface;

pub use paint::paint_guides;
pub use surface::{OverlaySurface, RecordedStroke, RecordingSurface};
