pub mod color;
pub mod config;
pub mod geometry;
pub mod id;
pub mod metrics;
pub mod model;
pub mod queue;
pub mod resolve;
pub mod snap;

pub use color::Color;
pub use config::{GuideConfig, LineStyle};
pub use geometry::{CanvasFrame, ViewportSnapshot, ViewportTransform};
pub use id::ObjectId;
pub use metrics::ObjectMetrics;
pub use model::{SceneObject, SceneShape};
pub use queue::{AlignmentMatch, CrossMark, GuideAxis, MatchKind, RenderQueue};
pub use resolve::{apply_snap, resolve_position};
pub use snap::{SnapOutcome, detect_snaps};

// Re-export kurbo geometry so hosts don't need a direct dependency
pub use kurbo::{Point, Rect, Size};
