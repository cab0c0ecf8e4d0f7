//! SG Editor: gesture lifecycle and the aligning-guidelines coordinator.
//!
//! | Module | Role |
//! |--------|------|
//! | [`events`] | Canvas events and the multi-subscriber hub |
//! | [`canvas`] | What a host canvas provides |
//! | [`guides`] | `init_aligning_guidelines` and the per-gesture state machine |
//! | [`scene_canvas`] | Ready-made host over `SceneShape`s |

pub mod canvas;
pub mod events;
pub mod guides;
pub mod scene_canvas;

pub use canvas::Canvas;
pub use events::{CanvasEvent, EventHub, EventKind, SubscriptionId};
pub use guides::init_aligning_guidelines;
pub use scene_canvas::SceneCanvas;
