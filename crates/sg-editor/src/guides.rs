//! Aligning guidelines: wires snapping and guide painting into a canvas.
//!
//! ```text
//! Idle ──gesture start──▶ Active ──move/scale/rotate──▶ Active
//!   ▲                        │
//!   └──────gesture end───────┘
//! ```
//!
//! While active, every transform event measures all objects, runs a snap
//! pass, moves the active object and replaces the render queue. The next
//! paint clears the overlay, draws the queue and empties it.

use crate::canvas::Canvas;
use crate::events::{CanvasEvent, EventKind};
use sg_core::{
    CanvasFrame, GuideConfig, ObjectId, ObjectMetrics, RenderQueue, SceneObject,
    ViewportSnapshot, apply_snap, detect_snaps,
};
use sg_render::paint_guides;
use std::cell::{RefCell, RefMut};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq)]
enum GestureState {
    Idle,
    /// Viewport captured at gesture start, held until gesture end.
    Active(ViewportSnapshot),
}

/// Per-canvas guide state shared by the event handlers.
#[derive(Debug)]
pub(crate) struct GuideSession {
    config: GuideConfig,
    state: GestureState,
    queue: RenderQueue,
}

impl GuideSession {
    pub(crate) fn new(config: GuideConfig) -> Self {
        Self {
            config,
            state: GestureState::Idle,
            queue: RenderQueue::new(),
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        matches!(self.state, GestureState::Active(_))
    }

    #[cfg(test)]
    pub(crate) fn queue(&self) -> &RenderQueue {
        &self.queue
    }

    pub(crate) fn on_gesture_start<C: Canvas>(&mut self, canvas: &C) {
        let snapshot = ViewportSnapshot::new(canvas.viewport_transform(), canvas.zoom());
        log::debug!("gesture start, zoom {}", snapshot.zoom);
        self.state = GestureState::Active(snapshot);
    }

    pub(crate) fn on_transform<C: Canvas>(&mut self, canvas: &mut C, target: ObjectId) {
        let GestureState::Active(viewport) = self.state else {
            return;
        };
        if !canvas.has_current_transform() {
            return;
        }
        let transform = viewport.transform;
        if transform.is_degenerate() {
            log::debug!("degenerate viewport, no snapping for {target}");
            return;
        }

        let mut active = None;
        let mut candidates = Vec::new();
        for object in canvas.objects() {
            let Some(metrics) = ObjectMetrics::measure(object, &transform) else {
                continue;
            };
            if object.id() == target {
                active = Some(metrics);
            } else {
                candidates.push(metrics);
            }
        }
        let Some(active) = active else {
            log::debug!("transform target {target} is not on the canvas");
            return;
        };

        let frame = CanvasFrame::visible(canvas.size(), &transform);
        let outcome = detect_snaps(&active, &candidates, frame.as_ref(), &self.config);
        if let Some(object) = canvas.object_mut(target) {
            apply_snap(object, &outcome);
        }
        self.queue.replace(&outcome.matches, &outcome.crosses);
    }

    pub(crate) fn on_before_render<C: Canvas>(&mut self, canvas: &mut C) {
        canvas.overlay().clear();
    }

    pub(crate) fn on_after_render<C: Canvas>(&mut self, canvas: &mut C) {
        if let GestureState::Active(viewport) = self.state {
            paint_guides(canvas.overlay(), &mut self.queue, &viewport, &self.config);
        }
        self.queue.clear();
    }

    pub(crate) fn on_gesture_end<C: Canvas>(&mut self, canvas: &mut C) {
        if self.is_active() {
            log::debug!("gesture end");
        }
        self.queue.clear();
        self.state = GestureState::Idle;
        canvas.request_render();
    }
}

/// Enable aligning guidelines on `canvas`.
///
/// Subscribes to the gesture, transform and render events of the canvas
/// alongside any existing subscribers. Calling it twice installs two
/// independent sets of guides.
pub fn init_aligning_guidelines<C: Canvas>(canvas: &mut C, config: GuideConfig) {
    install(canvas, config);
}

/// Subscribe a fresh session and hand it back for inspection.
pub(crate) fn install<C: Canvas>(canvas: &mut C, config: GuideConfig) -> Rc<RefCell<GuideSession>> {
    let config = match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("guide config rejected, using defaults: {e}");
            GuideConfig::default()
        }
    };
    let session = Rc::new(RefCell::new(GuideSession::new(config)));
    let events = canvas.events();

    let s = Rc::clone(&session);
    events.on(EventKind::GestureStart, move |canvas: &mut C, event| {
        if let Some(mut session) = borrow_session(&s, event) {
            session.on_gesture_start(canvas);
        }
    });

    for kind in [
        EventKind::ObjectMoving,
        EventKind::ObjectScaling,
        EventKind::ObjectRotating,
    ] {
        let s = Rc::clone(&session);
        events.on(kind, move |canvas: &mut C, event| {
            if let Some(target) = event.target()
                && let Some(mut session) = borrow_session(&s, event)
            {
                session.on_transform(canvas, target);
            }
        });
    }

    let s = Rc::clone(&session);
    events.on(EventKind::BeforeRender, move |canvas: &mut C, event| {
        if let Some(mut session) = borrow_session(&s, event) {
            session.on_before_render(canvas);
        }
    });

    let s = Rc::clone(&session);
    events.on(EventKind::AfterRender, move |canvas: &mut C, event| {
        if let Some(mut session) = borrow_session(&s, event) {
            session.on_after_render(canvas);
        }
    });

    let s = Rc::clone(&session);
    events.on(EventKind::GestureEnd, move |canvas: &mut C, event| {
        if let Some(mut session) = borrow_session(&s, event) {
            session.on_gesture_end(canvas);
        }
    });

    session
}

/// The session, unless one of its handlers is already running further up
/// the stack (a host that paints synchronously from `request_render`).
fn borrow_session<'a>(
    session: &'a RefCell<GuideSession>,
    event: &CanvasEvent,
) -> Option<RefMut<'a, GuideSession>> {
    match session.try_borrow_mut() {
        Ok(session) => Some(session),
        Err(_) => {
            log::warn!("guide session busy, dropping nested {:?}", event.kind());
            None
        }
    }
}
