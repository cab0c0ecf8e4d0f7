//! Canvas lifecycle events and a multi-subscriber event hub.
//!
//! Several consumers can listen to the same event: subscribing never
//! replaces an existing handler. Handlers run in subscription order and get
//! the canvas mutably, so they can read objects, move the active one, or
//! draw on the overlay.

use sg_core::ObjectId;
use std::cell::RefCell;
use std::rc::Rc;

/// A lifecycle event raised by the host canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasEvent {
    /// Pointer went down; a gesture may start.
    GestureStart,
    /// The target object is being dragged.
    ObjectMoving { target: ObjectId },
    /// The target object is being scaled.
    ObjectScaling { target: ObjectId },
    /// The target object is being rotated.
    ObjectRotating { target: ObjectId },
    /// A paint pass is about to start.
    BeforeRender,
    /// A paint pass has finished drawing the main content.
    AfterRender,
    /// Pointer released; the gesture is over.
    GestureEnd,
}

/// Payload-free discriminant of [`CanvasEvent`], used as a subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    GestureStart,
    ObjectMoving,
    ObjectScaling,
    ObjectRotating,
    BeforeRender,
    AfterRender,
    GestureEnd,
}

impl CanvasEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::GestureStart => EventKind::GestureStart,
            Self::ObjectMoving { .. } => EventKind::ObjectMoving,
            Self::ObjectScaling { .. } => EventKind::ObjectScaling,
            Self::ObjectRotating { .. } => EventKind::ObjectRotating,
            Self::BeforeRender => EventKind::BeforeRender,
            Self::AfterRender => EventKind::AfterRender,
            Self::GestureEnd => EventKind::GestureEnd,
        }
    }

    /// The manipulated object, for move/scale/rotate events.
    pub fn target(&self) -> Option<ObjectId> {
        match self {
            Self::ObjectMoving { target }
            | Self::ObjectScaling { target }
            | Self::ObjectRotating { target } => Some(*target),
            _ => None,
        }
    }
}

/// Handle returned by [`EventHub::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub(crate) type Handler<C> = Rc<RefCell<dyn FnMut(&mut C, &CanvasEvent)>>;

/// Subscribers for canvas events of a host of type `C`.
pub struct EventHub<C> {
    handlers: Vec<(SubscriptionId, EventKind, Handler<C>)>,
    next_id: u64,
}

impl<C> Default for EventHub<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> EventHub<C> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    /// Subscribe `handler` to events of `kind`. Existing subscribers stay.
    pub fn on(
        &mut self,
        kind: EventKind,
        handler: impl FnMut(&mut C, &CanvasEvent) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, kind, Rc::new(RefCell::new(handler))));
        id
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn off(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sub, _, _)| *sub != id);
        self.handlers.len() != before
    }

    /// Number of handlers subscribed to `kind`.
    pub fn count(&self, kind: EventKind) -> usize {
        self.handlers.iter().filter(|(_, k, _)| *k == kind).count()
    }

    /// Snapshot of the handlers for `kind`, in subscription order. Cloning
    /// the `Rc`s releases the hub so handlers can borrow the canvas freely.
    pub(crate) fn handlers_for(&self, kind: EventKind) -> Vec<Handler<C>> {
        self.handlers
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(_, _, handler)| Rc::clone(handler))
            .collect()
    }
}

/// Invoke every handler subscribed to `event` on `canvas`.
///
/// A handler that is already running (re-entrant dispatch) is skipped.
pub(crate) fn dispatch<C>(handlers: Vec<Handler<C>>, canvas: &mut C, event: &CanvasEvent) {
    for handler in handlers {
        match handler.try_borrow_mut() {
            Ok(mut call) => (*call)(canvas, event),
            Err(_) => log::warn!("skipping re-entrant {:?} handler", event.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Log(Vec<&'static str>);

    #[test]
    fn every_subscriber_runs_in_order() {
        let mut hub: EventHub<Log> = EventHub::new();
        hub.on(EventKind::AfterRender, |log, _| log.0.push("first"));
        hub.on(EventKind::AfterRender, |log, _| log.0.push("second"));
        hub.on(EventKind::BeforeRender, |log, _| log.0.push("other"));

        let mut log = Log::default();
        dispatch(hub.handlers_for(EventKind::AfterRender), &mut log, &CanvasEvent::AfterRender);
        assert_eq!(log.0, vec!["first", "second"]);
    }

    #[test]
    fn off_removes_only_that_subscription() {
        let mut hub: EventHub<Log> = EventHub::new();
        let a = hub.on(EventKind::GestureEnd, |log, _| log.0.push("a"));
        hub.on(EventKind::GestureEnd, |log, _| log.0.push("b"));

        assert!(hub.off(a));
        assert!(!hub.off(a));
        assert_eq!(hub.count(EventKind::GestureEnd), 1);

        let mut log = Log::default();
        dispatch(hub.handlers_for(EventKind::GestureEnd), &mut log, &CanvasEvent::GestureEnd);
        assert_eq!(log.0, vec!["b"]);
    }

    #[test]
    fn transform_events_carry_their_target() {
        let id = ObjectId::intern("ev");
        assert_eq!(CanvasEvent::ObjectScaling { target: id }.target(), Some(id));
        assert_eq!(CanvasEvent::ObjectRotating { target: id }.kind(), EventKind::ObjectRotating);
        assert_eq!(CanvasEvent::BeforeRender.target(), None);
    }
}
