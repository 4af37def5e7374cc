//! Channel-backed event subscriptions.

use super::messages::{SubscriptionId, ViewportEvent};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

/// Create a bounded event channel.
///
/// The sink goes to the container, the subscription stays with the engine.
pub fn channel(capacity: usize) -> (EventSink, Subscription) {
    let (tx, rx) = bounded(capacity.max(1));
    (EventSink { tx }, Subscription { rx })
}

/// Sending half of an event subscription, held by a container.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: Sender<ViewportEvent>,
}

impl EventSink {
    /// Deliver an event without blocking.
    ///
    /// A full channel drops the event: the receiver re-samples geometry when
    /// it recomputes, so a queued event already covers it. Returns `false`
    /// once the receiving side is gone.
    pub fn emit(&self, event: ViewportEvent) -> bool {
        match self.tx.try_send(event) {
            Ok(()) | Err(TrySendError::Full(_)) => true,
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Receiving half of an event subscription, held by the engine.
#[derive(Debug)]
pub struct Subscription {
    rx: Receiver<ViewportEvent>,
}

impl Subscription {
    /// Take the next queued event, if any.
    pub fn try_next(&self) -> Option<ViewportEvent> {
        self.rx.try_recv().ok()
    }

    /// Drain all queued events.
    pub fn drain(&self) -> Vec<ViewportEvent> {
        self.rx.try_iter().collect()
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    /// Check if no events are queued.
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

/// Subscriber list for containers that broadcast viewport events.
#[derive(Debug, Default)]
pub struct Subscribers {
    sinks: Vec<(SubscriptionId, EventSink)>,
    next_id: u32,
}

impl Subscribers {
    /// Create an empty subscriber list.
    pub const fn new() -> Self {
        Self {
            sinks: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a sink and return its handle.
    pub fn add(&mut self, sink: EventSink) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.sinks.push((id, sink));
        id
    }

    /// Remove a sink. Unknown handles are ignored.
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.sinks.len();
        self.sinks.retain(|(sid, _)| *sid != id);
        self.sinks.len() != before
    }

    /// Send an event to every sink, pruning sinks whose receiver is gone.
    pub fn broadcast(&mut self, event: ViewportEvent) {
        self.sinks.retain(|(_, sink)| sink.emit(event));
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Check if there are no subscriptions.
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}
