//! Typed event stream from the store.
//!
//! The native side pushes four kinds of events. Subscriptions are tracked
//! in a concurrent registry and each gets its own channel; emitting an
//! event delivers it to every subscription of the matching kind.

use std::sync::Arc;

use cirrus_core::Record;
use dashmap::DashMap;
use tokio::sync::mpsc;

use crate::types::{AuthStatus, ServerError, SyncStatus};

/// The closed set of event kinds the store emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    AuthStatusChanged,
    SyncStatusChanged,
    RecordsChanged,
    Error,
}

/// An event with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Account authentication status changed
    AuthStatusChanged(AuthStatus),
    /// A sync pass started, finished, or failed
    SyncStatusChanged(SyncStatus),
    /// Records were created, updated, or deleted remotely
    RecordsChanged(Vec<Record>),
    /// The store reported an error outside any one call
    Error(ServerError),
}

impl Event {
    /// The kind of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Event::AuthStatusChanged(_) => EventKind::AuthStatusChanged,
            Event::SyncStatusChanged(_) => EventKind::SyncStatusChanged,
            Event::RecordsChanged(_) => EventKind::RecordsChanged,
            Event::Error(_) => EventKind::Error,
        }
    }
}

/// Unique identifier for a subscription.
pub type SubscriptionId = String;

#[derive(Debug)]
struct Registration {
    kind: EventKind,
    sender: mpsc::UnboundedSender<Event>,
}

/// Dispatches store events to subscribers.
///
/// Thread-safe and shared between the manager and the native side via
/// `Arc`. Detaching is synchronous: once `detach` returns, the
/// registration is gone and no further events reach that subscriber.
#[derive(Debug, Default)]
pub struct EventHub {
    registrations: DashMap<SubscriptionId, Registration>,
}

impl EventHub {
    /// Create a new event hub.
    pub fn new() -> Self {
        Self {
            registrations: DashMap::new(),
        }
    }

    /// Create a new event hub wrapped in Arc for sharing.
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Register interest in one event kind.
    ///
    /// Returns the subscription ID and the receiving end of the channel.
    pub fn attach(&self, kind: EventKind) -> (SubscriptionId, mpsc::UnboundedReceiver<Event>) {
        let id = uuid::Uuid::new_v4().to_string();
        let (sender, receiver) = mpsc::unbounded_channel();

        self.registrations.insert(id.clone(), Registration { kind, sender });
        tracing::debug!(subscription = %id, ?kind, "event subscription attached");

        (id, receiver)
    }

    /// Remove a subscription. No-op for unknown IDs.
    pub fn detach(&self, id: &str) {
        if let Some((_, registration)) = self.registrations.remove(id) {
            tracing::debug!(subscription = %id, kind = ?registration.kind, "event subscription detached");
        }
    }

    /// Remove every subscription.
    pub fn clear(&self) {
        self.registrations.clear();
    }

    /// Deliver an event to all subscriptions of its kind.
    ///
    /// Returns the number of subscribers that received it.
    pub fn emit(&self, event: Event) -> usize {
        let kind = event.kind();
        let mut delivered = 0;

        for entry in self.registrations.iter() {
            let registration = entry.value();
            if registration.kind == kind && registration.sender.send(event.clone()).is_ok() {
                delivered += 1;
            }
        }

        tracing::debug!(?kind, recipients = delivered, "event emitted");
        delivered
    }

    /// Number of active subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.registrations.len()
    }
}

/// A live event subscription.
///
/// Dropping the subscription detaches it from the hub.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    hub: Arc<EventHub>,
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl Subscription {
    pub(crate) fn new(hub: Arc<EventHub>, kind: EventKind) -> Self {
        let (id, receiver) = hub.attach(kind);
        Self { id, hub, receiver }
    }

    /// The subscription's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Wait for the next event.
    ///
    /// Returns `None` once the subscription is detached (for example after
    /// the hub is cleared) and the channel drains.
    pub async fn recv(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }

    /// Take an already-delivered event without waiting.
    pub fn try_recv(&mut self) -> Option<Event> {
        self.receiver.try_recv().ok()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.hub.detach(&self.id);
    }
}
