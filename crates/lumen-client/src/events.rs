//! Event bus connecting the state containers to their subscribers.
//!
//! The presentation layer subscribes once and re-renders on every event;
//! notices map to toast notifications. Emission is fire-and-forget: a bus
//! with no subscribers is not an error.

use serde::Serialize;
use tokio::sync::broadcast;

/// Number of events buffered per subscriber before lagging.
pub const EVENT_CAPACITY: usize = 64;

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeSeverity {
    Info,
    Success,
    Error,
}

/// A user-visible notification (rendered as a toast).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub title: String,
    pub body: String,
}

/// Events emitted by the state containers.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// A notice to surface to the user.
    Notice(Notice),
    /// The current session changed (sign-in, registration).
    SessionChanged,
    /// The session ended; the presentation layer navigates to the login view.
    LoggedOut,
    /// The transcript changed (append, status update, clear).
    TranscriptChanged,
    /// The remote peer started or stopped composing.
    ComposingChanged { composing: bool },
}

/// Cloneable handle to the broadcast bus.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<ClientEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CAPACITY);
        Self { tx }
    }

    /// Subscribe to all future events.
    pub fn subscribe(&self) -> broadcast::Receiver<ClientEvent> {
        self.tx.subscribe()
    }

    /// Emit an event to all current subscribers.
    pub fn emit(&self, event: ClientEvent) {
        if self.tx.send(event).is_err() {
            tracing::trace!("event emitted with no subscribers");
        }
    }

    pub fn notice(&self, severity: NoticeSeverity, title: &str, body: &str) {
        self.emit(ClientEvent::Notice(Notice {
            severity,
            title: title.to_string(),
            body: body.to_string(),
        }));
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
