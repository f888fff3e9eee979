use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Role attached to an account.
///
/// Serialized as `"admin"` / `"user"`, the wire form persisted records use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Who produced a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The locally signed-in user.
    User,
    /// The simulated remote peer.
    Bot,
}

/// Content classification of a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Image,
    Audio,
}

/// Delivery state of a chat message.
///
/// The only legal transitions are `Sending -> Sent` and `Sending -> Error`;
/// both `Sent` and `Error` are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sending,
    Sent,
    Error,
}

impl DeliveryStatus {
    /// Whether the status can no longer change.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DeliveryStatus::Sending)
    }
}

/// Opaque, time-derived message identifier.
///
/// The wire form is the Unix timestamp in milliseconds rendered as decimal
/// text, matching the format already present in persisted transcripts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct MessageId(pub String);

impl MessageId {
    pub fn from_millis(millis: i64) -> Self {
        Self(millis.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Allocator for [`MessageId`]s.
///
/// Ids stay time-derived but are bumped monotonically past the last issued
/// value, so two messages created within the same millisecond still get
/// distinct identifiers.
#[derive(Debug, Default)]
pub struct MessageIdAllocator {
    last: AtomicI64,
}

impl MessageIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next identifier.
    pub fn next(&self) -> MessageId {
        let now = Utc::now().timestamp_millis();
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(prev + 1);
            match self.last.compare_exchange_weak(
                prev,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return MessageId::from_millis(candidate),
                Err(actual) => prev = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocator_never_repeats() {
        let alloc = MessageIdAllocator::new();
        let a = alloc.next();
        let b = alloc.next();
        let c = alloc.next();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert!(b.as_str().parse::<i64>().unwrap() > a.as_str().parse::<i64>().unwrap());
    }

    #[test]
    fn status_terminality() {
        assert!(!DeliveryStatus::Sending.is_terminal());
        assert!(DeliveryStatus::Sent.is_terminal());
        assert!(DeliveryStatus::Error.is_terminal());
    }

    #[test]
    fn enum_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
        assert_eq!(
            serde_json::to_string(&MessageKind::Audio).unwrap(),
            "\"audio\""
        );
        assert_eq!(
            serde_json::to_string(&DeliveryStatus::Sending).unwrap(),
            "\"sending\""
        );
    }
}
