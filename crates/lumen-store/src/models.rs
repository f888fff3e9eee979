//! Domain model structs persisted in local storage.
//!
//! Every struct derives `Serialize` and `Deserialize` with the field names
//! of the persisted JSON documents, so stored entries round-trip unchanged
//! and can be handed directly to a UI layer.

use chrono::{DateTime, Utc};
use lumen_shared::{DeliveryStatus, MessageId, MessageKind, Role, Sender};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Account
// ---------------------------------------------------------------------------

/// A registered account as stored in the `registeredUsers` entry.
///
/// Credentials are plaintext mock data; nothing in this system treats them
/// as sensitive. Accounts are immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    /// Opaque identifier (UUID v4 string, or a fixed token for built-ins).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address, unique among built-in and registered accounts.
    pub email: String,
    /// Account role.
    pub role: Role,
    /// Plaintext password.
    pub password: String,
}

impl Account {
    /// The password-stripped view of this account.
    pub fn profile(&self) -> Profile {
        Profile {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// The current signed-in identity, as stored in the `user` entry.
///
/// Always an [`Account`] minus its password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

// ---------------------------------------------------------------------------
// ChatMessage
// ---------------------------------------------------------------------------

/// A single chat message, as stored in the `chatMessages` entry.
///
/// Immutable after creation except for `status`, which may move from
/// `sending` to one terminal value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// Time-derived opaque identifier.
    pub id: MessageId,
    /// Message text, or a data URL for image/audio content.
    pub content: String,
    /// When the message was created. Persisted as RFC 3339 text.
    pub timestamp: DateTime<Utc>,
    /// Who produced the message.
    pub sender: Sender,
    /// Content classification. Serialized as `type` in stored documents.
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Delivery state.
    pub status: DeliveryStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_strips_password() {
        let account = Account {
            id: "1".into(),
            name: "Admin".into(),
            email: "admin@lumen.app".into(),
            role: Role::Admin,
            password: "admin123".into(),
        };
        let profile = account.profile();
        assert_eq!(profile.email, account.email);
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("admin123"));
    }

    #[test]
    fn message_wire_format() {
        let msg = ChatMessage {
            id: MessageId::from_millis(1_700_000_000_000),
            content: "hello".into(),
            timestamp: "2024-01-01T00:00:00Z".parse().unwrap(),
            sender: Sender::User,
            kind: MessageKind::Text,
            status: DeliveryStatus::Sent,
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"text\""));
        assert!(json.contains("\"sender\":\"user\""));
        assert!(json.contains("\"status\":\"sent\""));
        assert!(json.contains("2024-01-01T00:00:00Z"));

        let back: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }
}
