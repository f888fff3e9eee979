//! Accessors for the persisted chat transcript.

use lumen_shared::constants::KEY_CHAT_MESSAGES;

use crate::database::Database;
use crate::error::Result;
use crate::models::ChatMessage;

impl Database {
    /// Load the persisted transcript.  An absent entry is an empty list.
    ///
    /// Timestamps stored as RFC 3339 text are restored to `DateTime<Utc>`
    /// by the serde round-trip.
    pub fn load_transcript(&self) -> Result<Vec<ChatMessage>> {
        match self.get_item(KEY_CHAT_MESSAGES)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Persist the full transcript, replacing any previous one.
    pub fn save_transcript(&self, messages: &[ChatMessage]) -> Result<()> {
        let json = serde_json::to_string(messages)?;
        self.set_item(KEY_CHAT_MESSAGES, &json)
    }

    /// Remove the persisted transcript.  Returns `true` if one existed.
    pub fn clear_transcript(&self) -> Result<bool> {
        self.remove_item(KEY_CHAT_MESSAGES)
    }
}
