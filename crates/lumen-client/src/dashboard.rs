//! Read-only aggregates backing the admin dashboard.
//!
//! The numbers are computed from the local store on demand; the dashboard
//! is gated on the administrator role.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use lumen_shared::{MessageKind, Sender};
use lumen_store::{Database, Profile};

use crate::error::{ClientError, Result};
use crate::session::Session;

/// Point-in-time dashboard figures.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardSnapshot {
    /// Locally registered accounts, passwords stripped.
    pub roster: Vec<Profile>,
    pub total_users: usize,
    pub total_messages: usize,
    pub user_messages: usize,
    pub bot_messages: usize,
    pub text_messages: usize,
    pub image_messages: usize,
    pub audio_messages: usize,
}

/// Cloneable handle to the dashboard read side.
#[derive(Clone)]
pub struct Dashboard {
    store: Arc<Mutex<Database>>,
    session: Session,
}

impl Dashboard {
    pub fn new(store: Arc<Mutex<Database>>, session: Session) -> Self {
        Self { store, session }
    }

    /// Compute a snapshot.  Requires an admin session.
    pub fn snapshot(&self) -> Result<DashboardSnapshot> {
        self.session.require_admin()?;

        let (accounts, transcript) = {
            let db = self.store.lock().map_err(|_| ClientError::Lock)?;
            (db.load_accounts()?, db.load_transcript()?)
        };

        let roster: Vec<Profile> = accounts.iter().map(|a| a.profile()).collect();
        let user_messages = transcript
            .iter()
            .filter(|m| m.sender == Sender::User)
            .count();
        let count_kind = |kind: MessageKind| transcript.iter().filter(|m| m.kind == kind).count();

        Ok(DashboardSnapshot {
            total_users: roster.len(),
            total_messages: transcript.len(),
            user_messages,
            bot_messages: transcript.len() - user_messages,
            text_messages: count_kind(MessageKind::Text),
            image_messages: count_kind(MessageKind::Image),
            audio_messages: count_kind(MessageKind::Audio),
            roster,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::events::EventBus;
    use lumen_shared::MessageKind;

    use crate::conversation::Conversation;

    #[tokio::test(start_paused = true)]
    async fn snapshot_requires_admin() {
        let store = Arc::new(Mutex::new(Database::open_in_memory().unwrap()));
        let bus = EventBus::new();
        let session =
            Session::new(store.clone(), bus.clone(), ClientConfig::instant()).unwrap();
        let dashboard = Dashboard::new(store, session.clone());

        assert!(dashboard.snapshot().is_err());

        session.register("U", "u@example.com", "pw").await.unwrap();
        assert!(matches!(
            dashboard.snapshot(),
            Err(ClientError::Forbidden)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn snapshot_reflects_stored_state() {
        let store = Arc::new(Mutex::new(Database::open_in_memory().unwrap()));
        let bus = EventBus::new();
        let session =
            Session::new(store.clone(), bus.clone(), ClientConfig::instant()).unwrap();
        let conversation =
            Conversation::new(store.clone(), bus, ClientConfig::instant()).unwrap();

        session.register("U", "u@example.com", "pw").await.unwrap();
        conversation
            .send_message("hello", MessageKind::Text)
            .await
            .unwrap();
        session.logout().unwrap();
        session.login("admin@lumen.app", "admin123").await.unwrap();

        let snapshot = Dashboard::new(store, session).snapshot().unwrap();
        assert_eq!(snapshot.total_users, 1);
        assert_eq!(snapshot.roster[0].email, "u@example.com");
        assert_eq!(snapshot.total_messages, 2);
        assert_eq!(snapshot.user_messages, 1);
        assert_eq!(snapshot.bot_messages, 1);
        assert_eq!(snapshot.text_messages, 2);
        assert_eq!(snapshot.image_messages, 0);
    }
}
