//! Application context: the containers, constructed once at startup.
//!
//! Nothing in this crate lives in module-level mutable state; the
//! presentation layer builds one [`AppContext`] when the process starts
//! and threads the handles to whoever needs them. Lifecycle is the
//! application lifetime.

use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;

use lumen_store::Database;

use crate::config::ClientConfig;
use crate::conversation::Conversation;
use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::events::{ClientEvent, EventBus};
use crate::session::Session;

/// The wired-up client core.
pub struct AppContext {
    pub session: Session,
    pub conversation: Conversation,
    pub dashboard: Dashboard,
    bus: EventBus,
}

impl AppContext {
    /// Construct the full context over an open database, rehydrating
    /// persisted state.
    pub fn new(db: Database, config: ClientConfig) -> Result<Self> {
        let store = Arc::new(Mutex::new(db));
        let bus = EventBus::new();

        let session = Session::new(store.clone(), bus.clone(), config.clone())?;
        let conversation = Conversation::new(store.clone(), bus.clone(), config)?;
        let dashboard = Dashboard::new(store, session.clone());

        Ok(Self {
            session,
            conversation,
            dashboard,
            bus,
        })
    }

    /// Subscribe to all container events (notices, state changes).
    pub fn subscribe(&self) -> broadcast::Receiver<ClientEvent> {
        self.bus.subscribe()
    }
}
