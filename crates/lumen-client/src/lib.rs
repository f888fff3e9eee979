//! # lumen-client
//!
//! Client core for the Lumen chatbot application: the session and
//! conversation state containers, their event bus, and the local-storage
//! wiring. All backend behavior is simulated client-side; there is no
//! network transport anywhere in this workspace.

pub mod config;
pub mod context;
pub mod conversation;
pub mod dashboard;
pub mod events;
pub mod responder;
pub mod session;

mod error;

pub use config::ClientConfig;
pub use context::AppContext;
pub use conversation::{Conversation, TranscriptUpdate};
pub use dashboard::{Dashboard, DashboardSnapshot};
pub use error::ClientError;
pub use events::{ClientEvent, EventBus, Notice, NoticeSeverity};
pub use responder::{CannedResponder, Responder, ResponderError};
pub use session::Session;

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise the tracing subscriber for the client process.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lumen_client=debug,lumen_store=info,warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
