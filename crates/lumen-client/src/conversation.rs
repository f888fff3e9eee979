//! Conversation container: owns the ordered transcript and the
//! "remote peer is composing" flag.
//!
//! The optimistic send flow is expressed as explicit [`TranscriptUpdate`]
//! values keyed by message id and applied through a single serialized
//! application point. The status state machine is enforced there:
//! `sending` may move to `sent` or `error`, terminal values never change,
//! so overlapping send flows cannot regress each other's records. The
//! transcript is persisted after every change and rehydrated once at
//! construction.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use rand::Rng;
use tracing::{debug, warn};

use lumen_shared::{DeliveryStatus, MessageId, MessageIdAllocator, MessageKind, Sender};
use lumen_store::{ChatMessage, Database};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::events::{ClientEvent, EventBus, NoticeSeverity};
use crate::responder::{CannedResponder, Responder};

/// A single transcript mutation.
#[derive(Debug, Clone)]
pub enum TranscriptUpdate {
    /// Append a freshly created record.
    Append(ChatMessage),
    /// Move the record with `id` to `status`.  Ignored when the record is
    /// missing or already terminal.
    SetStatus { id: MessageId, status: DeliveryStatus },
    /// Empty the transcript and remove its persisted entry.
    Clear,
}

/// Cloneable handle to the conversation state.
#[derive(Clone)]
pub struct Conversation {
    store: Arc<Mutex<Database>>,
    bus: EventBus,
    config: ClientConfig,
    responder: Arc<dyn Responder>,
    ids: Arc<MessageIdAllocator>,
    messages: Arc<Mutex<Vec<ChatMessage>>>,
    composing: Arc<AtomicBool>,
}

impl Conversation {
    pub fn new(store: Arc<Mutex<Database>>, bus: EventBus, config: ClientConfig) -> Result<Self> {
        Self::with_responder(store, bus, config, Arc::new(CannedResponder))
    }

    /// Construct with a custom [`Responder`].  Tests use this to inject a
    /// failing responder.
    pub fn with_responder(
        store: Arc<Mutex<Database>>,
        bus: EventBus,
        config: ClientConfig,
        responder: Arc<dyn Responder>,
    ) -> Result<Self> {
        let persisted = {
            let db = store.lock().map_err(|_| ClientError::Lock)?;
            db.load_transcript()?
        };
        if !persisted.is_empty() {
            debug!(count = persisted.len(), "restored persisted transcript");
        }
        Ok(Self {
            store,
            bus,
            config,
            responder,
            ids: Arc::new(MessageIdAllocator::new()),
            messages: Arc::new(Mutex::new(persisted)),
            composing: Arc::new(AtomicBool::new(false)),
        })
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Snapshot of the current transcript, in creation order.
    pub fn messages(&self) -> Result<Vec<ChatMessage>> {
        let guard = self.messages.lock().map_err(|_| ClientError::Lock)?;
        Ok(guard.clone())
    }

    /// Whether the simulated remote peer is composing a reply.
    pub fn is_composing(&self) -> bool {
        self.composing.load(Ordering::Relaxed)
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Send a message and drive the simulated reply flow to completion.
    ///
    /// Empty text is a no-op (`Ok(None)`). Otherwise the user record is
    /// appended immediately with status `sending`, the composing flag is
    /// raised, and after the randomized delay the record moves to `sent`
    /// and the bot reply (always text) is appended. A responder failure
    /// moves the record to `error` instead and raises a notice.
    pub async fn send_message(
        &self,
        content: &str,
        kind: MessageKind,
    ) -> Result<Option<MessageId>> {
        if kind == MessageKind::Text && content.trim().is_empty() {
            return Ok(None);
        }

        let id = self.ids.next();
        self.apply(TranscriptUpdate::Append(ChatMessage {
            id: id.clone(),
            content: content.to_string(),
            timestamp: Utc::now(),
            sender: Sender::User,
            kind,
            status: DeliveryStatus::Sending,
        }))?;

        self.set_composing(true);

        // Randomized delay simulating the remote peer thinking.
        let jitter_ms = self.config.reply_delay_jitter.as_millis() as u64;
        let jitter = if jitter_ms > 0 {
            rand::thread_rng().gen_range(0..jitter_ms)
        } else {
            0
        };
        let delay = self.config.reply_delay_base + std::time::Duration::from_millis(jitter);
        tokio::time::sleep(delay).await;

        let outcome = self.responder.compose(content, kind);
        let result = match outcome {
            Ok(reply) => {
                self.apply(TranscriptUpdate::SetStatus {
                    id: id.clone(),
                    status: DeliveryStatus::Sent,
                })?;
                self.apply(TranscriptUpdate::Append(ChatMessage {
                    id: self.ids.next(),
                    content: reply,
                    timestamp: Utc::now(),
                    sender: Sender::Bot,
                    // The bot always replies with text.
                    kind: MessageKind::Text,
                    status: DeliveryStatus::Sent,
                }))?;
                Ok(Some(id))
            }
            Err(e) => {
                warn!(error = %e, "simulated send failed");
                self.apply(TranscriptUpdate::SetStatus {
                    id: id.clone(),
                    status: DeliveryStatus::Error,
                })?;
                self.bus.notice(
                    NoticeSeverity::Error,
                    "Message failed",
                    "Failed to send message. Please try again.",
                );
                Ok(Some(id))
            }
        };

        self.set_composing(false);
        result
    }

    /// Empty the transcript and remove its persisted entry.  Idempotent.
    pub fn clear_chat(&self) -> Result<()> {
        self.apply(TranscriptUpdate::Clear)?;
        self.bus
            .notice(NoticeSeverity::Success, "Chat cleared", "Chat history cleared");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Update application
    // ------------------------------------------------------------------

    /// Apply one update, persist the result, notify subscribers.
    ///
    /// The messages lock serializes application, so updates from
    /// overlapping send flows land in one total order.
    fn apply(&self, update: TranscriptUpdate) -> Result<()> {
        let snapshot = {
            let mut guard = self.messages.lock().map_err(|_| ClientError::Lock)?;
            match update {
                TranscriptUpdate::Append(message) => guard.push(message),
                TranscriptUpdate::SetStatus { id, status } => {
                    match guard.iter_mut().find(|m| m.id == id) {
                        Some(message) if !message.status.is_terminal() => {
                            message.status = status;
                        }
                        Some(message) => {
                            warn!(id = %id, current = ?message.status, "ignoring status update on terminal record");
                        }
                        None => {
                            warn!(id = %id, "ignoring status update on unknown record");
                        }
                    }
                }
                TranscriptUpdate::Clear => guard.clear(),
            }
            guard.clone()
        };

        {
            let db = self.store.lock().map_err(|_| ClientError::Lock)?;
            if snapshot.is_empty() {
                db.clear_transcript()?;
            } else {
                db.save_transcript(&snapshot)?;
            }
        }

        self.bus.emit(ClientEvent::TranscriptChanged);
        Ok(())
    }

    fn set_composing(&self, composing: bool) {
        self.composing.store(composing, Ordering::Relaxed);
        self.bus.emit(ClientEvent::ComposingChanged { composing });
    }
}
