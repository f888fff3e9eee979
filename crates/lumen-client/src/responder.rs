//! The bot responder seam.
//!
//! The conversation container asks a [`Responder`] for the remote peer's
//! reply after the simulated network delay. The default implementation
//! returns canned per-kind texts; a real deployment would put an inference
//! backend behind this trait, and tests inject a failing one to exercise
//! the error transition.

use lumen_shared::MessageKind;
use thiserror::Error;

/// Failure raised by a responder.
#[derive(Error, Debug)]
#[error("Responder failure: {0}")]
pub struct ResponderError(pub String);

/// Produces the remote peer's reply to a user message.
pub trait Responder: Send + Sync {
    fn compose(&self, content: &str, kind: MessageKind) -> Result<String, ResponderError>;
}

/// Default responder with one canned reply per content kind.
#[derive(Debug, Default)]
pub struct CannedResponder;

impl Responder for CannedResponder {
    fn compose(&self, content: &str, kind: MessageKind) -> Result<String, ResponderError> {
        let reply = match kind {
            MessageKind::Text => format!(
                "Thanks for your message: \"{content}\". This is a simulated response. \
                 In a real implementation, this would connect to an AI backend."
            ),
            MessageKind::Image => {
                "I've received your image. If I were connected to a vision model, \
                 I could analyze it for you."
                    .to_string()
            }
            MessageKind::Audio => {
                "I've received your audio message. With a proper backend, \
                 I could transcribe and respond to it."
                    .to_string()
            }
        };
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_reply_echoes_content() {
        let reply = CannedResponder
            .compose("hello", MessageKind::Text)
            .unwrap();
        assert!(reply.contains("\"hello\""));
    }

    #[test]
    fn media_replies_are_fixed() {
        let image = CannedResponder.compose("data:image/png;base64,AAAA", MessageKind::Image);
        assert!(image.unwrap().contains("vision model"));
        let audio = CannedResponder.compose("data:audio/webm;base64,AAAA", MessageKind::Audio);
        assert!(audio.unwrap().contains("transcribe"));
    }
}
