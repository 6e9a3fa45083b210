//! The conversing party, as seen by the prompt engine.

use std::fmt;
use std::sync::Arc;

use parley_core::types::ParticipantId;
use tracing::warn;

use crate::error::PromptError;

/// How a line sent to a participant should be presented.
///
/// Only the text is load-bearing; transports pick the styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// The question a prompt is asking.
    Prompt,
    /// Why the last answer was rejected.
    Error,
    /// Anything else: confirmations, summaries.
    Info,
}

/// One line of text delivered to a participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn prompt(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Prompt,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            text: text.into(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// An identity that can be prompted for input.
///
/// Owned by the host application; prompts only hold a shared handle.
pub trait Participant: Send + Sync {
    fn id(&self) -> ParticipantId;

    /// Whether this identity is allowed to hold a conversation at all.
    fn is_conversation_capable(&self) -> bool;

    /// Deliver one line of text. Delivery failures are the transport's concern.
    fn send_message(&self, message: &Message);
}

pub type SharedParticipant = Arc<dyn Participant>;

/// Reject participants that cannot converse.
///
/// Prompt constructors call this so an invalid prompt is never built.
pub fn ensure_conversation_capable(
    participant: &SharedParticipant,
) -> Result<(), PromptError> {
    if participant.is_conversation_capable() {
        Ok(())
    } else {
        warn!(participant = %participant.id(), "Rejected prompt for non-conversational participant");
        Err(PromptError::InvalidParticipant(participant.id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingParticipant;

    #[test]
    fn test_message_constructors() {
        assert_eq!(Message::prompt("q").kind, MessageKind::Prompt);
        assert_eq!(Message::error("e").kind, MessageKind::Error);
        assert_eq!(Message::info("i").kind, MessageKind::Info);
        assert_eq!(Message::info("i").text, "i");
    }

    #[test]
    fn test_message_display_is_text_only() {
        assert_eq!(Message::error("Invalid unit.").to_string(), "Invalid unit.");
    }

    #[test]
    fn test_capable_participant_accepted() {
        let participant: SharedParticipant = RecordingParticipant::shared();
        assert!(ensure_conversation_capable(&participant).is_ok());
    }

    #[test]
    fn test_incapable_participant_rejected() {
        let recorder = RecordingParticipant::incapable();
        let id = recorder.id();
        let participant: SharedParticipant = recorder;
        assert_eq!(
            ensure_conversation_capable(&participant),
            Err(PromptError::InvalidParticipant(id))
        );
    }
}
