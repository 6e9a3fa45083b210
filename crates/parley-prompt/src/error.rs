//! Error types for the prompt engine.

use parley_core::types::ParticipantId;

/// Errors from building prompts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    #[error("participant {0} cannot take part in a conversation")]
    InvalidParticipant(ParticipantId),
}
