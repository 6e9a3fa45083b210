//! Prompt conversation engine for Parley.
//!
//! Registers a participant as awaiting input, parses the line they answer
//! with, and either re-prompts with the parse error or hands the typed value
//! to a continuation that may begin the next prompt of the conversation.

pub mod error;
pub mod parsed;
pub mod participant;
pub mod prompt;
pub mod prompts;
pub mod router;

#[cfg(test)]
mod testing;

pub use error::PromptError;
pub use parsed::{Continuation, ParsedPrompt, PromptText};
pub use participant::{
    ensure_conversation_capable, Message, MessageKind, Participant, SharedParticipant,
};
pub use prompt::{begin, Advance, AnswerPrompt, BoxedPrompt, Notice, Prompt, Step};
pub use prompts::{ExampleGenerator, PercentageParser, PercentagePrompt, TimePrompt};
pub use router::{ChatRouter, Delivery, LineRouter};
