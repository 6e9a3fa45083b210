//! Prompt lifecycle: show a message, await one answer, decide what comes next.
//!
//! A prompt moves through three states:
//! - Constructed: bound to a conversation-capable participant
//! - Awaiting: message shown, registered with the router
//! - Answered: its line was consumed and its [`Step`] dispatched
//!
//! Retrying and chaining happen outside [`AnswerPrompt::on_input`]: the prompt
//! returns a [`Step`] and the router acts on it, so a long streak of bad
//! answers never deepens the call stack.

use std::fmt;

use tracing::debug;

use crate::error::PromptError;
use crate::participant::{ensure_conversation_capable, Message, SharedParticipant};
use crate::router::ChatRouter;

/// Something that talks to one participant.
pub trait Prompt: Send {
    fn participant(&self) -> &SharedParticipant;

    /// The text shown to the participant.
    ///
    /// May differ between calls; callers must not cache it.
    fn message(&self) -> String;

    /// Send [`Self::message`] to the participant.
    fn show(&self) {
        self.participant().send_message(&Message::prompt(self.message()));
    }

    /// Start the conversation: check the participant, then [`Self::show`].
    ///
    /// Prompts that await an answer are started with the free [`begin`]
    /// instead, which also registers them.
    fn begin(&self) -> Result<(), PromptError> {
        ensure_conversation_capable(self.participant())?;
        self.show();
        Ok(())
    }
}

/// A prompt that needs exactly one line of input before it can finish.
pub trait AnswerPrompt: Prompt {
    /// Whether the line that answers this prompt should be hidden from every
    /// other consumer of the participant's chat.
    fn cancel_input_chat(&self) -> bool {
        true
    }

    /// Handle the line the participant answered with.
    ///
    /// Called by the router once per delivered line while this prompt is the
    /// participant's registered prompt.
    fn on_input(&mut self, input: &str) -> Step;
}

pub type BoxedPrompt = Box<dyn AnswerPrompt>;

/// Where a conversation goes once an answer has been accepted.
pub enum Advance {
    /// Begin this prompt next.
    Next(BoxedPrompt),
    /// The conversation is over.
    Finish,
}

impl Advance {
    pub fn next(prompt: impl AnswerPrompt + 'static) -> Self {
        Advance::Next(Box::new(prompt))
    }
}

/// Outcome of handling one line of input.
pub enum Step {
    /// The answer was rejected; ask the same prompt again.
    Reprompt,
    /// The answer was accepted.
    Advance(Advance),
}

impl fmt::Debug for Advance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advance::Next(prompt) => f
                .debug_tuple("Next")
                .field(&prompt.participant().id())
                .finish(),
            Advance::Finish => f.write_str("Finish"),
        }
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Reprompt => f.write_str("Reprompt"),
            Step::Advance(advance) => f.debug_tuple("Advance").field(advance).finish(),
        }
    }
}

/// Show the prompt's message, then register it as the participant's
/// awaiting prompt.
///
/// Fails with [`PromptError::InvalidParticipant`], sending and registering
/// nothing, if the participant cannot converse.
pub fn begin(prompt: BoxedPrompt, router: &dyn ChatRouter) -> Result<(), PromptError> {
    ensure_conversation_capable(prompt.participant())?;
    prompt.show();
    let participant = prompt.participant().id();
    debug!(participant = %participant, "Prompt awaiting input");
    router.register_participant(participant, prompt);
    Ok(())
}

/// A prompt that only informs: it shows its text and expects nothing back.
///
/// Complete as soon as [`Prompt::begin`] has shown it.
pub struct Notice {
    participant: SharedParticipant,
    text: String,
}

impl Notice {
    pub fn new(participant: SharedParticipant, text: impl Into<String>) -> Result<Self, PromptError> {
        ensure_conversation_capable(&participant)?;
        Ok(Self {
            participant,
            text: text.into(),
        })
    }
}

impl Prompt for Notice {
    fn participant(&self) -> &SharedParticipant {
        &self.participant
    }

    fn message(&self) -> String {
        self.text.clone()
    }

    fn show(&self) {
        self.participant.send_message(&Message::info(self.message()));
    }
}
