//! Prompts whose answer is parsed into a typed value.
//!
//! [`ParsedPrompt`] owns the whole retry policy: a rejected answer sends the
//! parse error to the participant and re-prompts; an accepted one is handed
//! to the continuation exactly once. Concrete prompts only supply a message,
//! a parser and a continuation.

use std::sync::Arc;

use parley_core::parser::InputParser;
use tracing::{debug, warn};

use crate::error::PromptError;
use crate::participant::{ensure_conversation_capable, Message, SharedParticipant};
use crate::prompt::{Advance, AnswerPrompt, BoxedPrompt, Prompt, Step};

/// What to do with an accepted answer.
///
/// Receives the participant so it can build the next prompt of the chain.
pub type Continuation<T> = Box<dyn FnOnce(T, &SharedParticipant) -> Advance + Send>;

/// The text of a prompt, fixed or recomputed on every showing.
pub enum PromptText {
    Static(String),
    Dynamic(Box<dyn Fn() -> String + Send>),
}

impl PromptText {
    pub fn dynamic(render: impl Fn() -> String + Send + 'static) -> Self {
        PromptText::Dynamic(Box::new(render))
    }

    pub fn render(&self) -> String {
        match self {
            PromptText::Static(text) => text.clone(),
            PromptText::Dynamic(render) => render(),
        }
    }
}

impl From<String> for PromptText {
    fn from(text: String) -> Self {
        PromptText::Static(text)
    }
}

impl From<&str> for PromptText {
    fn from(text: &str) -> Self {
        PromptText::Static(text.to_string())
    }
}

/// An answer prompt that parses its input into a `T`.
pub struct ParsedPrompt<T> {
    participant: SharedParticipant,
    text: PromptText,
    parser: Arc<dyn InputParser<T>>,
    on_parsed: Option<Continuation<T>>,
    cancel_input_chat: bool,
}

impl<T: 'static> ParsedPrompt<T> {
    /// Create a prompt for `participant`.
    ///
    /// Fails with [`PromptError::InvalidParticipant`] if the participant
    /// cannot converse.
    pub fn new<P, F>(
        participant: SharedParticipant,
        text: impl Into<PromptText>,
        parser: P,
        on_parsed: F,
    ) -> Result<Self, PromptError>
    where
        P: InputParser<T> + 'static,
        F: FnOnce(T, &SharedParticipant) -> Advance + Send + 'static,
    {
        Self::with_shared_parser(participant, text, Arc::new(parser), on_parsed)
    }

    /// Like [`Self::new`] with a parser shared between several prompts.
    pub fn with_shared_parser<F>(
        participant: SharedParticipant,
        text: impl Into<PromptText>,
        parser: Arc<dyn InputParser<T>>,
        on_parsed: F,
    ) -> Result<Self, PromptError>
    where
        F: FnOnce(T, &SharedParticipant) -> Advance + Send + 'static,
    {
        ensure_conversation_capable(&participant)?;
        Ok(Self {
            participant,
            text: text.into(),
            parser,
            on_parsed: Some(Box::new(on_parsed)),
            cancel_input_chat: true,
        })
    }

    /// A prompt for the same participant as `previous`.
    pub fn following<P, F>(
        previous: &dyn Prompt,
        text: impl Into<PromptText>,
        parser: P,
        on_parsed: F,
    ) -> Result<Self, PromptError>
    where
        P: InputParser<T> + 'static,
        F: FnOnce(T, &SharedParticipant) -> Advance + Send + 'static,
    {
        Self::new(Arc::clone(previous.participant()), text, parser, on_parsed)
    }

    /// Let the answering line reach other chat consumers too.
    pub fn with_cancel_input_chat(mut self, cancel: bool) -> Self {
        self.cancel_input_chat = cancel;
        self
    }

    pub fn boxed(self) -> BoxedPrompt {
        Box::new(self)
    }
}

impl<T: 'static> Prompt for ParsedPrompt<T> {
    fn participant(&self) -> &SharedParticipant {
        &self.participant
    }

    fn message(&self) -> String {
        self.text.render()
    }
}

impl<T: 'static> AnswerPrompt for ParsedPrompt<T> {
    fn cancel_input_chat(&self) -> bool {
        self.cancel_input_chat
    }

    fn on_input(&mut self, input: &str) -> Step {
        let value = match self.parser.parse_input(input) {
            Ok(value) => value,
            Err(err) => {
                debug!(participant = %self.participant.id(), reason = %err, "Answer rejected");
                self.participant.send_message(&Message::error(err.reason));
                return Step::Reprompt;
            }
        };

        match self.on_parsed.take() {
            Some(on_parsed) => Step::Advance(on_parsed(value, &self.participant)),
            None => {
                warn!(participant = %self.participant.id(), "Prompt already answered; ignoring input");
                Step::Advance(Advance::Finish)
            }
        }
    }
}
