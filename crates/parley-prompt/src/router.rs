//! Routing of input lines to awaiting prompts.
//!
//! [`ChatRouter`] is the only surface a prompt needs: somewhere to register
//! itself. [`LineRouter`] is an in-memory implementation that also drives
//! delivery, acting on each prompt's [`Step`] after `on_input` returns.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use parley_core::types::ParticipantId;
use tracing::{debug, warn};

use crate::prompt::{begin, Advance, BoxedPrompt, Step};

/// Keeps track of which prompt each participant is answering.
pub trait ChatRouter: Send + Sync {
    /// Make `prompt` the participant's awaiting prompt, replacing any other.
    fn register_participant(&self, participant: ParticipantId, prompt: BoxedPrompt);
}

/// What happened to a delivered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// No prompt was awaiting this participant; the line is ordinary chat.
    Unrouted,
    /// A prompt consumed the line.
    Consumed {
        /// Whether the transport should hide the line from other consumers.
        cancel_chat: bool,
    },
}

/// In-memory router holding at most one awaiting prompt per participant.
#[derive(Default)]
pub struct LineRouter {
    awaiting: Mutex<HashMap<ParticipantId, BoxedPrompt>>,
}

impl LineRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand one input line to the participant's awaiting prompt.
    ///
    /// The prompt is taken out of the map for the duration of `on_input`, so a
    /// re-prompt or chained prompt can register without contention.
    pub fn deliver(&self, participant: ParticipantId, line: &str) -> Delivery {
        let Some(mut prompt) = self.lock().remove(&participant) else {
            warn!(participant = %participant, "No prompt awaiting input; line not routed");
            return Delivery::Unrouted;
        };

        let cancel_chat = prompt.cancel_input_chat();
        let upcoming = match prompt.on_input(line) {
            Step::Reprompt => {
                debug!(participant = %participant, "Re-prompting after rejected answer");
                Some(prompt)
            }
            Step::Advance(Advance::Next(next)) => {
                debug!(participant = %participant, "Answer accepted; next prompt");
                Some(next)
            }
            Step::Advance(Advance::Finish) => {
                debug!(participant = %participant, "Answer accepted; conversation finished");
                None
            }
        };

        if let Some(upcoming) = upcoming {
            if let Err(e) = begin(upcoming, self) {
                warn!(participant = %participant, error = %e, "Conversation dropped");
            }
        }

        Delivery::Consumed { cancel_chat }
    }

    /// Deliver several lines in order.
    pub fn deliver_all<'a>(
        &self,
        participant: ParticipantId,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Vec<Delivery> {
        lines
            .into_iter()
            .map(|line| self.deliver(participant, line))
            .collect()
    }

    pub fn is_awaiting(&self, participant: ParticipantId) -> bool {
        self.lock().contains_key(&participant)
    }

    pub fn pending_count(&self) -> usize {
        self.lock().len()
    }

    /// Drop the participant's awaiting prompt without answering it.
    ///
    /// Returns `true` if a prompt was awaiting.
    pub fn cancel(&self, participant: ParticipantId) -> bool {
        let removed = self.lock().remove(&participant).is_some();
        if removed {
            debug!(participant = %participant, "Awaiting prompt cancelled");
        }
        removed
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<ParticipantId, BoxedPrompt>> {
        self.awaiting.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ChatRouter for LineRouter {
    fn register_participant(&self, participant: ParticipantId, prompt: BoxedPrompt) {
        if self.lock().insert(participant, prompt).is_some() {
            debug!(participant = %participant, "Superseded awaiting prompt");
        }
    }
}
