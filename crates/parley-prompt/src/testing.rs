//! Test doubles shared by the unit tests.

use std::sync::{Arc, Mutex};

use parley_core::types::ParticipantId;

use crate::participant::{Message, MessageKind, Participant};

/// Participant that records every message it is sent.
pub struct RecordingParticipant {
    id: ParticipantId,
    capable: bool,
    messages: Mutex<Vec<Message>>,
}

impl RecordingParticipant {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self {
            id: ParticipantId::new(),
            capable: true,
            messages: Mutex::new(Vec::new()),
        })
    }

    pub fn incapable() -> Arc<Self> {
        Arc::new(Self {
            id: ParticipantId::new(),
            capable: false,
            messages: Mutex::new(Vec::new()),
        })
    }

    pub fn messages(&self) -> Vec<Message> {
        self.messages.lock().unwrap().clone()
    }

    pub fn count(&self, kind: MessageKind) -> usize {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.kind == kind)
            .count()
    }

    pub fn last_text(&self) -> Option<String> {
        self.messages.lock().unwrap().last().map(|m| m.text.clone())
    }
}

impl Participant for RecordingParticipant {
    fn id(&self) -> ParticipantId {
        self.id
    }

    fn is_conversation_capable(&self) -> bool {
        self.capable
    }

    fn send_message(&self, message: &Message) {
        self.messages.lock().unwrap().push(message.clone());
    }
}
