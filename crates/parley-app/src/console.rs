//! A participant that talks over the terminal.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use owo_colors::OwoColorize;
use parley_core::config::DisplayConfig;
use parley_core::types::ParticipantId;
use parley_prompt::{Message, MessageKind, Participant};

/// Writes each message as one or more lines on an output stream.
///
/// Errors carry `error_marker` and info lines `info_marker`; prompts are
/// printed as-is. Colour is applied only when `display.color` is set.
pub struct ConsoleParticipant {
    id: ParticipantId,
    display: DisplayConfig,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleParticipant {
    pub fn stdout(display: DisplayConfig) -> Arc<Self> {
        Self::with_writer(display, Box::new(std::io::stdout()))
    }

    pub fn with_writer(display: DisplayConfig, out: Box<dyn Write + Send>) -> Arc<Self> {
        Arc::new(Self {
            id: ParticipantId::new(),
            display,
            out: Mutex::new(out),
        })
    }

    /// Print a line of ordinary chat that no prompt consumed.
    pub fn echo_chat(&self, line: &str) {
        let text = format!("<you> {}", line);
        if self.display.color {
            self.write(&text.dimmed().to_string());
        } else {
            self.write(&text);
        }
    }

    /// The text as it will appear on the terminal.
    pub fn render(&self, message: &Message) -> String {
        let marked = match message.kind {
            MessageKind::Prompt => message.text.clone(),
            MessageKind::Error => format!("{} {}", self.display.error_marker, message.text),
            MessageKind::Info => format!("{} {}", self.display.info_marker, message.text),
        };
        if !self.display.color {
            return marked;
        }
        match message.kind {
            MessageKind::Prompt => marked.bright_cyan().to_string(),
            MessageKind::Error => marked.red().to_string(),
            MessageKind::Info => marked.green().to_string(),
        }
    }

    fn write(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(out, "{}", text).and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "Failed to write to console");
        }
    }
}

impl Participant for ConsoleParticipant {
    fn id(&self) -> ParticipantId {
        self.id
    }

    fn is_conversation_capable(&self) -> bool {
        true
    }

    fn send_message(&self, message: &Message) {
        self.write(&self.render(message));
    }
}
