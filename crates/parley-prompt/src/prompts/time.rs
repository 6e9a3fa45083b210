//! Duration answers such as `"2 hours 30 min"`.

use std::sync::Arc;

use parley_core::duration::{Duration, TimeUnit};

use crate::error::PromptError;
use crate::parsed::{ParsedPrompt, PromptText};
use crate::participant::SharedParticipant;
use crate::prompt::Advance;
use crate::prompts::example::ExampleGenerator;

/// Prompt for a duration; the continuation receives the parsed [`Duration`].
pub type TimePrompt = ParsedPrompt<Duration>;

impl TimePrompt {
    /// Ask `question`, followed by format help with a fresh example each
    /// time the prompt is shown.
    pub fn ask<F>(
        participant: SharedParticipant,
        question: impl Into<String>,
        examples: Arc<ExampleGenerator>,
        on_parsed: F,
    ) -> Result<Self, PromptError>
    where
        F: FnOnce(Duration, &SharedParticipant) -> Advance + Send + 'static,
    {
        let question = question.into();
        let text = PromptText::dynamic(move || format!("{}\n{}", question, format_help(&examples)));
        ParsedPrompt::new(participant, text, Duration::parse, on_parsed)
    }
}

/// Two lines of help: an example answer and the accepted units.
pub fn format_help(examples: &ExampleGenerator) -> String {
    format!("Ex: {}\nTime Units: {}", examples.example(), unit_list())
}

/// Plural names of every unit, smallest first.
pub fn unit_list() -> String {
    TimeUnit::ALL
        .iter()
        .map(|unit| unit.label(true, false))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::participant::Message;
    use crate::prompt::{AnswerPrompt, Prompt, Step};
    use crate::testing::RecordingParticipant;

    fn seeded() -> Arc<ExampleGenerator> {
        Arc::new(ExampleGenerator::seeded(3))
    }

    #[test]
    fn test_unit_list() {
        assert_eq!(
            unit_list(),
            "seconds, minutes, hours, days, weeks, months, years"
        );
    }

    #[test]
    fn test_message_layout() {
        let prompt = TimePrompt::ask(RecordingParticipant::shared(), "How long?", seeded(), |_, _| {
            Advance::Finish
        })
        .unwrap();

        let message = prompt.message();
        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "How long?");
        assert!(lines[1].starts_with("Ex: "));
        assert!(Duration::parse(&lines[1]["Ex: ".len()..]).is_ok());
        assert_eq!(
            lines[2],
            "Time Units: seconds, minutes, hours, days, weeks, months, years"
        );
    }

    #[test]
    fn test_message_matches_seeded_generator() {
        let prompt = TimePrompt::ask(RecordingParticipant::shared(), "How long?", seeded(), |_, _| {
            Advance::Finish
        })
        .unwrap();
        let reference = ExampleGenerator::seeded(3);
        let expected = format!("How long?\n{}", format_help(&reference));
        assert_eq!(prompt.message(), expected);
    }

    #[test]
    fn test_invalid_answer_reports_reason() {
        let recorder = RecordingParticipant::shared();
        let mut prompt =
            TimePrompt::ask(recorder.clone(), "How long?", seeded(), |_, _| Advance::Finish)
                .unwrap();

        assert!(matches!(prompt.on_input("5 fortnights"), Step::Reprompt));
        assert_eq!(
            recorder.messages(),
            vec![Message::error("Invalid format. Invalid unit.")]
        );
    }

    #[test]
    fn test_valid_answer_reaches_continuation() {
        let seen = Arc::new(Mutex::new(None));
        let s = Arc::clone(&seen);
        let mut prompt =
            TimePrompt::ask(RecordingParticipant::shared(), "How long?", seeded(), move |d, _| {
                *s.lock().unwrap() = Some(d);
                Advance::Finish
            })
            .unwrap();

        assert!(matches!(prompt.on_input("1 hr 30 mins"), Step::Advance(Advance::Finish)));
        assert_eq!(*seen.lock().unwrap(), Some(Duration::from_secs(5400)));
    }
}
