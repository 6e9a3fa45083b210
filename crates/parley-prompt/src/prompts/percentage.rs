//! Percentage answers such as `"15%"` or `"2.5"`.

use parley_core::error::FormatError;
use parley_core::parser::InputParser;

use crate::error::PromptError;
use crate::parsed::{ParsedPrompt, PromptText};
use crate::participant::SharedParticipant;
use crate::prompt::Advance;

pub const OUT_OF_RANGE: &str =
    "Invalid percentage range. Must be greater than 0 and less than or equal to 100.";

/// Parses a percentage into a fraction: `"25%"` is `0.25`.
///
/// Every `%` sign is ignored. Accepted fractions are greater than zero and at
/// most `max_fraction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageParser {
    max_fraction: f32,
}

impl PercentageParser {
    pub const DEFAULT_MAX_FRACTION: f32 = 1.0;

    pub fn new() -> Self {
        Self::with_max_fraction(Self::DEFAULT_MAX_FRACTION)
    }

    pub fn with_max_fraction(max_fraction: f32) -> Self {
        Self { max_fraction }
    }

    pub fn max_fraction(&self) -> f32 {
        self.max_fraction
    }
}

impl Default for PercentageParser {
    fn default() -> Self {
        Self::new()
    }
}

impl InputParser<f32> for PercentageParser {
    fn parse_input(&self, input: &str) -> Result<f32, FormatError> {
        let cleaned = input.replace('%', "");
        let percent: f32 = cleaned
            .trim()
            .parse()
            .map_err(|e| FormatError::new(format!("Invalid format. {}", e)))?;

        let fraction = percent / 100.0;
        if !fraction.is_finite() || fraction <= 0.0 || fraction > self.max_fraction {
            return Err(FormatError::new(OUT_OF_RANGE));
        }
        Ok(fraction)
    }
}

/// Prompt for a percentage; the continuation receives the fraction.
pub type PercentagePrompt = ParsedPrompt<f32>;

impl PercentagePrompt {
    /// Ask `question` and accept the answer with a [`PercentageParser`].
    pub fn ask<F>(
        participant: SharedParticipant,
        question: impl Into<PromptText>,
        parser: PercentageParser,
        on_parsed: F,
    ) -> Result<Self, PromptError>
    where
        F: FnOnce(f32, &SharedParticipant) -> Advance + Send + 'static,
    {
        ParsedPrompt::new(participant, question, parser, on_parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::participant::{Message, Participant};
    use crate::prompt::{AnswerPrompt, Prompt, Step};
    use crate::testing::RecordingParticipant;

    fn parse(input: &str) -> Result<f32, FormatError> {
        PercentageParser::new().parse_input(input)
    }

    #[test]
    fn test_plain_number() {
        assert_eq!(parse("25"), Ok(0.25));
    }

    #[test]
    fn test_percent_sign_is_ignored() {
        assert_eq!(parse("50%"), Ok(0.5));
        assert_eq!(parse("%5%"), Ok(0.05));
    }

    #[test]
    fn test_fractional_percent() {
        assert_eq!(parse("12.5%"), Ok(0.125));
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(parse(" 10 % "), Ok(0.1));
    }

    #[test]
    fn test_upper_bound_inclusive() {
        assert_eq!(parse("100%"), Ok(1.0));
        assert_eq!(parse("100.5").unwrap_err().reason, OUT_OF_RANGE);
    }

    #[test]
    fn test_zero_and_negative_rejected() {
        assert_eq!(parse("0").unwrap_err().reason, OUT_OF_RANGE);
        assert_eq!(parse("-5%").unwrap_err().reason, OUT_OF_RANGE);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(parse("NaN").unwrap_err().reason, OUT_OF_RANGE);
        assert_eq!(parse("inf").unwrap_err().reason, OUT_OF_RANGE);
    }

    #[test]
    fn test_non_numeric_rejected() {
        let err = parse("lots").unwrap_err();
        assert!(err.reason.starts_with("Invalid format. "), "{}", err.reason);
        let err = parse("%").unwrap_err();
        assert!(err.reason.starts_with("Invalid format. "), "{}", err.reason);
    }

    #[test]
    fn test_custom_max_fraction() {
        let parser = PercentageParser::with_max_fraction(100.0);
        assert_eq!(parser.parse_input("250%"), Ok(2.5));
        assert_eq!(parser.max_fraction(), 100.0);
        assert_eq!(PercentageParser::default().max_fraction(), 1.0);
    }

    #[test]
    fn test_prompt_reprompts_on_out_of_range() {
        let recorder = RecordingParticipant::shared();
        let mut prompt = PercentagePrompt::ask(
            recorder.clone(),
            "Discount?",
            PercentageParser::new(),
            |_, _| Advance::Finish,
        )
        .unwrap();

        assert_eq!(prompt.message(), "Discount?");
        assert!(matches!(prompt.on_input("150%"), Step::Reprompt));
        assert_eq!(recorder.messages(), vec![Message::error(OUT_OF_RANGE)]);
    }

    #[test]
    fn test_prompt_rejects_incapable_participant() {
        let recorder = RecordingParticipant::incapable();
        let id = recorder.id();
        let result = PercentagePrompt::ask(recorder, "Discount?", PercentageParser::new(), |_, _| {
            Advance::Finish
        });
        assert_eq!(result.err(), Some(PromptError::InvalidParticipant(id)));
    }
}
