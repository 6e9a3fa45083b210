//! The discount conversation run by the `parley` binary.
//!
//! Asks how long a discount should run, then how large it is, then prints a
//! summary. Each step builds the next from inside its continuation.

use std::sync::Arc;

use chrono::SecondsFormat;
use parley_core::config::ParleyConfig;
use parley_core::duration::Duration;
use parley_core::types::Timestamp;
use parley_prompt::{
    Advance, ExampleGenerator, Notice, PercentageParser, PercentagePrompt, Prompt, PromptError,
    SharedParticipant, TimePrompt,
};
use tracing::{info, warn};

pub const DURATION_QUESTION: &str = "How long should the discount run?";
pub const PERCENTAGE_QUESTION: &str = "What discount should be applied?";

/// Settings the conversation reads from [`ParleyConfig`].
#[derive(Debug, Clone, Copy)]
pub struct DemoSettings {
    pub cancel_input_chat: bool,
    pub max_fraction: f32,
}

impl From<&ParleyConfig> for DemoSettings {
    fn from(config: &ParleyConfig) -> Self {
        Self {
            cancel_input_chat: config.prompt.cancel_input_chat,
            max_fraction: config.percentage.max_fraction,
        }
    }
}

/// Build the first prompt of the conversation.
pub fn discount_conversation(
    participant: SharedParticipant,
    settings: DemoSettings,
    examples: Arc<ExampleGenerator>,
) -> Result<TimePrompt, PromptError> {
    let prompt = TimePrompt::ask(
        participant,
        DURATION_QUESTION,
        examples,
        move |duration, participant| ask_percentage(participant, settings, duration),
    )?;
    Ok(prompt.with_cancel_input_chat(settings.cancel_input_chat))
}

fn ask_percentage(
    participant: &SharedParticipant,
    settings: DemoSettings,
    duration: Duration,
) -> Advance {
    let parser = PercentageParser::with_max_fraction(settings.max_fraction);
    let prompt = PercentagePrompt::ask(
        Arc::clone(participant),
        PERCENTAGE_QUESTION,
        parser,
        move |fraction, participant| {
            finish(participant, duration, fraction, Timestamp::now());
            Advance::Finish
        },
    );
    match prompt {
        Ok(prompt) => Advance::next(prompt.with_cancel_input_chat(settings.cancel_input_chat)),
        Err(e) => {
            warn!(error = %e, "Could not continue the discount conversation");
            Advance::Finish
        }
    }
}

fn finish(participant: &SharedParticipant, duration: Duration, fraction: f32, now: Timestamp) {
    let text = summary(duration, fraction, now);
    info!(seconds = duration.as_secs(), fraction, "Discount configured");
    let shown = Notice::new(Arc::clone(participant), text).and_then(|notice| notice.begin());
    if let Err(e) = shown {
        warn!(error = %e, "Could not send discount summary");
    }
}

/// The closing summary line.
pub fn summary(duration: Duration, fraction: f32, now: Timestamp) -> String {
    let end = duration.to_future_timestamp(now);
    let ends = match end.to_datetime() {
        Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Secs, true),
        None => format!("at unix time {}", end),
    };
    format!(
        "{}% off for {} (about {}), ending {}",
        percent_label(fraction),
        duration.format(),
        duration.format_rounded(),
        ends
    )
}

/// `fraction` as a percentage with at most two decimals.
fn percent_label(fraction: f32) -> String {
    let percent = (f64::from(fraction) * 10_000.0).round() / 100.0;
    percent.to_string()
}
