//! Ready-made prompts for common answer types.

pub mod example;
pub mod percentage;
pub mod time;

pub use example::ExampleGenerator;
pub use percentage::{PercentageParser, PercentagePrompt};
pub use time::TimePrompt;
