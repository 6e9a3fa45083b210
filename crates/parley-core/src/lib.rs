pub mod config;
pub mod duration;
pub mod error;
pub mod parser;
pub mod types;

pub use config::ParleyConfig;
pub use duration::{Duration, TimeUnit};
pub use error::{DurationError, FormatError, ParleyError, Result};
pub use parser::InputParser;
pub use types::*;
