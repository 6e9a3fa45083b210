//! Conversion of raw participant input into typed values.

use crate::error::FormatError;

/// Converts one line of participant input into a `T`.
///
/// Implementations must be deterministic and free of side effects: the same
/// text always yields the same value or the same failure reason.
pub trait InputParser<T>: Send + Sync {
    /// Attempt to parse the given input.
    ///
    /// Returns a [`FormatError`] with a human-readable reason when the input
    /// cannot be converted.
    fn parse_input(&self, input: &str) -> Result<T, FormatError>;
}

impl<T, F> InputParser<T> for F
where
    F: Fn(&str) -> Result<T, FormatError> + Send + Sync,
{
    fn parse_input(&self, input: &str) -> Result<T, FormatError> {
        self(input)
    }
}
