//! Human-readable time spans.
//!
//! A [`Duration`] is a whole number of seconds. It parses from and renders to
//! text of the form `"<int> <unit> [<int> <unit> ...]"`, where each unit can be
//! written in singular, plural, abbreviated or abbreviated-plural form:
//! `"1 hour 30 mins"`, `"2 wk"`, `"10 Seconds"`.
//!
//! Units are fixed-point, not calendar-accurate: a month is 28 days and a year
//! is 336 days (12 such months).

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DurationError, FormatError};
use crate::types::Timestamp;

const ODD_ARGUMENTS: &str = "Invalid format. Odd number of arguments.";
const NON_INTEGER: &str = "Invalid format. Non integer unit value.";
const NEGATIVE_TIME: &str = "Invalid format. Negative time.";
const INVALID_UNIT: &str = "Invalid format. Invalid unit.";
const TOO_LARGE: &str = "Invalid format. Time value too large.";

// =============================================================================
// TimeUnit
// =============================================================================

/// A unit of time, ordered from smallest to largest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    /// Every unit, smallest first.
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Year,
    ];

    /// Number of seconds in one of this unit.
    pub const fn seconds(self) -> u64 {
        match self {
            TimeUnit::Second => 1,
            TimeUnit::Minute => 60,
            TimeUnit::Hour => 3_600,
            TimeUnit::Day => 86_400,
            TimeUnit::Week => 604_800,
            TimeUnit::Month => 2_419_200,
            TimeUnit::Year => 29_030_400,
        }
    }

    /// Singular full name, e.g. `"minute"`.
    pub const fn name(self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }

    /// Singular abbreviation, e.g. `"min"`.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            TimeUnit::Second => "sec",
            TimeUnit::Minute => "min",
            TimeUnit::Hour => "hr",
            TimeUnit::Day => "day",
            TimeUnit::Week => "wk",
            TimeUnit::Month => "mth",
            TimeUnit::Year => "yr",
        }
    }

    /// The unit's name in the requested form. Plurals append `s`.
    pub fn label(self, plural: bool, abbreviated: bool) -> String {
        let base = if abbreviated {
            self.abbreviation()
        } else {
            self.name()
        };
        if plural {
            format!("{}s", base)
        } else {
            base.to_string()
        }
    }

    /// Resolve a unit from any of its four name forms, ignoring case.
    pub fn from_name(name: &str) -> Option<TimeUnit> {
        Self::ALL.into_iter().find(|unit| {
            [(false, false), (true, false), (false, true), (true, true)]
                .into_iter()
                .any(|(plural, abbreviated)| {
                    unit.label(plural, abbreviated).eq_ignore_ascii_case(name)
                })
        })
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Duration
// =============================================================================

/// A non-negative span of time with one-second precision.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Duration {
    seconds: u64,
}

impl Duration {
    pub const ZERO: Duration = Duration { seconds: 0 };

    pub const fn from_secs(seconds: u64) -> Self {
        Self { seconds }
    }

    /// `amount` whole units. Saturates at `u64::MAX` seconds.
    pub const fn from_units(amount: u64, unit: TimeUnit) -> Self {
        Self {
            seconds: amount.saturating_mul(unit.seconds()),
        }
    }

    pub const fn as_secs(&self) -> u64 {
        self.seconds
    }

    pub const fn is_zero(&self) -> bool {
        self.seconds == 0
    }

    /// Parse space-separated `<value> <unit>` pairs and sum them.
    ///
    /// Units may repeat and appear in any order; `"2 hr 1 hr"` is three hours.
    /// Trailing spaces are ignored; the empty string is still rejected.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let tokens: Vec<&str> = text.trim_end_matches(' ').split(' ').collect();
        if tokens.len() % 2 != 0 {
            return Err(FormatError::new(ODD_ARGUMENTS));
        }

        let mut total: u64 = 0;
        for pair in tokens.chunks_exact(2) {
            let value = parse_amount(pair[0])?;
            let unit = TimeUnit::from_name(pair[1]).ok_or_else(|| FormatError::new(INVALID_UNIT))?;

            total = value
                .checked_mul(unit.seconds())
                .and_then(|seconds| total.checked_add(seconds))
                .ok_or_else(|| FormatError::new(TOO_LARGE))?;
        }

        Ok(Self::from_secs(total))
    }

    /// The timestamp reached once this duration has elapsed after `now`.
    pub fn to_future_timestamp(&self, now: Timestamp) -> Timestamp {
        let offset = i64::try_from(self.seconds).unwrap_or(i64::MAX);
        Timestamp(now.0.saturating_add(offset))
    }

    /// [`Self::to_future_timestamp`] measured from the system clock.
    pub fn from_now(&self) -> Timestamp {
        self.to_future_timestamp(Timestamp::now())
    }

    /// The time remaining from `now` until `target`.
    ///
    /// Fails if `target` is already in the past. `target == now` is zero.
    pub fn until(target: Timestamp, now: Timestamp) -> Result<Self, DurationError> {
        if now > target {
            return Err(DurationError::Elapsed { target, now });
        }
        Ok(Self::from_secs(target.0.abs_diff(now.0)))
    }

    /// [`Self::until`] measured from the system clock.
    pub fn until_now(target: Timestamp) -> Result<Self, DurationError> {
        Self::until(target, Timestamp::now())
    }

    /// Every nonzero unit from year down to second, abbreviated:
    /// `3661` seconds is `"1 hr 1 min 1 sec"`. Zero is the empty string.
    pub fn format(&self) -> String {
        self.render(true)
    }

    /// Like [`Self::format`] with full unit names: `"1 hour 1 minute 1 second"`.
    pub fn format_long(&self) -> String {
        self.render(false)
    }

    /// Only the largest nonzero unit: `3661` seconds is `"1 hr"`.
    pub fn format_rounded(&self) -> String {
        match self.terms().next() {
            Some((amount, unit)) => term(amount, unit, true),
            None => self.format(),
        }
    }

    pub fn as_std(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.seconds)
    }

    fn render(&self, abbreviated: bool) -> String {
        self.terms()
            .map(|(amount, unit)| term(amount, unit, abbreviated))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Greedy mixed-radix decomposition, largest unit first, zero terms skipped.
    fn terms(&self) -> impl Iterator<Item = (u64, TimeUnit)> {
        let mut remainder = self.seconds;
        TimeUnit::ALL.into_iter().rev().filter_map(move |unit| {
            let amount = remainder / unit.seconds();
            remainder %= unit.seconds();
            (amount > 0).then_some((amount, unit))
        })
    }
}

/// A whole, non-negative amount. `-0` is zero.
fn parse_amount(token: &str) -> Result<u64, FormatError> {
    if let Some(magnitude) = token.strip_prefix('-') {
        return match magnitude.parse::<u64>() {
            Ok(0) => Ok(0),
            Ok(_) => Err(FormatError::new(NEGATIVE_TIME)),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Err(FormatError::new(NEGATIVE_TIME)),
                _ => Err(FormatError::new(NON_INTEGER)),
            },
        };
    }
    token.parse::<u64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => FormatError::new(TOO_LARGE),
        _ => FormatError::new(NON_INTEGER),
    })
}

fn term(amount: u64, unit: TimeUnit, abbreviated: bool) -> String {
    format!("{} {}", amount, unit.label(amount != 1, abbreviated))
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for Duration {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<std::time::Duration> for Duration {
    /// Sub-second precision is truncated.
    fn from(value: std::time::Duration) -> Self {
        Self::from_secs(value.as_secs())
    }
}

// =============================================================================
// Tests
// =============================================================================
