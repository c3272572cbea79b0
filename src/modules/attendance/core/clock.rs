// Clock arithmetic for punches.
//
// Purpose
// - Convert between "HH:MM[:SS]" clock strings and minute offsets from midnight, and back.
//
// Boundaries
// - Pure functions, no state.
// - Seconds are accepted on input and ignored by every duration computation.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::modules::attendance::core::calendar::has_digit_groups;
use crate::modules::attendance::core::validation::ValidationError;

/// A validated time of day. Keeps the text it was parsed from so ledgers echo the original punch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    raw: String,
    minutes: i64,
}

impl ClockTime {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let raw = value.trim();
        let (hours, minutes) = parse_clock(raw)?;
        Ok(Self {
            raw: raw.to_string(),
            minutes: i64::from(hours) * 60 + i64::from(minutes),
        })
    }

    pub fn minutes_of_day(&self) -> i64 {
        self.minutes
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.raw
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parses the `HH:MM` prefix of a clock string, accepting an optional `:SS` suffix.
pub fn parse_clock(value: &str) -> Result<(u32, u32), ValidationError> {
    let malformed = || ValidationError::MalformedTime(value.to_string());
    if !has_digit_groups(value, ':', &[2, 2]) && !has_digit_groups(value, ':', &[2, 2, 2]) {
        return Err(malformed());
    }
    let time = NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| malformed())?;
    Ok((time.hour(), time.minute()))
}

/// Minutes from `start` to `end`. Negative when `end` precedes `start`; no day wrap is applied.
pub fn diff_minutes(start: &ClockTime, end: &ClockTime) -> i64 {
    end.minutes_of_day() - start.minutes_of_day()
}

/// Renders minutes as zero-padded `HH:MM`. Negative values keep a leading `-`.
pub fn format_minutes(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let m = minutes.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Inverse of [`format_minutes`].
pub fn parse_minutes(value: &str) -> Result<i64, ValidationError> {
    let malformed = || ValidationError::MalformedDuration(value.to_string());
    let (negative, body) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    let (hours, minutes) = body.split_once(':').ok_or_else(malformed)?;
    if hours.len() < 2 || minutes.len() != 2 {
        return Err(malformed());
    }
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let hours: i64 = hours.parse().map_err(|_| malformed())?;
    let minutes: i64 = minutes.parse().map_err(|_| malformed())?;
    if minutes >= 60 {
        return Err(malformed());
    }
    let total = hours * 60 + minutes;
    Ok(if negative { -total } else { total })
}
