// Calendar dates used to bucket punches into days.
//
// Purpose
// - Hold an ISO `YYYY-MM-DD` date as it appears in ledgers.
// - Rearrange extracted `DD/MM/YYYY` dates into ISO form.
//
// Notes
// - The structural check only looks at digit groups. `31/02/2024` passes unless strict
//   calendar validation is requested.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::modules::attendance::core::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(String);

impl CalendarDate {
    /// Accepts any `DDDD-DD-DD` string. With `strict`, the date must also exist on the calendar.
    pub fn parse_iso(value: &str, strict: bool) -> Result<Self, ValidationError> {
        let value = value.trim();
        if !has_digit_groups(value, '-', &[4, 2, 2]) {
            return Err(ValidationError::MalformedDate(value.to_string()));
        }
        if strict && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
            return Err(ValidationError::MalformedDate(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_iso(&value, false)
    }
}

impl From<CalendarDate> for String {
    fn from(value: CalendarDate) -> Self {
        value.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rewrites `DD/MM/YYYY` as `YYYY-MM-DD`.
pub fn to_iso_date(value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if !has_digit_groups(value, '/', &[2, 2, 4]) {
        return Err(ValidationError::MalformedDate(value.to_string()));
    }
    let mut parts = value.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(day), Some(month), Some(year)) => Ok(format!("{year}-{month}-{day}")),
        _ => Err(ValidationError::MalformedDate(value.to_string())),
    }
}

pub(crate) fn has_digit_groups(value: &str, separator: char, widths: &[usize]) -> bool {
    let groups: Vec<&str> = value.split(separator).collect();
    groups.len() == widths.len()
        && groups
            .iter()
            .zip(widths)
            .all(|(group, width)| group.len() == *width && group.bytes().all(|b| b.is_ascii_digit()))
}
