// Command data types for recording a punch.
//
// Purpose
// - PunchEvent: the loosely typed punch as handed over by extraction. Any field may be missing.
// - RecordPunch: the validated command the handler acts on.
//
// Responsibilities
// - Enforce the required fields (employee id, date, time) and their shape.
// - Be independent of transport layer details.

use serde::{Deserialize, Serialize};

use crate::modules::attendance::core::calendar::CalendarDate;
use crate::modules::attendance::core::clock::ClockTime;
use crate::modules::attendance::core::validation::ValidationError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchEvent {
    pub employee_id: Option<String>,
    pub employee_name: Option<String>,
    pub tax_id: Option<String>,
    /// ISO `YYYY-MM-DD`.
    pub date: Option<String>,
    /// `HH:MM:SS`.
    pub time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPunch {
    pub employee_id: String,
    pub employee_name: String,
    pub tax_id: String,
    pub date: CalendarDate,
    pub time: ClockTime,
}

impl RecordPunch {
    pub fn from_event(event: PunchEvent, strict_dates: bool) -> Result<Self, ValidationError> {
        let employee_id = required(event.employee_id, "employee_id")?;
        let date = required(event.date, "date")?;
        let time = required(event.time, "time")?;
        Ok(Self {
            employee_id,
            employee_name: optional(event.employee_name),
            tax_id: optional(event.tax_id),
            date: CalendarDate::parse_iso(&date, strict_dates)?,
            time: ClockTime::parse(&time)?,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ValidationError::MissingField(field))
}

fn optional(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}
