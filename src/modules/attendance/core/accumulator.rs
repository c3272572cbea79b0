// Day accumulator: derive the daily summary from a day's punch list.
//
// Purpose
// - Compute entrada, saida, worked minutes and overtime minutes for one day.
//
// Responsibilities
// - Recompute from the full punch list every time, so calling it twice yields the same record.
// - Only the first and last punch feed the computation. Middle punches are kept for audit.
//
// Boundaries
// - Pure. No input or output.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::modules::attendance::core::clock::diff_minutes;
use crate::modules::attendance::core::ledger::DayRecord;

pub const DEFAULT_STANDARD_WORKDAY_MINUTES: i64 = 7 * 60 + 20;
pub const DEFAULT_LUNCH_BREAK_MINUTES: i64 = 60;

/// How the engine treats punches that arrive out of chronological order or repeat a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PunchOrderPolicy {
    /// Record every punch and let durations go negative.
    #[default]
    Accept,
    /// Record every punch but floor worked minutes at zero.
    Clamp,
    /// Refuse a punch earlier by minute than the day's last punch, or equal to one already recorded.
    Reject,
}

impl FromStr for PunchOrderPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "accept" => Ok(Self::Accept),
            "clamp" => Ok(Self::Clamp),
            "reject" => Ok(Self::Reject),
            other => Err(format!("unknown punch order policy: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkdayConfig {
    pub standard_workday_minutes: i64,
    pub lunch_break_minutes: i64,
    pub punch_order: PunchOrderPolicy,
}

impl Default for WorkdayConfig {
    fn default() -> Self {
        Self {
            standard_workday_minutes: DEFAULT_STANDARD_WORKDAY_MINUTES,
            lunch_break_minutes: DEFAULT_LUNCH_BREAK_MINUTES,
            punch_order: PunchOrderPolicy::default(),
        }
    }
}

pub fn recompute(day: &DayRecord, config: &WorkdayConfig) -> DayRecord {
    let mut next = DayRecord {
        date: day.date.clone(),
        punches: day.punches.clone(),
        entrada: None,
        saida: None,
        worked_minutes: None,
        overtime_minutes: None,
    };
    let [first, .., last] = day.punches.as_slice() else {
        return next;
    };

    let mut worked = diff_minutes(first, last) - config.lunch_break_minutes;
    if config.punch_order == PunchOrderPolicy::Clamp {
        worked = worked.max(0);
    }
    next.entrada = Some(first.clone());
    next.saida = Some(last.clone());
    next.worked_minutes = Some(worked);
    next.overtime_minutes = Some((worked - config.standard_workday_minutes).max(0));
    next
}
