// Pure decision function for recording a punch.
//
// Purpose
// - Validate the command against the current ledger under the configured punch order policy.
//
// Responsibilities
// - Produce the PunchRecorded event on success.
// - Accept and Clamp never refuse a punch.
// - Reject refuses a punch whose minute of day is earlier than the day's last punch, or one
//   already recorded that day. Seconds are ignored by the order check.
// - Never perform input or output.

use crate::modules::attendance::core::accumulator::PunchOrderPolicy;
use crate::modules::attendance::core::events::PunchRecorded;
use crate::modules::attendance::core::ledger::EmployeeLedger;
use crate::modules::attendance::use_cases::record_punch::command::RecordPunch;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("punch {time} precedes the last recorded punch {previous}")]
    OutOfOrder { previous: String, time: String },

    #[error("punch {time} is already recorded for this day")]
    Duplicate { time: String },
}

pub fn decide_record_punch(
    ledger: &EmployeeLedger,
    command: &RecordPunch,
    policy: PunchOrderPolicy,
) -> Result<PunchRecorded, DecideError> {
    if policy == PunchOrderPolicy::Reject {
        check_order(ledger, command)?;
    }
    Ok(PunchRecorded {
        employee_id: command.employee_id.clone(),
        employee_name: command.employee_name.clone(),
        tax_id: command.tax_id.clone(),
        date: command.date.clone(),
        time: command.time.clone(),
    })
}

fn check_order(ledger: &EmployeeLedger, command: &RecordPunch) -> Result<(), DecideError> {
    let Some(day) = ledger.day(&command.date) else {
        return Ok(());
    };
    if day.punches.iter().any(|punch| punch == &command.time) {
        return Err(DecideError::Duplicate {
            time: command.time.to_string(),
        });
    }
    match day.punches.last() {
        Some(last) if command.time.minutes_of_day() < last.minutes_of_day() => {
            Err(DecideError::OutOfOrder {
                previous: last.to_string(),
                time: command.time.to_string(),
            })
        }
        _ => Ok(()),
    }
}
