// Domain event produced when a punch is accepted for a ledger.
//
// Purpose
// - Carry the validated punch from the decider into evolve.

use crate::modules::attendance::core::calendar::CalendarDate;
use crate::modules::attendance::core::clock::ClockTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunchRecorded {
    pub employee_id: String,
    pub employee_name: String,
    pub tax_id: String,
    pub date: CalendarDate,
    pub time: ClockTime,
}
