// Evolve function: combine a ledger with an accepted punch to produce the next ledger.
//
// Purpose
// - Append the punch to its day, creating the day on first sight, and recompute that day.
//
// Boundaries
// - No input or output. No side effects.

use crate::modules::attendance::core::accumulator::{WorkdayConfig, recompute};
use crate::modules::attendance::core::events::PunchRecorded;
use crate::modules::attendance::core::ledger::EmployeeLedger;

pub fn evolve(
    mut ledger: EmployeeLedger,
    event: &PunchRecorded,
    config: &WorkdayConfig,
) -> EmployeeLedger {
    ledger.backfill_identity(&event.employee_name, &event.tax_id);
    let day = ledger.day_entry(&event.date);
    day.punches.push(event.time.clone());
    *day = recompute(day, config);
    ledger
}
