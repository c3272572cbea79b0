// Per-employee attendance ledger.
//
// Purpose
// - Represent the persisted document: employee identity plus one record per worked day.
//
// Responsibilities
// - Keep days in first-seen order with unique dates.
// - Map to the stored field names (`colaborador`, `dias`, `marcacoes`, ...).
//
// Boundaries
// - No input or output. Stores serialize this type as a whole document.

use serde::{Deserialize, Serialize};

use crate::modules::attendance::core::calendar::CalendarDate;
use crate::modules::attendance::core::clock::ClockTime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeLedger {
    #[serde(rename = "id")]
    pub employee_id: String,
    #[serde(rename = "colaborador", default)]
    pub employee_name: String,
    #[serde(rename = "cpf", default)]
    pub tax_id: String,
    #[serde(rename = "dias", default)]
    pub days: Vec<DayRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    #[serde(rename = "data")]
    pub date: CalendarDate,
    #[serde(rename = "marcacoes", default)]
    pub punches: Vec<ClockTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrada: Option<ClockTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saida: Option<ClockTime>,
    #[serde(
        rename = "horas_trabalhadas",
        default,
        skip_serializing_if = "Option::is_none",
        with = "hours_minutes"
    )]
    pub worked_minutes: Option<i64>,
    #[serde(
        rename = "horas_extras",
        default,
        skip_serializing_if = "Option::is_none",
        with = "hours_minutes"
    )]
    pub overtime_minutes: Option<i64>,
}

impl EmployeeLedger {
    pub fn new(
        employee_id: impl Into<String>,
        employee_name: impl Into<String>,
        tax_id: impl Into<String>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            tax_id: tax_id.into(),
            days: Vec::new(),
        }
    }

    pub fn day(&self, date: &CalendarDate) -> Option<&DayRecord> {
        self.days.iter().find(|day| &day.date == date)
    }

    /// Returns the record for `date`, appending an empty one if the date has not been seen yet.
    pub fn day_entry(&mut self, date: &CalendarDate) -> &mut DayRecord {
        match self.days.iter().position(|day| &day.date == date) {
            Some(index) => &mut self.days[index],
            None => {
                self.days.push(DayRecord::new(date.clone()));
                let last = self.days.len() - 1;
                &mut self.days[last]
            }
        }
    }

    /// Fills identity fields that are still empty. Stored values are never overwritten.
    pub fn backfill_identity(&mut self, employee_name: &str, tax_id: &str) {
        if self.employee_name.trim().is_empty() && !employee_name.trim().is_empty() {
            self.employee_name = employee_name.to_string();
        }
        if self.tax_id.trim().is_empty() && !tax_id.trim().is_empty() {
            self.tax_id = tax_id.to_string();
        }
    }
}

impl DayRecord {
    pub fn new(date: CalendarDate) -> Self {
        Self {
            date,
            punches: Vec::new(),
            entrada: None,
            saida: None,
            worked_minutes: None,
            overtime_minutes: None,
        }
    }
}

mod hours_minutes {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use crate::modules::attendance::core::clock::{format_minutes, parse_minutes};

    pub fn serialize<S: Serializer>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(minutes) => serializer.serialize_str(&format_minutes(*minutes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| parse_minutes(&raw).map_err(D::Error::custom))
            .transpose()
    }
}
