use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::attendance::core::clock::{ClockTime, format_minutes};
use crate::modules::attendance::core::ledger::{DayRecord, EmployeeLedger};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlDay {
    pub date: String,
    pub punches: Vec<String>,
    pub entrada: Option<String>,
    pub saida: Option<String>,
    /// `HH:MM`, negative values carry a leading `-`.
    pub worked_hours: Option<String>,
    pub overtime_hours: Option<String>,
    pub worked_minutes: Option<i64>,
    pub overtime_minutes: Option<i64>,
}

#[derive(SimpleObject, Clone)]
pub struct GqlLedger {
    pub employee_id: String,
    pub employee_name: String,
    pub tax_id: String,
    pub days: Vec<GqlDay>,
}

impl From<DayRecord> for GqlDay {
    fn from(d: DayRecord) -> Self {
        Self {
            date: d.date.to_string(),
            punches: d.punches.iter().map(ClockTime::to_string).collect(),
            entrada: d.entrada.map(|t| t.to_string()),
            saida: d.saida.map(|t| t.to_string()),
            worked_hours: d.worked_minutes.map(format_minutes),
            overtime_hours: d.overtime_minutes.map(format_minutes),
            worked_minutes: d.worked_minutes,
            overtime_minutes: d.overtime_minutes,
        }
    }
}

impl From<EmployeeLedger> for GqlLedger {
    fn from(l: EmployeeLedger) -> Self {
        Self {
            employee_id: l.employee_id,
            employee_name: l.employee_name,
            tax_id: l.tax_id,
            days: l.days.into_iter().map(Into::into).collect(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn ledger(
        &self,
        context: &Context<'_>,
        employee_id: String,
    ) -> GqlResult<Option<GqlLedger>> {
        let state = context.data_unchecked::<AppState>();
        let ledger = state
            .get_ledger_handler
            .handle(&employee_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(ledger.map(Into::into))
    }
}
