use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::attendance::use_cases::get_ledger::inbound::graphql::GqlLedger;
use crate::modules::attendance::use_cases::record_punch::extraction::ExtractedPunch;
use crate::shell::state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// `date` is `DD/MM/YYYY`, as printed on the punch receipt.
    async fn record_punch(
        &self,
        context: &Context<'_>,
        employee_id: Option<String>,
        employee_name: Option<String>,
        tax_id: Option<String>,
        date: Option<String>,
        time: Option<String>,
    ) -> GqlResult<GqlLedger> {
        let state = context.data_unchecked::<AppState>();

        let event = ExtractedPunch {
            employee_id,
            employee_name,
            tax_id,
            date,
            time,
        }
        .into_event()
        .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let ledger = state
            .record_punch_handler
            .handle(event)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ledger.into())
    }
}
