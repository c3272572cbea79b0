// Query handler returning the stored ledger for one employee.

use crate::modules::attendance::core::ledger::EmployeeLedger;
use crate::modules::attendance::core::validation::ValidationError;
use crate::modules::attendance::use_cases::record_punch::handler::ApplicationError;
use crate::shared::infrastructure::ledger_store::LedgerStore;
use std::sync::Arc;

pub struct GetLedgerHandler<TStore>
where
    TStore: LedgerStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> GetLedgerHandler<TStore>
where
    TStore: LedgerStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        employee_id: &str,
    ) -> Result<Option<EmployeeLedger>, ApplicationError> {
        let employee_id = employee_id.trim();
        if employee_id.is_empty() {
            return Err(ValidationError::MissingField("employee_id").into());
        }
        Ok(self.store.load(employee_id).await?)
    }
}
