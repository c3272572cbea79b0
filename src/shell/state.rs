use crate::modules::attendance::use_cases::get_ledger::handler::GetLedgerHandler;
use crate::modules::attendance::use_cases::record_punch::handler::{
    LedgerConfig, RecordPunchHandler,
};
use crate::shared::infrastructure::ledger_store::LedgerStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub record_punch_handler: Arc<RecordPunchHandler<dyn LedgerStore>>,
    pub get_ledger_handler: Arc<GetLedgerHandler<dyn LedgerStore>>,
}

impl AppState {
    /// Both handlers share the one store so reads see every committed punch.
    pub fn new(store: Arc<dyn LedgerStore>, config: LedgerConfig) -> Self {
        Self {
            record_punch_handler: Arc::new(RecordPunchHandler::new(store.clone(), config)),
            get_ledger_handler: Arc::new(GetLedgerHandler::new(store)),
        }
    }
}
