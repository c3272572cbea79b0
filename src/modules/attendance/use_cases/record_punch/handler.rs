// Record punch command handler orchestrates the write flow.
//
// Responsibilities
// - Validate the incoming punch before touching the store.
// - Serialize load/modify/save per employee id.
// - Load the ledger (or start a new one), decide, evolve, and persist the whole document.
//
// Failure handling
// - Nothing is written when validation or the decision fails.
// - When save fails the updated ledger is dropped, so the stored document stays as it was.

use crate::modules::attendance::core::accumulator::WorkdayConfig;
use crate::modules::attendance::core::evolve::evolve;
use crate::modules::attendance::core::ledger::EmployeeLedger;
use crate::modules::attendance::core::validation::ValidationError;
use crate::modules::attendance::use_cases::record_punch::command::{PunchEvent, RecordPunch};
use crate::modules::attendance::use_cases::record_punch::decide::{
    DecideError, decide_record_punch,
};
use crate::shared::infrastructure::keyed_lock::KeyedLocks;
use crate::shared::infrastructure::ledger_store::{LedgerStore, StorageError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("punch rejected: {0}")]
    Domain(#[from] DecideError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerConfig {
    pub workday: WorkdayConfig,
    pub strict_calendar_dates: bool,
}

pub struct RecordPunchHandler<TStore>
where
    TStore: LedgerStore + ?Sized + 'static,
{
    store: Arc<TStore>,
    config: LedgerConfig,
    locks: KeyedLocks,
}

impl<TStore> RecordPunchHandler<TStore>
where
    TStore: LedgerStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>, config: LedgerConfig) -> Self {
        Self {
            store,
            config,
            locks: KeyedLocks::new(),
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub async fn handle(&self, event: PunchEvent) -> Result<EmployeeLedger, ApplicationError> {
        let command = RecordPunch::from_event(event, self.config.strict_calendar_dates)?;
        let _guard = self.locks.lock(&command.employee_id).await;

        let ledger = self
            .store
            .load(&command.employee_id)
            .await?
            .unwrap_or_else(|| {
                EmployeeLedger::new(
                    command.employee_id.clone(),
                    command.employee_name.clone(),
                    command.tax_id.clone(),
                )
            });

        let event = decide_record_punch(&ledger, &command, self.config.workday.punch_order)
            .inspect_err(|reason| {
                warn!(employee_id = %command.employee_id, %reason, "punch rejected");
            })?;
        let ledger = evolve(ledger, &event, &self.config.workday);
        self.store.save(&ledger).await?;

        info!(
            employee_id = %command.employee_id,
            date = %command.date,
            time = %command.time,
            "punch recorded"
        );
        Ok(ledger)
    }
}

#[cfg(test)]
mod record_punch_handler_tests {
    use super::*;
    use crate::modules::attendance::core::accumulator::PunchOrderPolicy;
    use crate::shared::infrastructure::ledger_store::in_memory::InMemoryLedgerStore;
    use crate::tests::fixtures::punch_event::PunchEventBuilder;
    use rstest::{fixture, rstest};
    use tokio::join;

    #[fixture]
    fn store() -> InMemoryLedgerStore {
        InMemoryLedgerStore::new()
    }

    fn handler(store: Arc<InMemoryLedgerStore>) -> RecordPunchHandler<InMemoryLedgerStore> {
        RecordPunchHandler::new(store, LedgerConfig::default())
    }

    #[rstest]
    #[tokio::test]
    async fn handle_creates_the_ledger_on_first_punch(store: InMemoryLedgerStore) {
        let store = Arc::new(store);
        let ledger = handler(store.clone())
            .handle(PunchEventBuilder::new().build())
            .await
            .expect("handle failed");
        assert_eq!(ledger.employee_id, "1001");
        assert_eq!(ledger.employee_name, "Maria Souza");
        assert_eq!(ledger.days.len(), 1);
        assert_eq!(store.load("1001").await.unwrap(), Some(ledger));
    }

    #[rstest]
    #[tokio::test]
    async fn handle_computes_the_day_on_the_second_punch(store: InMemoryLedgerStore) {
        let handler = handler(Arc::new(store));
        handler.handle(PunchEventBuilder::new().build()).await.unwrap();
        let ledger = handler
            .handle(PunchEventBuilder::new().time("18:00:00").build())
            .await
            .unwrap();
        let day = &ledger.days[0];
        assert_eq!(day.worked_minutes, Some(540));
        assert_eq!(day.overtime_minutes, Some(100));
    }

    #[rstest]
    #[tokio::test]
    async fn handle_fails_validation_without_touching_the_store(store: InMemoryLedgerStore) {
        let store = Arc::new(store);
        let result = handler(store.clone())
            .handle(PunchEventBuilder::new().no_time().build())
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Validation(ValidationError::MissingField("time")))
        ));
        assert!(store.is_empty().await);
    }

    #[rstest]
    #[tokio::test]
    async fn handle_fails_if_the_store_is_offline(mut store: InMemoryLedgerStore) {
        store.toggle_offline();
        let result = handler(Arc::new(store))
            .handle(PunchEventBuilder::new().build())
            .await;
        assert_eq!(
            result.unwrap_err().to_string(),
            ApplicationError::Storage(StorageError::Backend("Ledger store offline".into()))
                .to_string()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn handle_leaves_the_stored_ledger_intact_when_save_fails(store: InMemoryLedgerStore) {
        let store = Arc::new(store);
        let handler = handler(store.clone());
        let before = handler.handle(PunchEventBuilder::new().build()).await.unwrap();
        store.set_fail_saves(true);
        let result = handler
            .handle(PunchEventBuilder::new().time("17:00:00").build())
            .await;
        assert!(matches!(result, Err(ApplicationError::Storage(_))));
        assert_eq!(store.load("1001").await.unwrap(), Some(before));
    }

    #[rstest]
    #[tokio::test]
    async fn handle_refuses_out_of_order_punches_under_the_reject_policy(
        store: InMemoryLedgerStore,
    ) {
        let store = Arc::new(store);
        let config = LedgerConfig {
            workday: WorkdayConfig {
                punch_order: PunchOrderPolicy::Reject,
                ..WorkdayConfig::default()
            },
            ..LedgerConfig::default()
        };
        let handler = RecordPunchHandler::new(store.clone(), config);
        let before = handler
            .handle(PunchEventBuilder::new().time("12:00:00").build())
            .await
            .unwrap();
        let result = handler
            .handle(PunchEventBuilder::new().time("08:00:00").build())
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DecideError::OutOfOrder { .. }))
        ));
        assert_eq!(store.load("1001").await.unwrap(), Some(before));
    }

    #[rstest]
    #[tokio::test]
    async fn handle_serializes_concurrent_punches_for_one_employee(store: InMemoryLedgerStore) {
        store.set_delay_load_ms(10);
        let store = Arc::new(store);
        let handler = handler(store.clone());
        let (first, second, third) = join!(
            handler.handle(PunchEventBuilder::new().time("08:00:00").build()),
            handler.handle(PunchEventBuilder::new().time("12:00:00").build()),
            handler.handle(PunchEventBuilder::new().time("17:00:00").build()),
        );
        assert!(first.is_ok() && second.is_ok() && third.is_ok());
        let ledger = store.load("1001").await.unwrap().unwrap();
        assert_eq!(ledger.days[0].punches.len(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn handle_keeps_employees_apart(store: InMemoryLedgerStore) {
        let store = Arc::new(store);
        let handler = handler(store.clone());
        let (first, second) = join!(
            handler.handle(PunchEventBuilder::new().build()),
            handler.handle(
                PunchEventBuilder::new()
                    .employee_id("1002")
                    .employee_name("João Lima")
                    .build()
            ),
        );
        assert!(first.is_ok() && second.is_ok());
        assert_eq!(store.len().await, 2);
        assert_eq!(
            store.load("1002").await.unwrap().unwrap().employee_name,
            "João Lima"
        );
    }
}
