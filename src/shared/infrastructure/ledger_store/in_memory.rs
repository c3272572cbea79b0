// In memory implementation of the LedgerStore port.
//
// Purpose
// - Support handler tests and local development without a data directory.
//
// Responsibilities
// - Keep one ledger per employee id in a map.
// - Simulate backend outages through toggle_offline.

use crate::modules::attendance::core::ledger::EmployeeLedger;
use crate::shared::infrastructure::ledger_store::{LedgerStore, StorageError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryLedgerStore {
    inner: RwLock<HashMap<String, EmployeeLedger>>,
    is_offline: bool,
    fail_saves: AtomicBool,
    delay_load_ms: AtomicUsize,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Loads keep working while saves fail, as with a read-only backend.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn set_delay_load_ms(&self, ms: usize) {
        self.delay_load_ms.store(ms, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl LedgerStore for InMemoryLedgerStore {
    async fn load(&self, employee_id: &str) -> Result<Option<EmployeeLedger>, StorageError> {
        if self.is_offline {
            return Err(StorageError::Backend("Ledger store offline".into()));
        }
        let delay = self.delay_load_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay as u64)).await;
        }
        Ok(self.inner.read().await.get(employee_id).cloned())
    }

    async fn save(&self, ledger: &EmployeeLedger) -> Result<(), StorageError> {
        if self.is_offline || self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("Ledger store offline".into()));
        }
        self.inner
            .write()
            .await
            .insert(ledger.employee_id.clone(), ledger.clone());
        Ok(())
    }
}
