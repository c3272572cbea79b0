// Port for persisting employee ledgers as whole documents.
//
// Purpose
// - Let the engine load and save a ledger without knowing where it lives.
//
// Boundaries
// - Whole-document granularity only. No partial updates.
// - Adapters implement this trait; see in_memory and file_system.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::attendance::core::ledger::EmployeeLedger;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error("invalid ledger key: {0:?}")]
    InvalidKey(String),
}

impl StorageError {
    pub fn from_io(path: impl Into<std::path::PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into().display().to_string(),
            source,
        }
    }
}

#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Returns `None` when no ledger exists for the employee yet.
    async fn load(&self, employee_id: &str) -> Result<Option<EmployeeLedger>, StorageError>;
    async fn save(&self, ledger: &EmployeeLedger) -> Result<(), StorageError>;
}

pub mod file_system;
pub mod in_memory;
