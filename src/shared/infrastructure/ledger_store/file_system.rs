// File system implementation of the LedgerStore port.
//
// Purpose
// - Keep one pretty-printed JSON document per employee under a data directory.
//
// Responsibilities
// - Map employee ids to `<data_dir>/<employee_id>.json`, refusing ids that are not a plain file stem.
// - Replace documents atomically: write a temporary sibling, then rename it over the target.

use crate::modules::attendance::core::ledger::EmployeeLedger;
use crate::shared::infrastructure::ledger_store::{LedgerStore, StorageError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct FileSystemLedgerStore {
    data_dir: PathBuf,
}

impl FileSystemLedgerStore {
    /// Creates the data directory if it does not exist yet.
    pub async fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)
            .await
            .map_err(|e| StorageError::from_io(&data_dir, e))?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn document_path(&self, employee_id: &str) -> Result<PathBuf, StorageError> {
        let is_plain_stem = !employee_id.is_empty()
            && employee_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !is_plain_stem {
            return Err(StorageError::InvalidKey(employee_id.to_string()));
        }
        Ok(self.data_dir.join(format!("{employee_id}.json")))
    }
}

#[async_trait::async_trait]
impl LedgerStore for FileSystemLedgerStore {
    async fn load(&self, employee_id: &str) -> Result<Option<EmployeeLedger>, StorageError> {
        let path = self.document_path(employee_id)?;
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::from_io(&path, e)),
        };
        debug!(path = %path.display(), "loaded ledger document");
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    async fn save(&self, ledger: &EmployeeLedger) -> Result<(), StorageError> {
        let path = self.document_path(&ledger.employee_id)?;
        let body = serde_json::to_vec_pretty(ledger)?;
        let staging = self
            .data_dir
            .join(format!(".{}.{}.tmp", ledger.employee_id, Uuid::now_v7()));

        replace_file(&staging, &path, &body).await?;
        debug!(path = %path.display(), bytes = body.len(), "saved ledger document");
        Ok(())
    }
}

/// Writes `body` to `staging`, then renames it over `target`. The staging file is removed on failure.
async fn replace_file(staging: &Path, target: &Path, body: &[u8]) -> Result<(), StorageError> {
    if let Err(e) = fs::write(staging, body).await {
        let _ = fs::remove_file(staging).await;
        return Err(StorageError::from_io(staging, e));
    }
    if let Err(e) = fs::rename(staging, target).await {
        let _ = fs::remove_file(staging).await;
        return Err(StorageError::from_io(target, e));
    }
    Ok(())
}
