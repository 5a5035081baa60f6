use std::path::{Path, PathBuf};
use std::time::Instant;

use form::SubmissionRecord;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};

/// Every submission ever appended, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersistedDocument {
    records: Vec<SubmissionRecord>,
}

impl PersistedDocument {
    pub fn records(&self) -> &[SubmissionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<SubmissionRecord> {
        self.records
    }
}

/// Single JSON document holding an array of submission records.
///
/// Appends are a read-modify-write of the whole file. They are serialized
/// behind one async mutex per store, and each write lands in a sibling
/// temp file that is renamed over the document, so a reader never sees a
/// half-written array.
#[derive(Debug)]
pub struct DocumentStore {
    path: PathBuf,
    writer: Mutex<()>,
}

impl DocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document. A missing or blank file is an empty document.
    pub async fn load(&self) -> StoreResult<PersistedDocument> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(PersistedDocument::default());
            }
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(PersistedDocument::default());
        }

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Append `record` as the last entry and return the new record count.
    pub async fn append(&self, record: SubmissionRecord) -> StoreResult<usize> {
        let _guard = self.writer.lock().await;
        let start = Instant::now();

        let mut document = self.load().await?;
        let created = document.is_empty();
        document.records.push(record);
        self.write(&document).await?;

        info!(
            path = %self.path.display(),
            records = document.len(),
            created,
            duration_ms = start.elapsed().as_millis() as u64,
            "submission appended"
        );
        Ok(document.len())
    }

    async fn write(&self, document: &PersistedDocument) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(document).map_err(StoreError::Encode)?;
        let tmp = self.temp_path();

        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|err| StoreError::io(&tmp, err))?;
        if let Err(err) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StoreError::io(&self.path, err));
        }
        debug!(path = %self.path.display(), bytes = bytes.len(), "document written");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
