use std::path::PathBuf;
use std::sync::Arc;

use intake_types::{LogName, Logger, PersistOutcome, StoredEntry};
use serde::Serialize;

use crate::error::{StoreError, StoreResult};
use crate::file::FileLogBackend;
use crate::traits::LogBackend;

/// Encode an entry as one JSON line, terminator included.
pub fn encode_line<T: Serialize>(entry: &StoredEntry<T>) -> StoreResult<Vec<u8>> {
    let mut line =
        serde_json::to_vec(entry).map_err(|e| StoreError::Serialization(e.to_string()))?;
    line.push(b'\n');
    Ok(line)
}

/// Best-effort, append-only persistence of sanitized records.
///
/// `append` never fails from the caller's point of view: it returns a
/// [`PersistOutcome`] and reports problems through the injected [`Logger`].
/// Each call is an independent attempt; nothing is retried or deduplicated.
pub struct AppendStore {
    backend: Arc<dyn LogBackend>,
    logger: Logger,
}

impl AppendStore {
    pub fn new(backend: Arc<dyn LogBackend>, logger: Logger) -> Self {
        Self { backend, logger }
    }

    /// A store writing `<root>/<name>.jsonl` files.
    pub fn file(root: impl Into<PathBuf>, logger: Logger) -> Self {
        Self::new(Arc::new(FileLogBackend::new(root)), logger)
    }

    pub fn backend(&self) -> &Arc<dyn LogBackend> {
        &self.backend
    }

    /// Record `payload` in the log called `name`.
    ///
    /// Invalid names are refused with a warning and no I/O. Serialization,
    /// directory creation, and write failures are logged as errors. In
    /// every failure case the outcome is `persisted: false`.
    pub async fn append<T>(&self, name: &str, payload: &T) -> PersistOutcome
    where
        T: Serialize + Sync + ?Sized,
    {
        let log = match LogName::parse(name) {
            Ok(log) => log,
            Err(e) => {
                self.logger.warn_with("refusing append to invalid log name", &e);
                return PersistOutcome::dropped();
            }
        };

        match self.try_append(&log, payload).await {
            Ok(()) => {
                self.logger.debug(&format!("appended entry to {log}"));
                PersistOutcome::persisted()
            }
            Err(e) => {
                self.logger.error_with(
                    &format!("failed to persist entry to {}", self.backend.describe(&log)),
                    &e,
                );
                PersistOutcome::dropped()
            }
        }
    }

    async fn try_append<T>(&self, log: &LogName, payload: &T) -> StoreResult<()>
    where
        T: Serialize + Sync + ?Sized,
    {
        let line = encode_line(&StoredEntry::capture(payload))?;
        self.backend.ensure_location().await?;
        self.backend.append_line(log, line).await
    }
}
