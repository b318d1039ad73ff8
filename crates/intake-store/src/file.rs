use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use intake_types::LogName;

use crate::error::{StoreError, StoreResult};
use crate::traits::LogBackend;

/// Flush/sync strategy for log appends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncMode {
    /// `fsync` after every append (safest, highest latency).
    EveryWrite,
    /// Rely on OS page-cache buffering.
    #[default]
    OsDefault,
}

/// Configuration for [`FileLogBackend`].
#[derive(Clone, Debug)]
pub struct FileLogConfig {
    /// File extension for log files, without the dot (default: `jsonl`).
    pub extension: String,
    /// Sync strategy.
    pub sync_mode: SyncMode,
}

impl Default for FileLogConfig {
    fn default() -> Self {
        Self {
            extension: "jsonl".into(),
            sync_mode: SyncMode::default(),
        }
    }
}

/// Stores each log as a newline-delimited JSON file under one directory.
///
/// On-disk layout:
/// ```text
/// <root>/<name>.<extension>
/// ```
///
/// Files are opened in append mode for every write and the whole line is
/// handed to a single `write_all`, so concurrent appenders (in this process
/// or others) never interleave partial lines for entries of ordinary size.
/// No locks are taken.
pub struct FileLogBackend {
    root: PathBuf,
    config: FileLogConfig,
}

impl FileLogBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_config(root, FileLogConfig::default())
    }

    pub fn with_config(root: impl Into<PathBuf>, config: FileLogConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing a log.
    pub fn path_for(&self, name: &LogName) -> PathBuf {
        self.root
            .join(format!("{}.{}", name.as_str(), self.config.extension))
    }
}

#[async_trait]
impl LogBackend for FileLogBackend {
    async fn ensure_location(&self) -> StoreResult<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    async fn append_line(&self, name: &LogName, line: Vec<u8>) -> StoreResult<()> {
        let path = self.path_for(name);
        let sync = matches!(self.config.sync_mode, SyncMode::EveryWrite);

        tokio::task::spawn_blocking(move || -> StoreResult<()> {
            let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
            file.write_all(&line)?;
            if sync {
                file.sync_all()?;
            }
            Ok(())
        })
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
    }

    fn describe(&self, name: &LogName) -> String {
        self.path_for(name).display().to_string()
    }
}
