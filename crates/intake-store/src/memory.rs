use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use intake_types::LogName;

use crate::error::{StoreError, StoreResult};
use crate::traits::LogBackend;

/// In-memory log backend.
///
/// Intended for tests and embedding. Lines are kept per log behind a
/// `RwLock`. [`Self::set_unavailable`] makes every write fail, which is how
/// tests exercise the degraded path.
#[derive(Default)]
pub struct InMemoryLogBackend {
    logs: RwLock<HashMap<LogName, Vec<String>>>,
    unavailable: AtomicBool,
}

impl InMemoryLogBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines of a log, terminators stripped. Empty if the log does not exist.
    pub fn lines(&self, name: &str) -> Vec<String> {
        let Ok(log) = LogName::parse(name) else {
            return Vec::new();
        };
        self.logs
            .read()
            .expect("lock poisoned")
            .get(&log)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of entries in a log.
    pub fn len(&self, name: &str) -> usize {
        self.lines(name).len()
    }

    /// Whether a log has ever been appended to.
    pub fn contains(&self, name: &str) -> bool {
        LogName::parse(name)
            .map(|log| self.logs.read().expect("lock poisoned").contains_key(&log))
            .unwrap_or(false)
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl LogBackend for InMemoryLogBackend {
    async fn ensure_location(&self) -> StoreResult<()> {
        self.check_available()
    }

    async fn append_line(&self, name: &LogName, line: Vec<u8>) -> StoreResult<()> {
        self.check_available()?;
        let text = String::from_utf8(line).map_err(|e| StoreError::Serialization(e.to_string()))?;
        let text = text.strip_suffix('\n').unwrap_or(&text).to_string();
        self.logs
            .write()
            .expect("lock poisoned")
            .entry(name.clone())
            .or_default()
            .push(text);
        Ok(())
    }

    fn describe(&self, name: &LogName) -> String {
        format!("memory:{name}")
    }
}
