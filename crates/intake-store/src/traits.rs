use async_trait::async_trait;
use intake_types::LogName;

use crate::error::StoreResult;

/// Storage for append-only logs.
///
/// All implementations must satisfy these invariants:
/// - `append_line` adds exactly the given bytes to the end of the named log,
///   in one operation, without reading or rewriting existing content.
/// - A log that has never been appended to does not exist.
/// - `ensure_location` is idempotent and safe to call concurrently.
#[async_trait]
pub trait LogBackend: Send + Sync {
    /// Make sure the place logs live in exists, creating it if needed.
    async fn ensure_location(&self) -> StoreResult<()>;

    /// Append one encoded line (terminator included) to the named log.
    async fn append_line(&self, name: &LogName, line: Vec<u8>) -> StoreResult<()>;

    /// Human-readable location of a log, for operator messages.
    fn describe(&self, name: &LogName) -> String;
}
