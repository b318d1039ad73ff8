/// Errors from log backends.
///
/// These never leave [`AppendStore::append`](crate::AppendStore::append);
/// they are logged and reported as `persisted: false`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error from the underlying storage.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The entry could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A blocking storage task panicked or was cancelled.
    #[error("storage task failed: {0}")]
    Task(String),

    /// The backend refuses writes.
    #[error("log backend unavailable")]
    Unavailable,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
