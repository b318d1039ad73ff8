use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid log name {name:?}: {reason}")]
    InvalidLogName { name: String, reason: &'static str },

    #[error("unknown submission kind: {0}")]
    UnknownKind(String),
}
