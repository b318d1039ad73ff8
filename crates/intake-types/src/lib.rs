//! Foundation types for Intake.
//!
//! Intake accepts form submissions over HTTP, validates them, and appends
//! each accepted record to a per-kind log. Every other Intake crate depends
//! on `intake-types`.
//!
//! # Key Types
//!
//! - [`SubmissionKind`]: Which form a submission belongs to, and which log it lands in
//! - [`InboundAction`]: Transport method reduced to create-or-not
//! - [`LogName`]: Validated `[a-z0-9_-]+` log token
//! - [`StoredEntry`]: One timestamped line in a log
//! - [`PersistOutcome`]: Whether a store attempt actually persisted
//! - [`Logger`]: Logging capability injected into the validator and the store

pub mod entry;
pub mod error;
pub mod kind;
pub mod log_name;
pub mod logger;

pub use entry::{PersistOutcome, StoredEntry};
pub use error::TypeError;
pub use kind::{InboundAction, SubmissionKind};
pub use log_name::LogName;
pub use logger::{EventSink, LogEvent, Logger, MemorySink, Severity, TracingSink};
