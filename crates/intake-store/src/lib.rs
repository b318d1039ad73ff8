//! Append-only submission logs for Intake.
//!
//! Each submission kind has one log, addressed by a [`LogName`]. Every
//! accepted record is wrapped in a [`StoredEntry`] with its capture time,
//! serialized to a single JSON line, and appended. Entries are never
//! rewritten, truncated, or compacted.
//!
//! # Backends
//!
//! All backends implement the [`LogBackend`] trait:
//!
//! - [`FileLogBackend`] -- one `<root>/<name>.jsonl` file per log
//! - [`InMemoryLogBackend`] -- `HashMap`-based backend for tests and embedding
//!
//! # Design Rules
//!
//! 1. [`AppendStore::append`] never returns an error. Every failure becomes
//!    `PersistOutcome { persisted: false }` plus a logged error.
//! 2. Invalid log names are refused before any I/O.
//! 3. Serialization completes in memory before anything is touched on disk.
//! 4. One entry is one append-mode write; nothing is read back or rewritten.
//!
//! [`LogName`]: intake_types::LogName
//! [`StoredEntry`]: intake_types::StoredEntry

pub mod error;
pub mod file;
pub mod memory;
pub mod store;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use file::{FileLogBackend, FileLogConfig, SyncMode};
pub use memory::InMemoryLogBackend;
pub use store::{encode_line, AppendStore};
pub use traits::LogBackend;
