//! HTTP server for Intake.
//!
//! Hosts the partnership and waitlist submission endpoints. Each request
//! runs through the [`IntakePipeline`]: the kind's validator decides, the
//! append store records best-effort, and the handler answers with an
//! [`ApiEnvelope`]. Accepted submissions get `200` even when the store could
//! not persist them; `data.persisted` says which.

pub mod config;
pub mod envelope;
pub mod error;
pub mod handler;
pub mod pipeline;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use envelope::{ApiEnvelope, ErrorCode};
pub use error::{ApiError, ApiResult, ServerError, ServerResult};
pub use pipeline::IntakePipeline;
pub use router::{build_router, endpoints};
pub use server::IntakeServer;
pub use state::AppState;
