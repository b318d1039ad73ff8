use std::sync::Arc;

use intake_types::Logger;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::pipeline::IntakePipeline;
use crate::router::build_router;
use crate::state::AppState;

/// Intake HTTP server.
pub struct IntakeServer {
    config: ServerConfig,
    pipeline: Arc<IntakePipeline>,
}

impl IntakeServer {
    /// Compose the pipeline from `config`, sharing `logger` with every component.
    pub fn new(config: ServerConfig, logger: Logger) -> Self {
        let pipeline = Arc::new(IntakePipeline::from_config(&config, logger));
        Self { config, pipeline }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::new(
            Arc::clone(&self.pipeline),
            self.config.max_body_bytes,
        ))
    }

    /// Start serving requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            data_dir = %self.config.data_dir.display(),
            "intake server listening on {}",
            self.config.bind_addr
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
