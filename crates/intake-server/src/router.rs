use axum::routing::{any, get};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// HTTP endpoint paths.
pub mod endpoints {
    pub const HEALTH: &str = "/v1/health";
    pub const INFO: &str = "/v1/info";
    pub const PARTNERSHIP: &str = "/api/partnership";
    pub const WAITLIST: &str = "/api/waitlist";
}

/// Build the axum router with all Intake endpoints.
///
/// Submission routes accept every method so the validator can answer
/// non-POST requests with the failure envelope.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::INFO, get(handler::info_handler))
        .route(endpoints::PARTNERSHIP, any(handler::partnership_handler))
        .route(endpoints::WAITLIST, any(handler::waitlist_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handler::panic_response))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_paths() {
        assert_eq!(endpoints::HEALTH, "/v1/health");
        assert_eq!(endpoints::PARTNERSHIP, "/api/partnership");
        assert_eq!(endpoints::WAITLIST, "/api/waitlist");
    }
}
