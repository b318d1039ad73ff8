use std::any::Any;

use axum::body::{to_bytes, Bytes};
use axum::extract::{Request, State};
use axum::response::{IntoResponse, Json, Response};
use intake_types::{InboundAction, PersistOutcome, SubmissionKind};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::envelope::ApiEnvelope;
use crate::error::{ApiError, ApiResult};
use crate::router::endpoints;
use crate::state::AppState;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "intake-server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [endpoints::PARTNERSHIP, endpoints::WAITLIST],
    }))
}

pub async fn partnership_handler(
    State(state): State<AppState>,
    request: Request,
) -> ApiResult<Json<ApiEnvelope<PersistOutcome>>> {
    submit(&state, SubmissionKind::Partnership, request).await
}

pub async fn waitlist_handler(
    State(state): State<AppState>,
    request: Request,
) -> ApiResult<Json<ApiEnvelope<PersistOutcome>>> {
    submit(&state, SubmissionKind::Waitlist, request).await
}

async fn submit(
    state: &AppState,
    kind: SubmissionKind,
    request: Request,
) -> ApiResult<Json<ApiEnvelope<PersistOutcome>>> {
    let action = InboundAction::from_method(request.method().as_str());

    // Bodies of non-create requests are never read; the validator rejects them first.
    let body = if action.is_create() {
        to_bytes(request.into_body(), state.max_body_bytes)
            .await
            .map_err(|_| ApiError::InvalidInput("request body could not be read".into()))?
    } else {
        Bytes::new()
    };

    let outcome = state.pipeline.submit(kind, &action, &body).await?;
    Ok(Json(ApiEnvelope::success(success_message(kind), outcome)))
}

fn success_message(kind: SubmissionKind) -> &'static str {
    match kind {
        SubmissionKind::Partnership => "Thanks for reaching out. We'll be in touch soon.",
        SubmissionKind::Waitlist => "You're on the waitlist!",
    }
}

/// Response for a handler that panicked. Used by the router's panic catcher.
///
/// The panic payload is logged through [`ApiError::Internal`] and never
/// reaches the client.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}
