use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use intake_validate::Rejection;
use thiserror::Error;

use crate::envelope::{ApiEnvelope, ErrorCode};

/// Message returned for anything unexpected. Internal detail goes to the log only.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Server lifecycle errors (configuration, binding, serving).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Errors returned by submission handlers, rendered as failure envelopes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("method {0} not allowed")]
    MethodNotAllowed(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{reason}")]
    Validation { field: String, reason: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidInput(_) | Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MethodNotAllowed(_) | Self::InvalidInput(_) => ErrorCode::InvalidInput,
            Self::Validation { .. } => ErrorCode::ValidationError,
            Self::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Caller-facing message. Never includes internal detail.
    pub fn public_message(&self) -> String {
        match self {
            Self::MethodNotAllowed(_) => "Method not allowed".into(),
            Self::InvalidInput(message) => message.clone(),
            Self::Validation { reason, .. } => reason.clone(),
            Self::Internal(_) => INTERNAL_ERROR_MESSAGE.into(),
        }
    }
}

impl From<Rejection> for ApiError {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::MethodNotAllowed { method } => Self::MethodNotAllowed(method),
            Rejection::InvalidInput(message) => Self::InvalidInput(message),
            Rejection::Validation { field, reason } => Self::Validation { field, reason },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            tracing::error!(detail = %detail, "unhandled error in request pipeline");
        }
        let body = ApiEnvelope::failure(self.public_message(), self.code());
        let mut response = (self.status_code(), Json(body)).into_response();
        if matches!(self, Self::MethodNotAllowed(_)) {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST"));
        }
        response
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
