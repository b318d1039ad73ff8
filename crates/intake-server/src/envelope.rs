use serde::{Deserialize, Serialize};

/// Machine-readable error codes carried by failure envelopes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidInput,
    ValidationError,
    StorageError,
    NetworkError,
    InternalError,
    RateLimit,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::StorageError => "STORAGE_ERROR",
            Self::NetworkError => "NETWORK_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
            Self::RateLimit => "RATE_LIMIT",
        }
    }
}

/// JSON body of every submission response.
///
/// Success: `{ok: true, message, data?}`. Failure: `{ok: false, message, code?}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub ok: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
}

impl<T> ApiEnvelope<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            ok: true,
            message: message.into(),
            data: Some(data),
            code: None,
        }
    }
}

impl ApiEnvelope<()> {
    pub fn failure(message: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            ok: false,
            message: message.into(),
            data: None,
            code: Some(code),
        }
    }
}
