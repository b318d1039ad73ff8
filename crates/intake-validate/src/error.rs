use thiserror::Error;

/// Why a submission was not accepted.
///
/// Rejections are expected outcomes, returned as values. Messages name the
/// offending field but never echo the submitted value.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    /// The inbound action was not a create.
    #[error("method {method} not allowed")]
    MethodNotAllowed { method: String },

    /// The body is not a well-formed JSON object.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A field failed its rule.
    #[error("{reason}")]
    Validation { field: String, reason: String },
}

impl Rejection {
    /// Create a validation rejection for a field.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The field named by a validation rejection.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
