use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::log_name::LogName;

/// The forms Intake accepts. Each kind has its own rule table and its own log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionKind {
    /// Partnership inquiry: an email plus optional notes.
    Partnership,
    /// Waitlist signup with club, locality, games, and consent.
    Waitlist,
}

impl SubmissionKind {
    /// All kinds in declaration order.
    pub const ALL: [SubmissionKind; 2] = [Self::Partnership, Self::Waitlist];

    /// Stable lowercase token, also used as the log name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Partnership => "partnership",
            Self::Waitlist => "waitlist",
        }
    }

    /// The log accepted submissions of this kind are appended to.
    pub fn log_name(&self) -> LogName {
        LogName::from_static(self.as_str())
    }
}

impl fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "partnership" => Ok(Self::Partnership),
            "waitlist" => Ok(Self::Waitlist),
            other => Err(TypeError::UnknownKind(other.to_string())),
        }
    }
}

/// The inbound transport action, reduced to what validation cares about.
///
/// Only [`InboundAction::Create`] is accepted by a validator; anything else
/// carries the original method name for the rejection message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum InboundAction {
    Create,
    Other(String),
}

impl InboundAction {
    /// Map an HTTP method name. `POST` (any case) is a create.
    pub fn from_method(method: &str) -> Self {
        if method.eq_ignore_ascii_case("POST") {
            Self::Create
        } else {
            Self::Other(method.to_ascii_uppercase())
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self, Self::Create)
    }
}

impl fmt::Display for InboundAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("POST"),
            Self::Other(method) => f.write_str(method),
        }
    }
}
