//! Log name validation.
//!
//! Valid log names:
//! - Must be non-empty
//! - May only contain lowercase ASCII letters, digits, `_` and `-`
//!
//! The grammar keeps names safe to use directly as file stems: no path
//! separators, no dots, no case folding surprises.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::TypeError;

/// A validated log name matching `[a-z0-9_-]+`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogName(String);

impl LogName {
    /// Validate and wrap a log name.
    ///
    /// # Examples
    ///
    /// ```
    /// use intake_types::LogName;
    ///
    /// assert!(LogName::parse("waitlist").is_ok());
    /// assert!(LogName::parse("partner_2024-q1").is_ok());
    /// assert!(LogName::parse("").is_err());
    /// assert!(LogName::parse("Waitlist").is_err());
    /// assert!(LogName::parse("../etc").is_err());
    /// ```
    pub fn parse(name: &str) -> Result<Self, TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidLogName {
                name: name.to_string(),
                reason: "log name must not be empty",
            });
        }
        if !name.bytes().all(is_log_name_byte) {
            return Err(TypeError::InvalidLogName {
                name: name.to_string(),
                reason: "only lowercase letters, digits, '_' and '-' are allowed",
            });
        }
        Ok(Self(name.to_string()))
    }

    /// Wrap a name known at compile time to be valid.
    pub(crate) fn from_static(name: &'static str) -> Self {
        debug_assert!(!name.is_empty() && name.bytes().all(is_log_name_byte));
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_log_name_byte(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-')
}

impl fmt::Display for LogName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LogName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for LogName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
