use std::sync::LazyLock;

use regex::Regex;

use crate::rule::{FieldRule, RuleDecision};
use crate::submission::RawSubmission;

/// `local@domain.tld` with no whitespace anywhere.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// 2-24 characters, alphanumeric at both ends, interior may also use space, `_`, `-`, `.`.
static CLUB_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 _.\-]{0,22}[A-Za-z0-9]$").expect("club id regex is valid")
});

/// A declared shape a string field must match after trimming.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    Email,
    ClubId,
}

impl Pattern {
    pub fn is_match(&self, value: &str) -> bool {
        match self {
            Self::Email => EMAIL_REGEX.is_match(value),
            Self::ClubId => CLUB_ID_REGEX.is_match(value),
        }
    }

    /// Completes the sentence "`<field>` must be ...".
    pub fn description(&self) -> &'static str {
        match self {
            Self::Email => "a valid email address",
            Self::ClubId => concat!(
                "2-24 letters, digits, spaces, '_', '-' or '.', ",
                "starting and ending with a letter or digit"
            ),
        }
    }
}

/// A string that must be present and non-empty after trimming, and
/// optionally match a [`Pattern`].
pub struct RequiredString {
    field: String,
    pattern: Option<Pattern>,
}

impl RequiredString {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            pattern: None,
        }
    }

    /// Additionally require the trimmed value to match `pattern`.
    pub fn matching(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }
}

impl FieldRule for RequiredString {
    fn field(&self) -> &str {
        &self.field
    }

    fn check(&self, submission: &RawSubmission) -> RuleDecision {
        let Some(value) = submission.get(&self.field) else {
            return RuleDecision::fail(format!("{} is required", self.field));
        };
        let Some(text) = value.as_str() else {
            return RuleDecision::fail(format!("{} must be a string", self.field));
        };
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return RuleDecision::fail(format!("{} is required", self.field));
        }
        if let Some(pattern) = self.pattern {
            if !pattern.is_match(trimmed) {
                return RuleDecision::fail(format!(
                    "{} must be {}",
                    self.field,
                    pattern.description()
                ));
            }
        }
        RuleDecision::Pass
    }
}
