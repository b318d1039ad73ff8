use serde_json::Value;

use crate::rule::{FieldRule, RuleDecision};
use crate::submission::RawSubmission;

/// Optional free text with a maximum trimmed length, counted in characters.
pub struct BoundedText {
    field: String,
    max_chars: usize,
}

impl BoundedText {
    pub fn new(field: impl Into<String>, max_chars: usize) -> Self {
        Self {
            field: field.into(),
            max_chars,
        }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }
}

impl FieldRule for BoundedText {
    fn field(&self) -> &str {
        &self.field
    }

    fn check(&self, submission: &RawSubmission) -> RuleDecision {
        match submission.get(&self.field) {
            None => RuleDecision::Pass,
            Some(Value::String(text)) if text.trim().chars().count() <= self.max_chars => {
                RuleDecision::Pass
            }
            Some(Value::String(_)) => RuleDecision::fail(format!(
                "{} must be at most {} characters",
                self.field, self.max_chars
            )),
            Some(_) => RuleDecision::fail(format!("{} must be a string", self.field)),
        }
    }
}
