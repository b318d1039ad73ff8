use crate::rule::{FieldRule, RuleDecision};
use crate::submission::RawSubmission;

/// A field that must be a JSON object. Its contents are not inspected.
pub struct RequiredObject {
    field: String,
}

impl RequiredObject {
    pub fn new(field: impl Into<String>) -> Self {
        Self { field: field.into() }
    }
}

impl FieldRule for RequiredObject {
    fn field(&self) -> &str {
        &self.field
    }

    fn check(&self, submission: &RawSubmission) -> RuleDecision {
        match submission.get(&self.field) {
            None => RuleDecision::fail(format!("{} is required", self.field)),
            Some(value) if value.is_object() => RuleDecision::Pass,
            Some(_) => RuleDecision::fail(format!("{} must be an object", self.field)),
        }
    }
}
