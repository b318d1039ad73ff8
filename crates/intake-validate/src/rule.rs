use crate::submission::RawSubmission;

/// The outcome of a single field rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleDecision {
    /// The field is acceptable; proceed to the next rule.
    Pass,
    /// The field failed; the submission is rejected with this reason.
    Fail { reason: String },
}

impl RuleDecision {
    pub fn fail(reason: impl Into<String>) -> Self {
        Self::Fail {
            reason: reason.into(),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// A single check on one field of a submission.
///
/// Rules are evaluated in the order they were added to a validator, and
/// each rule only looks at its own field. The trait is object-safe and
/// `Send + Sync` so rule tables can be stored as `Vec<Box<dyn FieldRule>>`.
pub trait FieldRule: Send + Sync {
    /// The field this rule inspects.
    fn field(&self) -> &str;

    /// Check the field and return a decision.
    fn check(&self, submission: &RawSubmission) -> RuleDecision;
}
