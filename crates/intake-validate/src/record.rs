use intake_types::SubmissionKind;
use serde::Serialize;
use serde_json::{Map, Value};

/// A submission that has passed every rule of its kind.
///
/// Has no public constructor and no `Deserialize`: the
/// only way to obtain one is [`Validator::validate`](crate::Validator::validate)
/// or [`Validator::validate_value`](crate::Validator::validate_value).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SanitizedRecord {
    Partnership(PartnershipInquiry),
    Waitlist(WaitlistSubmission),
}

impl SanitizedRecord {
    pub fn kind(&self) -> SubmissionKind {
        match self {
            Self::Partnership(_) => SubmissionKind::Partnership,
            Self::Waitlist(_) => SubmissionKind::Waitlist,
        }
    }

    /// The record as it will be stored.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Partnership(inquiry) => inquiry.to_value(),
            Self::Waitlist(submission) => Value::Object(submission.fields.clone()),
        }
    }
}

/// Stored shape of a partnership inquiry: exactly `{email, notes}`, trimmed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PartnershipInquiry {
    email: String,
    notes: String,
}

impl PartnershipInquiry {
    pub(crate) fn new(email: &str, notes: Option<&str>) -> Self {
        Self {
            email: email.trim().to_string(),
            notes: notes.map(str::trim).unwrap_or_default().to_string(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Trimmed notes; empty when none were submitted.
    pub fn notes(&self) -> &str {
        &self.notes
    }

    fn to_value(&self) -> Value {
        let mut fields = Map::new();
        fields.insert("email".into(), Value::String(self.email.clone()));
        fields.insert("notes".into(), Value::String(self.notes.clone()));
        Value::Object(fields)
    }
}

/// Stored shape of a waitlist signup: the validated input object, verbatim.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WaitlistSubmission {
    fields: Map<String, Value>,
}

impl WaitlistSubmission {
    pub(crate) fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partnership_trims_and_defaults_notes() {
        let p = PartnershipInquiry::new("  a@b.com ", None);
        assert_eq!(p.email(), "a@b.com");
        assert_eq!(p.notes(), "");
        let record = SanitizedRecord::Partnership(p);
        assert_eq!(record.kind(), SubmissionKind::Partnership);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"email": "a@b.com", "notes": ""})
        );
    }

    #[test]
    fn waitlist_serializes_transparently() {
        let fields = json!({"email": " a@b.com ", "games": ["go"]});
        let Value::Object(map) = fields.clone() else { unreachable!() };
        let record = SanitizedRecord::Waitlist(WaitlistSubmission::new(map));
        assert_eq!(record.kind(), SubmissionKind::Waitlist);
        assert_eq!(serde_json::to_value(&record).unwrap(), fields);
        assert_eq!(record.to_value(), fields);
    }

    #[test]
    fn to_value_matches_serialization() {
        let record = SanitizedRecord::Partnership(PartnershipInquiry::new("a@b.com", Some(" hi ")));
        assert_eq!(record.to_value(), serde_json::to_value(&record).unwrap());
    }
}
