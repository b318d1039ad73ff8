use intake_types::{InboundAction, Logger, SubmissionKind};
use serde_json::Value;

use crate::config::ValidationLimits;
use crate::error::Rejection;
use crate::record::{PartnershipInquiry, SanitizedRecord, WaitlistSubmission};
use crate::rule::{FieldRule, RuleDecision};
use crate::schema::{self, fields};
use crate::submission::{ParseError, RawSubmission};

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

/// Validator for one submission kind: an ordered table of field rules plus
/// the kind's sanitizer.
///
/// Evaluation is **fail-fast**: action check, then parse, then each rule in
/// order. The first failure is returned and nothing after it runs.
pub struct Validator {
    kind: SubmissionKind,
    rules: Vec<Box<dyn FieldRule>>,
    logger: Logger,
}

impl Validator {
    /// Create a validator with an empty rule table.
    ///
    /// Use [`Self::add_rule`] to build a table, or [`Self::for_kind`] for the
    /// built-in one.
    pub fn new(kind: SubmissionKind, logger: Logger) -> Self {
        Self {
            kind,
            rules: Vec::new(),
            logger,
        }
    }

    /// Create a validator with the kind's built-in rule table.
    pub fn for_kind(kind: SubmissionKind, limits: &ValidationLimits, logger: Logger) -> Self {
        Self {
            kind,
            rules: schema::rules_for(kind, limits),
            logger,
        }
    }

    /// Append a rule to the end of the table.
    pub fn add_rule(&mut self, rule: Box<dyn FieldRule>) {
        self.rules.push(rule);
    }

    pub fn kind(&self) -> SubmissionKind {
        self.kind
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Fields checked, in evaluation order.
    pub fn fields(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.field()).collect()
    }

    /// Validate a raw request body received with `action`.
    pub fn validate(
        &self,
        action: &InboundAction,
        body: &[u8],
    ) -> Result<SanitizedRecord, Rejection> {
        if !action.is_create() {
            return Err(Rejection::MethodNotAllowed {
                method: action.to_string(),
            });
        }

        let submission = RawSubmission::parse(body).map_err(|e| self.parse_rejection(e))?;
        self.sanitize(submission)
    }

    /// Validate an already-parsed value, skipping the action check.
    pub fn validate_value(&self, value: Value) -> Result<SanitizedRecord, Rejection> {
        let submission = RawSubmission::from_value(value).map_err(|e| self.parse_rejection(e))?;
        self.sanitize(submission)
    }

    /// Run every rule in order against a parsed submission.
    pub fn check_rules(&self, submission: &RawSubmission) -> Result<(), Rejection> {
        for rule in &self.rules {
            if let RuleDecision::Fail { reason } = rule.check(submission) {
                return Err(Rejection::validation(rule.field(), reason));
            }
        }
        Ok(())
    }

    fn sanitize(&self, submission: RawSubmission) -> Result<SanitizedRecord, Rejection> {
        self.check_rules(&submission)?;

        match self.kind {
            SubmissionKind::Partnership => {
                let email = submission
                    .trimmed_str(fields::EMAIL)
                    .filter(|e| !e.is_empty())
                    .ok_or_else(|| {
                        let reason = format!("{} is required", fields::EMAIL);
                        Rejection::validation(fields::EMAIL, reason)
                    })?;
                let notes = submission.trimmed_str(fields::NOTES);
                Ok(SanitizedRecord::Partnership(PartnershipInquiry::new(email, notes)))
            }
            SubmissionKind::Waitlist => Ok(SanitizedRecord::Waitlist(WaitlistSubmission::new(
                submission.into_fields(),
            ))),
        }
    }

    fn parse_rejection(&self, err: ParseError) -> Rejection {
        self.logger
            .warn_with(&format!("unparseable {} submission", self.kind), &err);
        match err {
            ParseError::Malformed(_) => {
                Rejection::InvalidInput("request body is not valid JSON".into())
            }
            ParseError::NotAnObject(_) => {
                Rejection::InvalidInput("request body must be a JSON object".into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use intake_types::{MemorySink, Severity};
    use proptest::prelude::*;
    use serde_json::json;

    fn validator(kind: SubmissionKind) -> (Validator, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new("validator", sink.clone());
        (
            Validator::for_kind(kind, &ValidationLimits::default(), logger),
            sink,
        )
    }

    fn body(value: &Value) -> Vec<u8> {
        serde_json::to_vec(value).unwrap()
    }

    fn valid_waitlist() -> Value {
        json!({
            "email": "player@example.com",
            "clubId": "North Side FC",
            "locality": {"city": "Leeds", "country": "GB"},
            "games": ["chess", "go"],
            "playTimes": ["weekday-evening"],
            "consent": {"terms": true, "marketing": false},
            "desiredMembership": "pro",
            "attribution": {"source": "friend"},
            "notes": "  see you there  "
        })
    }

    // -----------------------------------------------------------------------
    // Transport checks
    // -----------------------------------------------------------------------

    #[test]
    fn non_create_action_rejected_before_parse() {
        let (v, sink) = validator(SubmissionKind::Partnership);
        let err = v
            .validate(&InboundAction::from_method("GET"), b"{not json")
            .unwrap_err();
        assert_eq!(err, Rejection::MethodNotAllowed { method: "GET".into() });
        assert!(sink.is_empty());
    }

    #[test]
    fn malformed_body_is_invalid_input_and_warns() {
        let (v, sink) = validator(SubmissionKind::Partnership);
        let err = v.validate(&InboundAction::Create, b"{\"email\":").unwrap_err();
        assert!(matches!(err, Rejection::InvalidInput(_)));
        let warnings = sink.at(Severity::Warn);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("partnership"));
    }

    #[test]
    fn non_object_body_is_invalid_input() {
        let (v, _) = validator(SubmissionKind::Waitlist);
        let err = v.validate(&InboundAction::Create, b"[1,2,3]").unwrap_err();
        assert_eq!(
            err,
            Rejection::InvalidInput("request body must be a JSON object".into())
        );
    }

    // -----------------------------------------------------------------------
    // Partnership
    // -----------------------------------------------------------------------

    #[test]
    fn partnership_sanitizes_to_email_and_notes() {
        let (v, sink) = validator(SubmissionKind::Partnership);
        let input = json!({"email": "  a@b.com ", "notes": " hi ", "company": "Acme", "extra": 1});
        let record = v.validate(&InboundAction::Create, &body(&input)).unwrap();
        assert_eq!(record.to_value(), json!({"email": "a@b.com", "notes": "hi"}));
        assert!(sink.is_empty());
    }

    #[test]
    fn partnership_missing_email_names_field() {
        let (v, _) = validator(SubmissionKind::Partnership);
        let err = v
            .validate(&InboundAction::Create, &body(&json!({"notes": "hi"})))
            .unwrap_err();
        assert_eq!(err.field(), Some("email"));
        assert_eq!(err.to_string(), "email is required");
    }

    #[test]
    fn partnership_notes_limit() {
        let (v, _) = validator(SubmissionKind::Partnership);
        let ok = json!({"email": "a@b.com", "notes": "x".repeat(1000)});
        assert!(v.validate(&InboundAction::Create, &body(&ok)).is_ok());

        let too_long = json!({"email": "a@b.com", "notes": "x".repeat(1001)});
        let err = v.validate(&InboundAction::Create, &body(&too_long)).unwrap_err();
        assert_eq!(err.field(), Some("notes"));
        assert_eq!(err.to_string(), "notes must be at most 1000 characters");
    }

    #[test]
    fn first_failing_rule_wins() {
        let (v, _) = validator(SubmissionKind::Partnership);
        let input = json!({"email": "bad", "notes": "x".repeat(2000)});
        let err = v.validate(&InboundAction::Create, &body(&input)).unwrap_err();
        assert_eq!(err.field(), Some("email"));
    }

    // -----------------------------------------------------------------------
    // Waitlist
    // -----------------------------------------------------------------------

    #[test]
    fn waitlist_passes_input_through_verbatim() {
        let (v, _) = validator(SubmissionKind::Waitlist);
        let input = valid_waitlist();
        let record = v.validate(&InboundAction::Create, &body(&input)).unwrap();
        assert_eq!(record.kind(), SubmissionKind::Waitlist);
        assert_eq!(record.to_value(), input);
    }

    #[test]
    fn waitlist_optional_fields_are_kept_uninspected() {
        let (v, _) = validator(SubmissionKind::Waitlist);
        let mut input = valid_waitlist();
        let extras = json!({
            "desiredMembership": "founding",
            "playIntent": 3,
            "attribution": {"source": "flyer"},
            "connectedUsernames": ["a", "b"],
            "proInterest": null,
            "eventInterest": true,
            "notes": "  see you there  "
        });
        for (key, value) in extras.as_object().unwrap() {
            input[key.as_str()] = value.clone();
        }
        let record = v.validate(&InboundAction::Create, &body(&input)).unwrap();
        assert_eq!(record.to_value(), input);
    }

    #[test]
    fn waitlist_each_required_field_is_named() {
        let (v, _) = validator(SubmissionKind::Waitlist);
        for field in ["email", "clubId", "locality", "games", "playTimes", "consent"] {
            let mut input = valid_waitlist();
            input.as_object_mut().unwrap().remove(field);
            let err = v.validate(&InboundAction::Create, &body(&input)).unwrap_err();
            assert_eq!(err.field(), Some(field), "removing {field}");
        }
    }

    #[test]
    fn waitlist_empty_games_cites_bounds() {
        let (v, _) = validator(SubmissionKind::Waitlist);
        let mut input = valid_waitlist();
        input["games"] = json!([]);
        let err = v.validate(&InboundAction::Create, &body(&input)).unwrap_err();
        assert_eq!(err.to_string(), "games must contain between 1 and 6 items");
    }

    #[test]
    fn waitlist_play_times_upper_bound() {
        let (v, _) = validator(SubmissionKind::Waitlist);
        let mut input = valid_waitlist();
        input["playTimes"] = json!(["a", "b", "c", "d"]);
        let err = v.validate(&InboundAction::Create, &body(&input)).unwrap_err();
        assert_eq!(err.field(), Some("playTimes"));
    }

    #[test]
    fn waitlist_locality_must_be_object() {
        let (v, _) = validator(SubmissionKind::Waitlist);
        let mut input = valid_waitlist();
        input["locality"] = json!(["Leeds"]);
        let err = v.validate(&InboundAction::Create, &body(&input)).unwrap_err();
        assert_eq!(err.to_string(), "locality must be an object");
    }

    #[test]
    fn waitlist_notes_limit_is_300() {
        let (v, _) = validator(SubmissionKind::Waitlist);
        let mut input = valid_waitlist();
        input["notes"] = json!("x".repeat(301));
        let err = v.validate(&InboundAction::Create, &body(&input)).unwrap_err();
        assert_eq!(err.to_string(), "notes must be at most 300 characters");
    }

    #[test]
    fn waitlist_bad_club_id() {
        let (v, _) = validator(SubmissionKind::Waitlist);
        let mut input = valid_waitlist();
        input["clubId"] = json!("x");
        let err = v.validate(&InboundAction::Create, &body(&input)).unwrap_err();
        assert_eq!(err.field(), Some("clubId"));
    }

    // -----------------------------------------------------------------------
    // Custom tables
    // -----------------------------------------------------------------------

    #[test]
    fn empty_table_still_requires_partnership_email() {
        let v = Validator::new(SubmissionKind::Partnership, Logger::tracing("test"));
        assert_eq!(v.rule_count(), 0);
        let err = v.validate_value(json!({})).unwrap_err();
        assert_eq!(err.field(), Some("email"));
    }

    #[test]
    fn add_rule_extends_table() {
        let mut v = Validator::new(SubmissionKind::Waitlist, Logger::tracing("test"));
        v.add_rule(Box::new(crate::rules::RequiredString::new("handle")));
        assert_eq!(v.fields(), ["handle"]);
        assert!(v.validate_value(json!({"handle": "x"})).is_ok());
        assert!(v.validate_value(json!({})).is_err());
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    #[test]
    fn revalidating_sanitized_records_is_stable() {
        for (kind, input) in [
            (SubmissionKind::Partnership, json!({"email": " a@b.com\t", "notes": "  hello  "})),
            (SubmissionKind::Partnership, json!({"email": "a@b.com"})),
            (SubmissionKind::Waitlist, valid_waitlist()),
        ] {
            let (v, _) = validator(kind);
            let first = v.validate_value(input).unwrap();
            let second = v.validate_value(first.to_value()).unwrap();
            assert_eq!(first, second);
        }
    }

    proptest! {
        #[test]
        fn partnership_output_shape_is_fixed(
            local in "[a-z]{1,8}",
            domain in "[a-z]{1,8}",
            pad in "[ \t]{0,3}",
            notes in proptest::option::of("[ -~]{0,40}"),
            extra_key in "[a-z]{1,6}",
        ) {
            let (v, _) = validator(SubmissionKind::Partnership);
            let mut input = json!({ "email": format!("{pad}{local}@{domain}.com{pad}") });
            if let Some(n) = &notes {
                input["notes"] = json!(n);
            }
            if extra_key != "email" && extra_key != "notes" {
                input[extra_key.as_str()] = json!("ignored");
            }
            let record = v.validate_value(input).unwrap();
            let value = record.to_value();
            let mut keys: Vec<&str> =
                value.as_object().unwrap().keys().map(String::as_str).collect();
            keys.sort_unstable();
            prop_assert_eq!(keys, vec!["email", "notes"]);
            let again = v.validate_value(value.clone()).unwrap();
            prop_assert_eq!(again.to_value(), value);
        }
    }
}
