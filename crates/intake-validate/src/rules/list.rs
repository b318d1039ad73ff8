use crate::config::ListBounds;
use crate::rule::{FieldRule, RuleDecision};
use crate::submission::RawSubmission;

/// A JSON array whose length lies within inclusive bounds. Items are not inspected.
pub struct BoundedList {
    field: String,
    bounds: ListBounds,
}

impl BoundedList {
    pub fn new(field: impl Into<String>, bounds: ListBounds) -> Self {
        Self {
            field: field.into(),
            bounds,
        }
    }

    fn bounds_reason(&self) -> String {
        format!(
            "{} must contain between {} and {} items",
            self.field, self.bounds.min, self.bounds.max
        )
    }
}

impl FieldRule for BoundedList {
    fn field(&self) -> &str {
        &self.field
    }

    fn check(&self, submission: &RawSubmission) -> RuleDecision {
        match submission.get(&self.field) {
            None => RuleDecision::fail(self.bounds_reason()),
            Some(value) => match value.as_array() {
                None => RuleDecision::fail(format!("{} must be a list", self.field)),
                Some(items) if self.bounds.contains(items.len()) => RuleDecision::Pass,
                Some(_) => RuleDecision::fail(self.bounds_reason()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rule() -> BoundedList {
        BoundedList::new("games", ListBounds::new(1, 6))
    }

    fn check(value: serde_json::Value) -> RuleDecision {
        rule().check(&RawSubmission::from_value(value).unwrap())
    }

    #[test]
    fn within_bounds_passes() {
        assert!(check(json!({"games": ["chess"]})).is_pass());
        assert!(check(json!({"games": [1, 2, 3, 4, 5, 6]})).is_pass());
    }

    #[test]
    fn empty_and_oversized_fail() {
        let expected = RuleDecision::fail("games must contain between 1 and 6 items");
        assert_eq!(check(json!({"games": []})), expected);
        assert_eq!(check(json!({"games": [1, 2, 3, 4, 5, 6, 7]})), expected);
    }

    #[test]
    fn missing_cites_bounds() {
        assert_eq!(
            check(json!({})),
            RuleDecision::fail("games must contain between 1 and 6 items")
        );
    }

    #[test]
    fn non_list_fails() {
        assert_eq!(
            check(json!({"games": {"0": "chess"}})),
            RuleDecision::fail("games must be a list")
        );
    }
}
