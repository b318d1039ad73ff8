use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of a log: the sanitized payload wrapped with its capture time.
///
/// Entries are immutable once written and carry no identifier; their
/// position in the log is the only ordering signal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredEntry<T> {
    /// Capture time, serialized as ISO-8601 UTC with millisecond precision.
    #[serde(with = "iso_millis")]
    pub received_at: DateTime<Utc>,
    pub payload: T,
}

impl<T> StoredEntry<T> {
    /// Wrap a payload with the current time.
    pub fn capture(payload: T) -> Self {
        Self::at(Utc::now(), payload)
    }

    /// Wrap a payload with an explicit capture time.
    pub fn at(received_at: DateTime<Utc>, payload: T) -> Self {
        Self {
            received_at,
            payload,
        }
    }
}

/// Result of a store attempt, decoupled from whether the request was accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistOutcome {
    pub persisted: bool,
}

impl PersistOutcome {
    pub const fn persisted() -> Self {
        Self { persisted: true }
    }

    pub const fn dropped() -> Self {
        Self { persisted: false }
    }
}

mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn entry_serializes_camel_case_with_millis() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        let entry = StoredEntry::at(ts, json!({"email": "a@b.com"}));
        let line = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            line,
            r#"{"receivedAt":"2024-03-09T14:05:00.000Z","payload":{"email":"a@b.com"}}"#
        );
    }

    #[test]
    fn entry_parses_back() {
        let line = r#"{"receivedAt":"2024-03-09T14:05:00.250Z","payload":{"n":1}}"#;
        let entry: StoredEntry<serde_json::Value> = serde_json::from_str(line).unwrap();
        assert_eq!(entry.payload["n"], 1);
        assert_eq!(serde_json::to_string(&entry).unwrap(), line);
    }

    #[test]
    fn capture_uses_now() {
        let before = Utc::now();
        let entry = StoredEntry::capture(());
        assert!(entry.received_at >= before);
    }

    #[test]
    fn persist_outcome_shape() {
        assert_eq!(
            serde_json::to_value(PersistOutcome::persisted()).unwrap(),
            json!({"persisted": true})
        );
        assert!(!PersistOutcome::dropped().persisted);
    }
}
