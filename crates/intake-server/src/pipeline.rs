use std::sync::Arc;

use intake_store::{AppendStore, FileLogBackend, FileLogConfig, SyncMode};
use intake_types::{InboundAction, Logger, PersistOutcome, SubmissionKind};
use intake_validate::{Rejection, ValidationLimits, Validator};

use crate::config::ServerConfig;

/// Validator-gated ingestion: validate, then append best-effort.
///
/// Built once by the composition root. The logger handed in is shared (under
/// component names) with the validators and the store.
pub struct IntakePipeline {
    partnership: Validator,
    waitlist: Validator,
    store: AppendStore,
    logger: Logger,
}

impl IntakePipeline {
    pub fn new(store: AppendStore, limits: &ValidationLimits, logger: Logger) -> Self {
        let validator_logger = logger.named("validator");
        Self {
            partnership: Validator::for_kind(
                SubmissionKind::Partnership,
                limits,
                validator_logger.clone(),
            ),
            waitlist: Validator::for_kind(SubmissionKind::Waitlist, limits, validator_logger),
            store,
            logger: logger.named("pipeline"),
        }
    }

    /// Build the pipeline with a file-backed store as described by `config`.
    pub fn from_config(config: &ServerConfig, logger: Logger) -> Self {
        let backend = FileLogBackend::with_config(
            config.data_dir.clone(),
            FileLogConfig {
                extension: config.log_extension.clone(),
                sync_mode: if config.sync_writes {
                    SyncMode::EveryWrite
                } else {
                    SyncMode::OsDefault
                },
            },
        );
        let store = AppendStore::new(Arc::new(backend), logger.named("store"));
        Self::new(store, &config.limits, logger)
    }

    pub fn validator(&self, kind: SubmissionKind) -> &Validator {
        match kind {
            SubmissionKind::Partnership => &self.partnership,
            SubmissionKind::Waitlist => &self.waitlist,
        }
    }

    pub fn store(&self) -> &AppendStore {
        &self.store
    }

    /// Validate a submission and, if accepted, append it to its kind's log.
    ///
    /// Rejections are returned before the store is touched. Once accepted,
    /// the submission stays accepted whatever the store reports.
    pub async fn submit(
        &self,
        kind: SubmissionKind,
        action: &InboundAction,
        body: &[u8],
    ) -> Result<PersistOutcome, Rejection> {
        let record = self.validator(kind).validate(action, body)?;
        let outcome = self.store.append(kind.log_name().as_str(), &record).await;
        self.logger.info_with(
            &format!("accepted {kind} submission"),
            &format!("persisted={}", outcome.persisted),
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_store::InMemoryLogBackend;
    use intake_types::{MemorySink, Severity};
    use serde_json::{json, Value};

    fn pipeline() -> (IntakePipeline, Arc<InMemoryLogBackend>, Arc<MemorySink>) {
        let backend = Arc::new(InMemoryLogBackend::new());
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new("intake", sink.clone());
        let store = AppendStore::new(backend.clone(), logger.named("store"));
        (
            IntakePipeline::new(store, &ValidationLimits::default(), logger),
            backend,
            sink,
        )
    }

    #[tokio::test]
    async fn accepted_partnership_is_stored_sanitized() {
        let (p, backend, _) = pipeline();
        let outcome = p
            .submit(
                SubmissionKind::Partnership,
                &InboundAction::Create,
                br#"{"email":" a@b.com ","notes":"hi","phone":"555"}"#,
            )
            .await
            .unwrap();
        assert!(outcome.persisted);

        let lines = backend.lines("partnership");
        assert_eq!(lines.len(), 1);
        let entry: Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(entry["payload"], json!({"email": "a@b.com", "notes": "hi"}));
    }

    #[tokio::test]
    async fn rejected_submission_never_reaches_store() {
        let (p, backend, _) = pipeline();
        let err = p
            .submit(SubmissionKind::Partnership, &InboundAction::Create, br#"{"notes":"hi"}"#)
            .await
            .unwrap_err();
        assert_eq!(err.field(), Some("email"));
        assert!(!backend.contains("partnership"));
    }

    #[tokio::test]
    async fn store_failure_still_accepts() {
        let (p, backend, sink) = pipeline();
        backend.set_unavailable(true);
        let outcome = p
            .submit(
                SubmissionKind::Partnership,
                &InboundAction::Create,
                br#"{"email":"a@b.com"}"#,
            )
            .await
            .unwrap();
        assert!(!outcome.persisted);
        let errors = sink.at(Severity::Error);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].component, "store");
    }

    #[tokio::test]
    async fn kinds_land_in_their_own_logs() {
        let (p, backend, _) = pipeline();
        let waitlist = json!({
            "email": "p@example.com",
            "clubId": "Club 7",
            "locality": {"city": "Oslo"},
            "games": ["chess"],
            "playTimes": ["sat-am"],
            "consent": {"terms": true}
        });
        p.submit(
            SubmissionKind::Waitlist,
            &InboundAction::Create,
            &serde_json::to_vec(&waitlist).unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(backend.len("waitlist"), 1);
        assert_eq!(backend.len("partnership"), 0);
        let entry: Value = serde_json::from_str(&backend.lines("waitlist")[0]).unwrap();
        assert_eq!(entry["payload"], waitlist);
    }
}
