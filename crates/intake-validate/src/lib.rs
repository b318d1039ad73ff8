//! Validation pipeline for Intake.
//!
//! Every submission passes through a [`Validator`] before anything is
//! written. The validator checks the inbound action, parses the body into a
//! [`RawSubmission`], runs the kind's field rules in declared order, and on
//! success produces a [`SanitizedRecord`]. The first failing check wins;
//! partial results are never surfaced.
//!
//! # Quick Start
//!
//! ```rust
//! use intake_types::{InboundAction, Logger, SubmissionKind};
//! use intake_validate::{ValidationLimits, Validator};
//!
//! let validator = Validator::for_kind(
//!     SubmissionKind::Partnership,
//!     &ValidationLimits::default(),
//!     Logger::tracing("validator"),
//! );
//! let body = br#"{"email": " a@b.com ", "notes": "hi"}"#;
//! let record = validator.validate(&InboundAction::Create, body).unwrap();
//! assert_eq!(record.to_value()["email"], "a@b.com");
//! ```

pub mod config;
pub mod error;
pub mod record;
pub mod rule;
pub mod rules;
pub mod schema;
pub mod submission;
pub mod validator;

pub use config::{ListBounds, ValidationLimits};
pub use error::Rejection;
pub use record::{PartnershipInquiry, SanitizedRecord, WaitlistSubmission};
pub use rule::{FieldRule, RuleDecision};
pub use rules::{BoundedList, BoundedText, Pattern, RequiredObject, RequiredString};
pub use submission::{ParseError, RawSubmission};
pub use validator::Validator;
