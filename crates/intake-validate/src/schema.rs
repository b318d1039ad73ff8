//! Rule tables for each submission kind.
//!
//! Order matters: the validator stops at the first failing rule, so the
//! tables below define which error a caller sees first.

use intake_types::SubmissionKind;

use crate::config::ValidationLimits;
use crate::rule::FieldRule;
use crate::rules::{BoundedList, BoundedText, Pattern, RequiredObject, RequiredString};

/// Field names used by the built-in tables.
pub mod fields {
    pub const EMAIL: &str = "email";
    pub const NOTES: &str = "notes";
    pub const CLUB_ID: &str = "clubId";
    pub const LOCALITY: &str = "locality";
    pub const GAMES: &str = "games";
    pub const PLAY_TIMES: &str = "playTimes";
    pub const CONSENT: &str = "consent";
}

/// Build the rule table for a kind.
pub fn rules_for(kind: SubmissionKind, limits: &ValidationLimits) -> Vec<Box<dyn FieldRule>> {
    match kind {
        SubmissionKind::Partnership => partnership_rules(limits),
        SubmissionKind::Waitlist => waitlist_rules(limits),
    }
}

fn partnership_rules(limits: &ValidationLimits) -> Vec<Box<dyn FieldRule>> {
    vec![
        Box::new(RequiredString::new(fields::EMAIL).matching(Pattern::Email)),
        Box::new(BoundedText::new(fields::NOTES, limits.partnership_notes_max)),
    ]
}

fn waitlist_rules(limits: &ValidationLimits) -> Vec<Box<dyn FieldRule>> {
    vec![
        Box::new(RequiredString::new(fields::EMAIL).matching(Pattern::Email)),
        Box::new(RequiredString::new(fields::CLUB_ID).matching(Pattern::ClubId)),
        Box::new(RequiredObject::new(fields::LOCALITY)),
        Box::new(BoundedList::new(fields::GAMES, limits.games)),
        Box::new(BoundedList::new(fields::PLAY_TIMES, limits.play_times)),
        Box::new(RequiredObject::new(fields::CONSENT)),
        Box::new(BoundedText::new(fields::NOTES, limits.waitlist_notes_max)),
    ]
}
