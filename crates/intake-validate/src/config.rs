use serde::{Deserialize, Serialize};

/// Inclusive size bounds for a list field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBounds {
    pub min: usize,
    pub max: usize,
}

impl ListBounds {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

/// Tunable limits used by the built-in rule tables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    /// Maximum trimmed length of partnership notes, in characters.
    pub partnership_notes_max: usize,
    /// Maximum trimmed length of waitlist notes, in characters.
    pub waitlist_notes_max: usize,
    /// Number of games a waitlist signup may select.
    pub games: ListBounds,
    /// Number of preferred play time slots.
    pub play_times: ListBounds,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            partnership_notes_max: 1000,
            waitlist_notes_max: 300,
            games: ListBounds::new(1, 6),
            play_times: ListBounds::new(1, 3),
        }
    }
}
