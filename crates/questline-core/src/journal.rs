//! Append-only journal of step outcomes.
//!
//! Every pass through the reward engine appends exactly one record,
//! whatever the outcome. Records are never mutated; the step reference
//! is weak and becomes None if the step is later deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of acting on a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Completed,
    Failed,
    Skipped,
}

impl Outcome {
    /// Stable string form used in storage and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Completed => "completed",
            Outcome::Failed => "failed",
            Outcome::Skipped => "skipped",
        }
    }

    /// Parse from the stable string form.
    pub fn parse(s: &str) -> Option<Outcome> {
        match s {
            "completed" => Some(Outcome::Completed),
            "failed" => Some(Outcome::Failed),
            "skipped" => Some(Outcome::Skipped),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One journal row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRecord {
    pub id: i64,
    /// Owning profile name
    pub profile: String,
    /// Weak reference; None once the step has been deleted
    pub step_id: Option<String>,
    pub outcome: Outcome,
    pub timestamp: DateTime<Utc>,
}

/// Journal tallies grouped by outcome.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct OutcomeCounts {
    pub total: u32,
    pub completed: u32,
    pub failed: u32,
    pub skipped: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_string_roundtrip() {
        for outcome in [Outcome::Completed, Outcome::Failed, Outcome::Skipped] {
            assert_eq!(Outcome::parse(outcome.as_str()), Some(outcome));
        }
        assert_eq!(Outcome::parse("abandoned"), None);
    }
}
