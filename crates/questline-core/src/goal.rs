//! Goals and their ordered steps.
//!
//! A goal belongs to one profile and owns an ordered collection of
//! steps. It transitions from Active to Completed when its last
//! incomplete step is completed; the `active` flag separately controls
//! whether the goal is visible to the recommender.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Lowest allowed difficulty rating.
pub const DIFFICULTY_MIN: u8 = 1;
/// Highest allowed difficulty rating.
pub const DIFFICULTY_MAX: u8 = 5;

/// Check a difficulty rating against the 1..=5 scale.
pub fn validate_difficulty(field: &'static str, value: u8) -> Result<(), ValidationError> {
    if (DIFFICULTY_MIN..=DIFFICULTY_MAX).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value: value as i64,
            min: DIFFICULTY_MIN as i64,
            max: DIFFICULTY_MAX as i64,
        })
    }
}

/// Goal lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Goal is in progress (initial state)
    Active,
    /// All steps are completed (terminal state)
    Completed,
}

impl Default for GoalStatus {
    fn default() -> Self {
        GoalStatus::Active
    }
}

/// A player-defined objective composed of ordered steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    /// Owning profile name
    pub profile: String,
    pub title: String,
    pub description: String,
    /// Base difficulty (1-5)
    pub difficulty: u8,
    /// Lifecycle status, flips to Completed with the last step
    pub status: GoalStatus,
    /// Set when the last step completes
    pub completed_at: Option<DateTime<Utc>>,
    /// Visibility flag for the recommender; independent of status
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new active goal.
    ///
    /// # Errors
    /// Returns an error if difficulty is outside 1..=5.
    pub fn new(
        id: impl Into<String>,
        profile: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: u8,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        validate_difficulty("goal.difficulty", difficulty)?;
        Ok(Self {
            id: id.into(),
            profile: profile.into(),
            title: title.into(),
            description: description.into(),
            difficulty,
            status: GoalStatus::Active,
            completed_at: None,
            active: true,
            created_at,
        })
    }
}

/// An atomic actionable unit within a goal.
///
/// The completion flag is set once and never reversed; failures
/// accumulate in `fail_count` while the step stays incomplete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    /// Owning goal id
    pub goal_id: String,
    pub title: String,
    /// Difficulty rating (1-5)
    pub difficulty: u8,
    /// Presentation/selection order within the goal
    pub position: i32,
    pub completed: bool,
    /// Number of recorded failures on this step
    pub fail_count: u32,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Step {
    /// Create a new incomplete step.
    ///
    /// # Errors
    /// Returns an error if difficulty is outside 1..=5.
    pub fn new(
        id: impl Into<String>,
        goal_id: impl Into<String>,
        title: impl Into<String>,
        difficulty: u8,
        position: i32,
    ) -> Result<Self, ValidationError> {
        validate_difficulty("step.difficulty", difficulty)?;
        Ok(Self {
            id: id.into(),
            goal_id: goal_id.into(),
            title: title.into(),
            difficulty,
            position,
            completed: false,
            fail_count: 0,
            completed_at: None,
        })
    }
}
