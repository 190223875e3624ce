//! Goal health scoring and the level curve.
//!
//! Health is a composite 0-100 metric built from named terms so the
//! presentation layer can explain *why* a goal scored the way it did:
//!
//! | Term        | Source                                 | Range   |
//! |-------------|----------------------------------------|---------|
//! | progress    | completed/total steps × 50             | 0..=50  |
//! | recency     | journal entries in last 7 days × 2     | 0..=20  |
//! | consistency | completions in last 7 days × 3         | 0..=15  |
//! | failures    | all-time failures × 3, subtracted      | -15..=0 |
//! | baseline    | constant                               | 10      |
//!
//! The summed total is clamped to [0, 100].

use serde::{Deserialize, Serialize};

use crate::goal::Step;

/// XP span of one level.
pub const XP_PER_LEVEL: u32 = 200;

/// Percentage of a goal's steps that are completed, truncated to an
/// integer. A goal with zero steps reports 0.
pub fn progress(steps: &[Step]) -> u8 {
    let total = steps.len().max(1) as u64;
    let completed = steps.iter().filter(|s| s.completed).count() as u64;
    ((completed * 100) / total) as u8
}

/// Journal-derived activity for one goal.
///
/// `recent_*` counts cover the trailing 7-day window; failures are
/// counted over the goal's whole lifetime.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GoalActivity {
    /// Journal entries touching the goal's steps in the window
    pub recent_actions: u32,
    /// Completed-outcome entries in the window
    pub recent_completions: u32,
    /// Failed-outcome entries, all time
    pub total_failures: u32,
}

/// One named contribution to a health score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTerm {
    pub name: String,
    pub points: i64,
}

impl ScoreTerm {
    fn new(name: impl Into<String>, points: i64) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// Health score with its term-by-term breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthBreakdown {
    /// Individual contributions, in fixed order
    pub terms: Vec<ScoreTerm>,
    /// Clamped total in [0, 100]
    pub total: u8,
}

impl HealthBreakdown {
    /// Look up one term's points by name.
    pub fn term(&self, name: &str) -> Option<i64> {
        self.terms.iter().find(|t| t.name == name).map(|t| t.points)
    }
}

/// Score a goal's health from its steps and journal activity.
pub fn health_score(steps: &[Step], activity: &GoalActivity) -> HealthBreakdown {
    let total_steps = steps.len().max(1) as i64;
    let done = steps.iter().filter(|s| s.completed).count() as i64;

    let progress_points = (50 * done) / total_steps;
    let recency_points = (activity.recent_actions as i64 * 2).min(20);
    let consistency_points = (activity.recent_completions as i64 * 3).min(15);
    let failure_points = -(activity.total_failures as i64 * 3).min(15);

    let terms = vec![
        ScoreTerm::new("progress", progress_points),
        ScoreTerm::new("recency", recency_points),
        ScoreTerm::new("consistency", consistency_points),
        ScoreTerm::new("failures", failure_points),
        ScoreTerm::new("baseline", 10),
    ];

    let total = terms.iter().map(|t| t.points).sum::<i64>().clamp(0, 100) as u8;
    HealthBreakdown { terms, total }
}

/// Level derived from accumulated XP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelInfo {
    pub level: u32,
    pub xp: u32,
    /// Position within the level's nominal XP span, truncated.
    /// Negative until xp reaches the span's floor of level×200; at
    /// xp=0 this reads -100. The offset is kept as-is: correcting it
    /// would silently re-level every existing profile.
    pub progress_percent: i32,
}

/// Map XP onto the level curve. Levels start at 1 and advance every
/// 200 XP; thresholds are multiples of 200.
pub fn level_for_xp(xp: u32) -> LevelInfo {
    let level = 1 + xp / XP_PER_LEVEL;
    let floor = (level * XP_PER_LEVEL) as i64;
    let progress_percent = (((xp as i64) - floor) * 100 / XP_PER_LEVEL as i64) as i32;
    LevelInfo {
        level,
        xp,
        progress_percent,
    }
}
