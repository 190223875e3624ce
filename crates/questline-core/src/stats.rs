//! Weekly statistics over the journal.
//!
//! Everything is scoped to the trailing 7 days from the passed-in
//! `now`. Journal rows whose step was since deleted still count in the
//! totals but cannot name a hardest/easiest step or a most-active goal.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::goal::{Goal, Step};
use crate::storage::Database;

/// Trailing 7-day summary for one profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyReport {
    pub total: u32,
    pub completed: u32,
    pub failed: u32,
    pub skipped: u32,
    /// completed/total × 100, truncated; 0 when the window is empty
    pub success_rate: u8,
    /// Highest-difficulty completed step in the window
    pub hardest: Option<Step>,
    /// Lowest-difficulty completed step in the window
    pub easiest: Option<Step>,
    /// Goal with the most journal activity in the window
    pub most_active_goal: Option<Goal>,
}

/// Aggregate the trailing week of journal activity.
pub fn weekly_report(
    db: &Database,
    profile_name: &str,
    now: DateTime<Utc>,
) -> Result<WeeklyReport> {
    let since = now - Duration::days(7);
    let counts = db.outcome_counts(profile_name, Some(since))?;

    let success_rate = if counts.total > 0 {
        (counts.completed * 100 / counts.total) as u8
    } else {
        0
    };

    Ok(WeeklyReport {
        total: counts.total,
        completed: counts.completed,
        failed: counts.failed,
        skipped: counts.skipped,
        success_rate,
        hardest: db.hardest_completed_step(profile_name, since)?,
        easiest: db.easiest_completed_step(profile_name, since)?,
        most_active_goal: db.most_active_goal(profile_name, since)?,
    })
}
