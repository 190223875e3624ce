//! Applying step outcomes: XP, coins, streaks, and goal completion.
//!
//! Every call appends exactly one journal row and persists the
//! profile. Completion is not idempotent: re-applying a completed
//! outcome re-runs the rewards, so the caller must prevent
//! double-submission.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DatabaseError, Result};
use crate::goal::{Goal, GoalStatus};
use crate::journal::Outcome;
use crate::profile::MotivationMode;
use crate::storage::Database;

/// Flat XP bonus for finishing a goal's last step.
pub const GOAL_BONUS_XP: u32 = 50;
/// Flat coin bonus for finishing a goal's last step.
pub const GOAL_BONUS_COINS: u32 = 10;

/// What one pass through the reward engine did to the profile.
///
/// Deltas are measured after floors apply, so a -10 penalty against
/// 4 XP reports -4.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardReceipt {
    pub outcome: Outcome,
    pub xp_delta: i64,
    pub coins_delta: i64,
    /// Profile XP after the update
    pub xp: u32,
    /// Coin balance after the update
    pub coins: u32,
    /// Streak after the update
    pub streak: u32,
    /// Present when this completion finished the whole goal
    pub completed_goal: Option<Goal>,
}

/// Apply a step outcome for a profile.
///
/// - completed: marks the step done, grants difficulty-scaled XP and
///   coins, advances the daily streak, and closes the goal (with a
///   flat bonus) when no incomplete steps remain.
/// - failed: bumps the step's fail count and applies the motivation
///   mode's penalty; the step stays incomplete.
/// - skipped: records the journal row and nothing else.
///
/// # Errors
/// Returns an error if the step does not exist or persistence fails.
pub fn apply_outcome(
    db: &Database,
    profile_name: &str,
    step_id: &str,
    outcome: Outcome,
    now: DateTime<Utc>,
) -> Result<RewardReceipt> {
    let mut profile = db.get_or_create_profile(profile_name, now)?;
    let mut step = db
        .get_step(step_id)?
        .ok_or_else(|| DatabaseError::NotFound {
            entity: "step",
            id: step_id.to_string(),
        })?;

    let today = now.date_naive();
    let xp_before = profile.xp;
    let coins_before = profile.coins;
    let mut completed_goal = None;

    match outcome {
        Outcome::Completed => {
            step.completed = true;
            step.completed_at = Some(now);
            db.save_step(&step)?;

            // Reward scales with difficulty: 15 XP at 1 up to 35 at 5.
            profile.xp += step.difficulty as u32 * 5 + 10;
            profile.coins += step.difficulty as u32;

            let yesterday = today - Duration::days(1);
            match profile.last_active {
                Some(day) if day == yesterday => profile.streak += 1,
                // Already counted today; a second completion is free.
                Some(day) if day == today => {}
                _ => profile.streak = 1,
            }
            profile.last_active = Some(today);

            if db.incomplete_step_count(&step.goal_id)? == 0 {
                if let Some(mut goal) = db.get_goal(&step.goal_id)? {
                    goal.status = GoalStatus::Completed;
                    goal.completed_at = Some(now);
                    db.save_goal(&goal)?;
                    profile.xp += GOAL_BONUS_XP;
                    profile.coins += GOAL_BONUS_COINS;
                    completed_goal = Some(goal);
                }
            }
        }
        Outcome::Failed => {
            step.fail_count += 1;
            db.save_step(&step)?;

            match profile.motivation_mode {
                MotivationMode::Hardcore => {
                    profile.xp = profile.xp.saturating_sub(10);
                    profile.streak = profile.streak.saturating_sub(1);
                }
                MotivationMode::Soft => {}
                MotivationMode::Balanced | MotivationMode::Reward => {
                    profile.xp = profile.xp.saturating_sub(3);
                }
            }
        }
        Outcome::Skipped => {}
    }

    db.append_record(profile_name, Some(&step.id), outcome, now)?;
    db.save_profile(&profile)?;

    Ok(RewardReceipt {
        outcome,
        xp_delta: profile.xp as i64 - xp_before as i64,
        coins_delta: profile.coins as i64 - coins_before as i64,
        xp: profile.xp,
        coins: profile.coins,
        streak: profile.streak,
        completed_goal,
    })
}
