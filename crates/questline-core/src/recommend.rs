//! Next-step recommendation.
//!
//! Healthy goals are tried first; within a goal, steps are tried in
//! position order. The player's motivation mode and today's reported
//! energy narrow the acceptable difficulty band, with a fallback to
//! any incomplete step when the band filters everything out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::error::Result;
use crate::goal::Step;
use crate::profile::MotivationMode;
use crate::scoring::health_score;
use crate::storage::Database;

/// Inclusive difficulty range the recommender may pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyBand {
    pub min: u8,
    pub max: u8,
}

impl DifficultyBand {
    /// Derive the band from motivation mode and today's energy (0-100).
    ///
    /// Soft mode lowers the ceiling as energy drops; hardcore raises
    /// the floor when energy allows; reward mode trades the hardest
    /// tier for variety; balanced leaves the full 1-5 range open.
    pub fn for_mode(mode: MotivationMode, energy: u8) -> Self {
        let mut min = 1;
        let mut max = 5;

        match mode {
            MotivationMode::Soft => {
                max = if energy < 40 {
                    2
                } else if energy < 60 {
                    3
                } else {
                    4
                };
            }
            MotivationMode::Hardcore => {
                min = if energy > 50 { 3 } else { 2 };
            }
            MotivationMode::Reward => {
                min = 1;
                max = 4;
            }
            MotivationMode::Balanced => {}
        }

        Self { min, max }
    }

    pub fn contains(&self, difficulty: u8) -> bool {
        (self.min..=self.max).contains(&difficulty)
    }
}

/// Pick the next step the player should act on, or None if every step
/// everywhere is completed (or no goal is visible).
///
/// Goals are ranked by descending health score; the sort is stable, so
/// equal scores keep creation order and the result is deterministic
/// for identical input. Today's check-in is created with defaults if
/// the player has not filed one.
pub fn next_step(
    db: &Database,
    profile_name: &str,
    now: DateTime<Utc>,
) -> Result<Option<Step>> {
    let profile = db.get_or_create_profile(profile_name, now)?;
    let checkin = db.checkin_for_day(profile_name, now.date_naive())?;
    let goals = db.active_goals(profile_name)?;
    if goals.is_empty() {
        return Ok(None);
    }

    let mut ranked = Vec::with_capacity(goals.len());
    for goal in goals {
        let steps = db.steps_for_goal(&goal.id)?;
        let activity = db.goal_activity(&goal.id, now)?;
        let score = health_score(&steps, &activity).total;
        ranked.push((score, steps));
    }
    ranked.sort_by_key(|(score, _)| Reverse(*score));

    let band = DifficultyBand::for_mode(profile.motivation_mode, checkin.energy);
    for (_, steps) in &ranked {
        if let Some(step) = steps
            .iter()
            .find(|s| !s.completed && band.contains(s.difficulty))
        {
            return Ok(Some(step.clone()));
        }
    }

    // Nothing fit the band: take any incomplete step, same goal order.
    for (_, steps) in &ranked {
        if let Some(step) = steps.iter().find(|s| !s.completed) {
            return Ok(Some(step.clone()));
        }
    }

    Ok(None)
}
