//! Badges derived from profile thresholds.
//!
//! Achievements are computed on demand, never persisted. Thresholds
//! are independent: a 30-day streak earns both the 7-day and the
//! 30-day badge.

use serde::{Deserialize, Serialize};

use crate::profile::Profile;

/// A derived badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub icon: String,
    pub name: String,
    pub detail: String,
}

impl Achievement {
    fn new(icon: &str, name: &str, detail: String) -> Self {
        Self {
            icon: icon.to_string(),
            name: name.to_string(),
            detail,
        }
    }
}

/// Collect every badge the profile currently qualifies for.
///
/// `completed_goals` is the profile's all-time count of goals with
/// Completed status.
pub fn achievements(profile: &Profile, completed_goals: u32) -> Vec<Achievement> {
    let mut earned = Vec::new();

    if profile.streak >= 7 {
        earned.push(Achievement::new(
            "🔥",
            "Week Warrior",
            format!("{} day streak", profile.streak),
        ));
    }
    if profile.streak >= 30 {
        earned.push(Achievement::new(
            "⭐",
            "Month Master",
            format!("{} day streak", profile.streak),
        ));
    }
    if profile.xp >= 500 {
        earned.push(Achievement::new(
            "💎",
            "XP Elite",
            format!("{} XP earned", profile.xp),
        ));
    }
    if profile.xp >= 1000 {
        earned.push(Achievement::new(
            "👑",
            "Legend",
            format!("{} XP earned", profile.xp),
        ));
    }
    if completed_goals >= 1 {
        earned.push(Achievement::new(
            "✅",
            "Goal Crusher",
            format!("{} goal(s) completed", completed_goals),
        ));
    }
    if completed_goals >= 5 {
        earned.push(Achievement::new(
            "🚀",
            "Achiever",
            format!("{} goals completed", completed_goals),
        ));
    }

    earned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::MotivationMode;
    use chrono::Utc;

    fn profile_with(streak: u32, xp: u32) -> Profile {
        let mut profile = Profile::new("ada", MotivationMode::Balanced, Utc::now());
        profile.streak = streak;
        profile.xp = xp;
        profile
    }

    #[test]
    fn week_streak_and_elite_xp() {
        let names: Vec<String> = achievements(&profile_with(7, 500), 0)
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert!(names.contains(&"Week Warrior".to_string()));
        assert!(names.contains(&"XP Elite".to_string()));
        assert!(!names.contains(&"Month Master".to_string()));
        assert!(!names.contains(&"Legend".to_string()));
    }

    #[test]
    fn thresholds_stack() {
        let names: Vec<String> = achievements(&profile_with(30, 1000), 5)
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Week Warrior",
                "Month Master",
                "XP Elite",
                "Legend",
                "Goal Crusher",
                "Achiever"
            ]
        );
    }

    #[test]
    fn fresh_profile_has_no_badges() {
        assert!(achievements(&profile_with(0, 0), 0).is_empty());
    }

    #[test]
    fn one_completed_goal_earns_crusher_only() {
        let names: Vec<String> = achievements(&profile_with(0, 0), 1)
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["Goal Crusher"]);
    }
}
