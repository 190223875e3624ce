//! Player profile and motivation modes.
//!
//! A profile holds the gamification state for one player: experience
//! points, coins, the consecutive-day streak, and the motivation mode
//! that shapes rewards, penalties, and recommendations. XP, coins, and
//! streak are unsigned; penalty arithmetic saturates at zero instead of
//! going negative.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Motivation mode selected by the player.
///
/// The mode alters reward/penalty magnitudes in the reward engine and
/// the difficulty band used by the recommender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotivationMode {
    /// Gentle pace, no failure penalties
    Soft,
    /// Default mode, moderate penalties
    Balanced,
    /// Strict mode, heavy penalties and harder recommendations
    Hardcore,
    /// Coin-focused mode, mixed-difficulty recommendations
    Reward,
}

impl MotivationMode {
    /// Stable string form used in storage and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            MotivationMode::Soft => "soft",
            MotivationMode::Balanced => "balanced",
            MotivationMode::Hardcore => "hardcore",
            MotivationMode::Reward => "reward",
        }
    }

    /// Parse from the stable string form. Unknown strings fall back to
    /// Balanced, matching the storage default.
    pub fn parse(s: &str) -> MotivationMode {
        match s {
            "soft" => MotivationMode::Soft,
            "hardcore" => MotivationMode::Hardcore,
            "reward" => MotivationMode::Reward,
            _ => MotivationMode::Balanced,
        }
    }

    /// Short human-readable description of the mode.
    pub fn description(&self) -> &'static str {
        match self {
            MotivationMode::Soft => "gentle pace, no penalties",
            MotivationMode::Balanced => "steady pace, moderate penalties",
            MotivationMode::Hardcore => "maximum pressure, heavy penalties",
            MotivationMode::Reward => "coin hunting, varied difficulty",
        }
    }
}

impl Default for MotivationMode {
    fn default() -> Self {
        MotivationMode::Balanced
    }
}

impl fmt::Display for MotivationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gamification state for one player.
///
/// Mutated only by the reward engine (and by explicit mode changes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Profile name, unique per player
    pub name: String,
    /// Active motivation mode
    pub motivation_mode: MotivationMode,
    /// Accumulated experience points
    pub xp: u32,
    /// Spendable coin balance
    pub coins: u32,
    /// Consecutive calendar days with at least one completed step
    pub streak: u32,
    /// Last day a step was completed; None until the first completion
    pub last_active: Option<NaiveDate>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Create a fresh profile with zeroed progress.
    pub fn new(name: impl Into<String>, mode: MotivationMode, created_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            motivation_mode: mode,
            xp: 0,
            coins: 0,
            streak: 0,
            last_active: None,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_string_roundtrip() {
        for mode in [
            MotivationMode::Soft,
            MotivationMode::Balanced,
            MotivationMode::Hardcore,
            MotivationMode::Reward,
        ] {
            assert_eq!(MotivationMode::parse(mode.as_str()), mode);
        }
    }

    #[test]
    fn unknown_mode_falls_back_to_balanced() {
        assert_eq!(MotivationMode::parse("turbo"), MotivationMode::Balanced);
        assert_eq!(MotivationMode::parse(""), MotivationMode::Balanced);
    }

    #[test]
    fn new_profile_starts_at_zero() {
        let profile = Profile::new("ada", MotivationMode::default(), Utc::now());
        assert_eq!(profile.xp, 0);
        assert_eq!(profile.coins, 0);
        assert_eq!(profile.streak, 0);
        assert!(profile.last_active.is_none());
        assert_eq!(profile.motivation_mode, MotivationMode::Balanced);
    }
}
