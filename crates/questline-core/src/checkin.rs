//! Daily check-ins: self-reported energy, mood, and notes.
//!
//! One check-in exists per (profile, day); it is created lazily with
//! defaults the first time anything asks for it. Today's energy feeds
//! the recommender's difficulty band.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Energy reported when no check-in was filed yet.
pub const DEFAULT_ENERGY: u8 = 50;

/// Self-reported mood on a 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Rough,
    Meh,
    Okay,
    Good,
    Amazing,
}

impl Mood {
    /// Numeric score (1-5) used in storage.
    pub fn score(self) -> u8 {
        match self {
            Mood::Rough => 1,
            Mood::Meh => 2,
            Mood::Okay => 3,
            Mood::Good => 4,
            Mood::Amazing => 5,
        }
    }

    /// Parse from the numeric score; out-of-scale values return None.
    pub fn from_score(score: u8) -> Option<Mood> {
        match score {
            1 => Some(Mood::Rough),
            2 => Some(Mood::Meh),
            3 => Some(Mood::Okay),
            4 => Some(Mood::Good),
            5 => Some(Mood::Amazing),
            _ => None,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Rough => "😔",
            Mood::Meh => "😐",
            Mood::Okay => "🙂",
            Mood::Good => "😀",
            Mood::Amazing => "🤩",
        }
    }
}

impl Default for Mood {
    fn default() -> Self {
        Mood::Okay
    }
}

/// One day's self-report for a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkin {
    /// Owning profile name
    pub profile: String,
    pub date: NaiveDate,
    /// Energy level on a 0-100 scale
    pub energy: u8,
    pub mood: Mood,
    pub notes: String,
}

impl Checkin {
    /// Default check-in for a day nobody has reported on yet.
    pub fn new(profile: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            profile: profile.into(),
            date,
            energy: DEFAULT_ENERGY,
            mood: Mood::default(),
            notes: String::new(),
        }
    }

    /// Set the energy level.
    ///
    /// # Errors
    /// Returns an error if energy exceeds 100.
    pub fn set_energy(&mut self, energy: u8) -> Result<(), ValidationError> {
        if energy > 100 {
            return Err(ValidationError::OutOfRange {
                field: "checkin.energy",
                value: energy as i64,
                min: 0,
                max: 100,
            });
        }
        self.energy = energy;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_lazy_creation() {
        let checkin = Checkin::new("ada", NaiveDate::from_ymd_opt(2026, 8, 6).unwrap());
        assert_eq!(checkin.energy, 50);
        assert_eq!(checkin.mood, Mood::Okay);
        assert!(checkin.notes.is_empty());
    }

    #[test]
    fn energy_is_capped_at_100() {
        let mut checkin = Checkin::new("ada", NaiveDate::from_ymd_opt(2026, 8, 6).unwrap());
        assert!(checkin.set_energy(100).is_ok());
        assert!(checkin.set_energy(101).is_err());
        assert_eq!(checkin.energy, 100);
    }

    #[test]
    fn mood_score_roundtrip() {
        for score in 1..=5u8 {
            assert_eq!(Mood::from_score(score).unwrap().score(), score);
        }
        assert!(Mood::from_score(0).is_none());
        assert!(Mood::from_score(6).is_none());
    }
}
