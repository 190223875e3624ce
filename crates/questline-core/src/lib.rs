//! # Questline Core Library
//!
//! This library provides the core business logic for Questline, a
//! gamified personal goal tracker. It implements a CLI-first
//! philosophy where all operations are available via a standalone CLI
//! binary that is a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Scoring**: goal progress and an explainable 0-100 health score,
//!   plus the XP level curve and derived achievements
//! - **Recommendation**: next-step selection from goal health, today's
//!   energy, and the player's motivation mode
//! - **Reward**: applies step outcomes to the XP/coins/streak economy
//!   and the append-only journal
//! - **Statistics**: trailing 7-day activity summaries
//! - **Storage**: SQLite-based persistence and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`Database`]: profile, goal, step, check-in, and journal persistence
//! - [`Config`]: application configuration management
//! - [`apply_outcome`]: the reward engine entry point
//! - [`next_step`]: the recommendation engine entry point

pub mod achievements;
pub mod checkin;
pub mod error;
pub mod goal;
pub mod journal;
pub mod motivation;
pub mod profile;
pub mod recommend;
pub mod reward;
pub mod scoring;
pub mod stats;
pub mod storage;

pub use achievements::{achievements, Achievement};
pub use checkin::{Checkin, Mood};
pub use error::{ConfigError, CoreError, DatabaseError, Result, ValidationError};
pub use goal::{Goal, GoalStatus, Step};
pub use journal::{ActionRecord, Outcome, OutcomeCounts};
pub use motivation::{motivation_message, storyline, Storyline};
pub use profile::{MotivationMode, Profile};
pub use recommend::{next_step, DifficultyBand};
pub use reward::{apply_outcome, RewardReceipt};
pub use scoring::{
    health_score, level_for_xp, progress, GoalActivity, HealthBreakdown, LevelInfo,
};
pub use stats::{weekly_report, WeeklyReport};
pub use storage::{Config, Database};
