//! Profile commands for CLI.

use chrono::Utc;
use clap::Subcommand;
use questline_core::storage::Database;
use questline_core::{achievements, level_for_xp, MotivationMode};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show profile, level, and achievements
    Show,
    /// Change motivation mode (soft, balanced, hardcore, reward)
    SetMode {
        /// New mode
        mode: String,
    },
}

pub fn run(profile: &str, action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        ProfileAction::Show => {
            let row = db.get_or_create_profile(profile, Utc::now())?;
            let level = level_for_xp(row.xp);
            println!("{} - {} mode", row.name, row.motivation_mode);
            println!(
                "Level {}  {} XP  {} coins  streak {}",
                level.level, row.xp, row.coins, row.streak
            );
            let badges = achievements(&row, db.completed_goal_count(profile)?);
            if badges.is_empty() {
                println!("No achievements yet");
            } else {
                for badge in badges {
                    println!("{} {} - {}", badge.icon, badge.name, badge.detail);
                }
            }
        }
        ProfileAction::SetMode { mode } => {
            if !["soft", "balanced", "hardcore", "reward"].contains(&mode.as_str()) {
                return Err(
                    format!("unknown mode '{mode}' (soft, balanced, hardcore, reward)").into(),
                );
            }
            let mut row = db.get_or_create_profile(profile, Utc::now())?;
            row.motivation_mode = MotivationMode::parse(&mode);
            db.save_profile(&row)?;
            println!(
                "Mode set to {} - {}",
                row.motivation_mode,
                row.motivation_mode.description()
            );
        }
    }
    Ok(())
}
