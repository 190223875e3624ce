//! Step management and outcome commands for CLI.

use chrono::Utc;
use clap::Subcommand;
use questline_core::storage::Database;
use questline_core::{apply_outcome, motivation_message, Outcome, RewardReceipt, Step};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum StepAction {
    /// Add a step to a goal
    Add {
        /// Goal ID
        goal_id: String,
        /// Step title
        title: String,
        /// Difficulty 1-5 (default: 3)
        #[arg(long, default_value = "3")]
        difficulty: u8,
        /// Order within the goal (default: appended after existing steps)
        #[arg(long)]
        position: Option<i32>,
    },
    /// Mark a step completed and collect rewards
    Complete {
        /// Step ID
        id: String,
    },
    /// Record a failed attempt
    Fail {
        /// Step ID
        id: String,
    },
    /// Skip a step for now
    Skip {
        /// Step ID
        id: String,
    },
    /// Delete a step
    Delete {
        /// Step ID
        id: String,
    },
}

pub fn run(profile: &str, action: StepAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        StepAction::Add {
            goal_id,
            title,
            difficulty,
            position,
        } => {
            if db.get_goal(&goal_id)?.is_none() {
                return Err(format!("goal not found: {goal_id}").into());
            }
            let position = match position {
                Some(p) => p,
                None => db.steps_for_goal(&goal_id)?.len() as i32,
            };
            let step = Step::new(Uuid::new_v4().to_string(), goal_id, title, difficulty, position)?;
            db.add_step(&step)?;
            println!("Step added: {}", step.id);
            println!("{}", serde_json::to_string_pretty(&step)?);
        }
        StepAction::Complete { id } => {
            let receipt = apply_outcome(&db, profile, &id, Outcome::Completed, Utc::now())?;
            print_receipt(&receipt);
            print_motivation(&db, profile)?;
        }
        StepAction::Fail { id } => {
            let receipt = apply_outcome(&db, profile, &id, Outcome::Failed, Utc::now())?;
            print_receipt(&receipt);
            print_motivation(&db, profile)?;
        }
        StepAction::Skip { id } => {
            let receipt = apply_outcome(&db, profile, &id, Outcome::Skipped, Utc::now())?;
            print_receipt(&receipt);
        }
        StepAction::Delete { id } => {
            db.delete_step(&id)?;
            println!("Step deleted: {id}");
        }
    }
    Ok(())
}

fn print_receipt(receipt: &RewardReceipt) {
    match receipt.outcome {
        Outcome::Completed => {
            println!(
                "✅ Step completed! {:+} XP, {:+} coins (streak {})",
                receipt.xp_delta, receipt.coins_delta, receipt.streak
            );
            if let Some(goal) = &receipt.completed_goal {
                println!("🎉 Goal complete: {} - bonus included!", goal.title);
            }
        }
        Outcome::Failed => {
            println!("💥 Attempt logged as failed ({:+} XP)", receipt.xp_delta);
        }
        Outcome::Skipped => {
            println!("⏭ Step skipped - no change");
        }
    }
}

fn print_motivation(db: &Database, profile: &str) -> Result<(), Box<dyn std::error::Error>> {
    let profile_row = db.get_or_create_profile(profile, Utc::now())?;
    println!("{}", motivation_message(&profile_row, &mut rand::thread_rng()));
    Ok(())
}
