//! Goal management commands for CLI.

use chrono::Utc;
use clap::Subcommand;
use questline_core::scoring::{health_score, progress};
use questline_core::storage::Database;
use questline_core::{Goal, GoalStatus};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum GoalAction {
    /// Create a new goal
    Create {
        /// Goal title
        title: String,
        /// Goal description
        #[arg(long, default_value = "")]
        description: String,
        /// Base difficulty 1-5 (default: 3)
        #[arg(long, default_value = "3")]
        difficulty: u8,
    },
    /// List goals with progress and health
    List,
    /// Show one goal and its steps
    Show {
        /// Goal ID
        id: String,
    },
    /// Hide a goal from recommendations
    Pause {
        /// Goal ID
        id: String,
    },
    /// Make a goal visible to recommendations again
    Resume {
        /// Goal ID
        id: String,
    },
    /// Delete a goal and its steps
    Delete {
        /// Goal ID
        id: String,
    },
}

pub fn run(profile: &str, action: GoalAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        GoalAction::Create {
            title,
            description,
            difficulty,
        } => {
            let goal = Goal::new(
                Uuid::new_v4().to_string(),
                profile,
                title,
                description,
                difficulty,
                Utc::now(),
            )?;
            db.create_goal(&goal)?;
            println!("Goal created: {}", goal.id);
            println!("{}", serde_json::to_string_pretty(&goal)?);
        }
        GoalAction::List => {
            let now = Utc::now();
            for goal in db.list_goals(profile)? {
                let steps = db.steps_for_goal(&goal.id)?;
                let activity = db.goal_activity(&goal.id, now)?;
                let health = health_score(&steps, &activity);
                let marker = match goal.status {
                    GoalStatus::Completed => "✅",
                    GoalStatus::Active if goal.active => "▶",
                    GoalStatus::Active => "⏸",
                };
                println!(
                    "{} {}  {:>3}%  health {:>3}  {}",
                    marker,
                    goal.id,
                    progress(&steps),
                    health.total,
                    goal.title
                );
            }
        }
        GoalAction::Show { id } => {
            let goal = db
                .get_goal(&id)?
                .ok_or_else(|| format!("goal not found: {id}"))?;
            let steps = db.steps_for_goal(&goal.id)?;
            let completed = steps.iter().filter(|s| s.completed).count();

            println!("{} ({})", goal.title, goal.id);
            if !goal.description.is_empty() {
                println!("{}", goal.description);
            }
            println!(
                "{} of {} steps done ({}%)",
                completed,
                steps.len(),
                progress(&steps)
            );
            for step in &steps {
                let mark = if step.completed { "x" } else { " " };
                let fails = if step.fail_count > 0 {
                    format!("  ({} fails)", step.fail_count)
                } else {
                    String::new()
                };
                println!(
                    "  [{}] {} [d{}] {}{}",
                    mark, step.id, step.difficulty, step.title, fails
                );
            }
        }
        GoalAction::Pause { id } => {
            let mut goal = db
                .get_goal(&id)?
                .ok_or_else(|| format!("goal not found: {id}"))?;
            goal.active = false;
            db.save_goal(&goal)?;
            println!("Goal paused: {}", goal.title);
        }
        GoalAction::Resume { id } => {
            let mut goal = db
                .get_goal(&id)?
                .ok_or_else(|| format!("goal not found: {id}"))?;
            goal.active = true;
            db.save_goal(&goal)?;
            println!("Goal resumed: {}", goal.title);
        }
        GoalAction::Delete { id } => {
            db.delete_goal(&id)?;
            println!("Goal deleted: {id}");
        }
    }
    Ok(())
}
