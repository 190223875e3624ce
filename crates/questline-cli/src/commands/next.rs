//! Next-step recommendation command for CLI.

use chrono::Utc;
use questline_core::next_step;
use questline_core::storage::Database;

pub fn run(profile: &str) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match next_step(&db, profile, Utc::now())? {
        Some(step) => {
            let goal_title = db
                .get_goal(&step.goal_id)?
                .map(|g| g.title)
                .unwrap_or_else(|| step.goal_id.clone());
            println!("Next up: [d{}] {} - {}", step.difficulty, step.title, goal_title);
            println!("  step id: {}", step.id);
        }
        None => println!("Nothing to do - add a goal or some steps! 🌱"),
    }
    Ok(())
}
