//! Progress overview command: the whole game state at a glance.

use chrono::Utc;
use questline_core::scoring::{health_score, progress};
use questline_core::storage::Database;
use questline_core::{
    achievements, level_for_xp, motivation_message, next_step, storyline, Config, GoalStatus,
};

pub fn run(profile: &str) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load_or_default();
    let db = Database::open()?;
    let now = Utc::now();

    let row = db.get_or_create_profile(profile, now)?;
    let level = level_for_xp(row.xp);
    let checkin = db.checkin_for_day(profile, now.date_naive())?;

    println!("=== {} ===", row.name);
    println!(
        "Level {}  {} XP  {} coins  streak {} 🔥",
        level.level, row.xp, row.coins, row.streak
    );
    println!(
        "Today: energy {}  mood {}",
        checkin.energy,
        checkin.mood.emoji()
    );

    if cfg.dashboard.show_story {
        let counts = db.outcome_counts(profile, None)?;
        println!("{}", storyline(row.streak, &counts));
    }

    match next_step(&db, profile, now)? {
        Some(step) => println!("Next up: [d{}] {} ({})", step.difficulty, step.title, step.id),
        None => println!("Next up: nothing - add a goal or some steps! 🌱"),
    }

    let goals = db.list_goals(profile)?;
    if !goals.is_empty() {
        println!();
        for goal in &goals {
            let steps = db.steps_for_goal(&goal.id)?;
            let activity = db.goal_activity(&goal.id, now)?;
            let health = health_score(&steps, &activity);
            let marker = match goal.status {
                GoalStatus::Completed => "✅",
                GoalStatus::Active if goal.active => "▶",
                GoalStatus::Active => "⏸",
            };
            println!(
                "{} {:>3}%  health {:>3}  {}",
                marker,
                progress(&steps),
                health.total,
                goal.title
            );
        }
    }

    if cfg.dashboard.show_achievements {
        let badges = achievements(&row, db.completed_goal_count(profile)?);
        if !badges.is_empty() {
            println!();
            for badge in badges {
                println!("{} {} - {}", badge.icon, badge.name, badge.detail);
            }
        }
    }

    if cfg.dashboard.show_motivation {
        println!();
        println!("{}", motivation_message(&row, &mut rand::thread_rng()));
    }

    Ok(())
}
