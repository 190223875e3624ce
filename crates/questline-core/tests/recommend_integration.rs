//! Integration tests for the recommendation engine: goal ranking,
//! difficulty banding from mode and energy, and fallback behavior.

use chrono::{DateTime, TimeZone, Utc};
use questline_core::{
    apply_outcome, next_step, Database, Goal, MotivationMode, Outcome, Step,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
}

fn seed_goal(db: &Database, goal_id: &str, step_difficulties: &[u8]) {
    let goal = Goal::new(goal_id, "ada", format!("Goal {goal_id}"), "", 3, now()).unwrap();
    db.create_goal(&goal).unwrap();
    for (i, difficulty) in step_difficulties.iter().enumerate() {
        let step = Step::new(
            format!("{goal_id}-s{i}"),
            goal_id,
            format!("Step {i}"),
            *difficulty,
            i as i32,
        )
        .unwrap();
        db.add_step(&step).unwrap();
    }
}

fn set_mode(db: &Database, mode: MotivationMode) {
    let mut profile = db.get_or_create_profile("ada", now()).unwrap();
    profile.motivation_mode = mode;
    db.save_profile(&profile).unwrap();
}

fn set_energy(db: &Database, energy: u8) {
    let mut checkin = db.checkin_for_day("ada", now().date_naive()).unwrap();
    checkin.set_energy(energy).unwrap();
    db.save_checkin(&checkin).unwrap();
}

#[test]
fn recently_worked_goal_is_preferred() {
    let db = Database::open_memory().unwrap();
    seed_goal(&db, "g1", &[2, 2]);
    seed_goal(&db, "g2", &[2, 2]);

    // Working g2 lifts its health score above g1's.
    apply_outcome(&db, "ada", "g2-s0", Outcome::Completed, now()).unwrap();

    let step = next_step(&db, "ada", now()).unwrap().unwrap();
    assert_eq!(step.goal_id, "g2");
    assert_eq!(step.id, "g2-s1");
}

#[test]
fn failures_drag_a_goal_down_the_ranking() {
    let db = Database::open_memory().unwrap();
    seed_goal(&db, "g1", &[2, 2]);
    seed_goal(&db, "g2", &[2, 2]);
    set_mode(&db, MotivationMode::Soft); // no XP penalties to distract

    // Both goals see activity, but g1 keeps failing. Five failures
    // cost 15 points and their recency only pays back 10.
    for _ in 0..5 {
        apply_outcome(&db, "ada", "g1-s0", Outcome::Failed, now()).unwrap();
    }
    apply_outcome(&db, "ada", "g2-s0", Outcome::Skipped, now()).unwrap();

    let step = next_step(&db, "ada", now()).unwrap().unwrap();
    assert_eq!(step.goal_id, "g2");
}

#[test]
fn tied_goals_keep_creation_order() {
    let db = Database::open_memory().unwrap();
    seed_goal(&db, "g1", &[3]);
    seed_goal(&db, "g2", &[3]);

    // Identical shape, identical score: the earlier goal wins, and
    // keeps winning on every call.
    for _ in 0..3 {
        let step = next_step(&db, "ada", now()).unwrap().unwrap();
        assert_eq!(step.goal_id, "g1");
    }
}

#[test]
fn soft_mode_with_low_energy_avoids_hard_steps() {
    let db = Database::open_memory().unwrap();
    seed_goal(&db, "g1", &[5, 2]);
    set_mode(&db, MotivationMode::Soft);
    set_energy(&db, 30); // band is 1..=2

    let step = next_step(&db, "ada", now()).unwrap().unwrap();
    assert_eq!(step.id, "g1-s1");
    assert_eq!(step.difficulty, 2);
}

#[test]
fn hardcore_mode_with_high_energy_skips_easy_steps() {
    let db = Database::open_memory().unwrap();
    seed_goal(&db, "g1", &[1, 4]);
    set_mode(&db, MotivationMode::Hardcore);
    set_energy(&db, 80); // band is 3..=5

    let step = next_step(&db, "ada", now()).unwrap().unwrap();
    assert_eq!(step.id, "g1-s1");
}

#[test]
fn band_miss_falls_back_across_goals_in_score_order() {
    let db = Database::open_memory().unwrap();
    seed_goal(&db, "g1", &[5]);
    seed_goal(&db, "g2", &[5]);
    set_mode(&db, MotivationMode::Soft);
    set_energy(&db, 10); // band is 1..=2, nothing fits

    let step = next_step(&db, "ada", now()).unwrap().unwrap();
    // Fallback walks the same ranking, so the first goal's step wins.
    assert_eq!(step.id, "g1-s0");
}

#[test]
fn default_energy_applies_without_a_checkin() {
    let db = Database::open_memory().unwrap();
    seed_goal(&db, "g1", &[4, 3]);
    set_mode(&db, MotivationMode::Soft);

    // No check-in filed: energy defaults to 50, so the band tops out
    // at 3 and the difficulty-4 step is passed over.
    let step = next_step(&db, "ada", now()).unwrap().unwrap();
    assert_eq!(step.id, "g1-s1");

    // The lazy check-in also persisted today's row.
    let checkin = db.checkin_for_day("ada", now().date_naive()).unwrap();
    assert_eq!(checkin.energy, 50);
}

#[test]
fn exhausted_board_recommends_nothing() {
    let db = Database::open_memory().unwrap();
    seed_goal(&db, "g1", &[1]);
    apply_outcome(&db, "ada", "g1-s0", Outcome::Completed, now()).unwrap();

    assert!(next_step(&db, "ada", now()).unwrap().is_none());
}
