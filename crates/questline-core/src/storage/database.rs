//! SQLite-based storage for profiles, goals, steps, check-ins, and
//! the journal.
//!
//! Datetimes are stored as RFC3339 TEXT, calendar dates as `%Y-%m-%d`
//! TEXT; both orderings are lexicographic, so timestamp comparisons
//! happen directly in SQL. Foreign keys are enabled per connection:
//! deleting a goal cascades to its steps, and deleting a step nulls
//! the journal's weak reference to it.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::{data_dir, migrations};
use crate::checkin::{Checkin, Mood};
use crate::error::DatabaseError;
use crate::goal::{Goal, GoalStatus, Step};
use crate::journal::{ActionRecord, Outcome, OutcomeCounts};
use crate::profile::{MotivationMode, Profile};
use crate::scoring::GoalActivity;

// === Helper Functions ===

/// Format goal status for database storage
fn format_goal_status(status: GoalStatus) -> &'static str {
    match status {
        GoalStatus::Active => "active",
        GoalStatus::Completed => "completed",
    }
}

/// Parse goal status from database string
fn parse_goal_status(status_str: &str) -> GoalStatus {
    match status_str {
        "completed" => GoalStatus::Completed,
        _ => GoalStatus::Active,
    }
}

/// Parse an outcome from database string; unknown strings read as
/// skipped, the neutral outcome
fn parse_outcome(outcome_str: &str) -> Outcome {
    Outcome::parse(outcome_str).unwrap_or(Outcome::Skipped)
}

/// Format a calendar date for database storage
fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a calendar date from database string
fn parse_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()
}

/// Parse datetime from RFC3339 string with fallback to current time
fn parse_datetime_fallback(dt_str: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(dt_str)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

/// Build a Profile from a database row
fn row_to_profile(row: &rusqlite::Row) -> Result<Profile, rusqlite::Error> {
    let mode_str: String = row.get(1)?;
    let last_active: Option<String> = row.get(5)?;
    let created_at_str: String = row.get(6)?;

    Ok(Profile {
        name: row.get(0)?,
        motivation_mode: MotivationMode::parse(&mode_str),
        xp: row.get(2)?,
        coins: row.get(3)?,
        streak: row.get(4)?,
        last_active: last_active.as_deref().and_then(parse_date),
        created_at: parse_datetime_fallback(&created_at_str),
    })
}

/// Build a Goal from a database row
fn row_to_goal(row: &rusqlite::Row) -> Result<Goal, rusqlite::Error> {
    let status_str: String = row.get(5)?;
    let completed_at: Option<String> = row.get(6)?;
    let created_at_str: String = row.get(7)?;

    Ok(Goal {
        id: row.get(0)?,
        profile: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        difficulty: row.get(4)?,
        status: parse_goal_status(&status_str),
        completed_at: completed_at.as_deref().map(parse_datetime_fallback),
        created_at: parse_datetime_fallback(&created_at_str),
        active: row.get(8)?,
    })
}

/// Build a Step from a database row
fn row_to_step(row: &rusqlite::Row) -> Result<Step, rusqlite::Error> {
    let completed_at: Option<String> = row.get(7)?;

    Ok(Step {
        id: row.get(0)?,
        goal_id: row.get(1)?,
        title: row.get(2)?,
        difficulty: row.get(3)?,
        position: row.get(4)?,
        completed: row.get(5)?,
        fail_count: row.get(6)?,
        completed_at: completed_at.as_deref().map(parse_datetime_fallback),
    })
}

/// Build an ActionRecord from a database row
fn row_to_record(row: &rusqlite::Row) -> Result<ActionRecord, rusqlite::Error> {
    let outcome_str: String = row.get(3)?;
    let timestamp_str: String = row.get(4)?;

    Ok(ActionRecord {
        id: row.get(0)?,
        profile: row.get(1)?,
        step_id: row.get(2)?,
        outcome: parse_outcome(&outcome_str),
        timestamp: parse_datetime_fallback(&timestamp_str),
    })
}

const GOAL_COLUMNS: &str =
    "id, profile, title, description, difficulty, status, completed_at, created_at, active";
const STEP_COLUMNS: &str =
    "id, goal_id, title, difficulty, position, completed, fail_count, completed_at";

/// SQLite database for questline storage.
///
/// Stores profiles, goals, steps, daily check-ins, and the append-only
/// journal, and provides the query surface the engines consume.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `~/.config/questline/questline.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, DatabaseError> {
        let path = data_dir()?.join("questline.db");
        Self::open_path(path)
    }

    /// Open the database at an explicit path.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_path(path: impl Into<PathBuf>) -> Result<Self, DatabaseError> {
        let path: PathBuf = path.into();
        let conn =
            Connection::open(&path).map_err(|source| DatabaseError::OpenFailed { path, source })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory().map_err(|source| DatabaseError::OpenFailed {
            path: Path::new(":memory:").to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), DatabaseError> {
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS profiles (
                name            TEXT PRIMARY KEY,
                motivation_mode TEXT NOT NULL DEFAULT 'balanced',
                xp              INTEGER NOT NULL DEFAULT 0,
                coins           INTEGER NOT NULL DEFAULT 0,
                streak          INTEGER NOT NULL DEFAULT 0,
                last_active     TEXT,
                created_at      TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS goals (
                id           TEXT PRIMARY KEY,
                profile      TEXT NOT NULL,
                title        TEXT NOT NULL,
                description  TEXT NOT NULL DEFAULT '',
                difficulty   INTEGER NOT NULL DEFAULT 3,
                status       TEXT NOT NULL DEFAULT 'active',
                completed_at TEXT,
                created_at   TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS steps (
                id           TEXT PRIMARY KEY,
                goal_id      TEXT NOT NULL REFERENCES goals(id) ON DELETE CASCADE,
                title        TEXT NOT NULL,
                difficulty   INTEGER NOT NULL DEFAULT 3,
                position     INTEGER NOT NULL DEFAULT 0,
                completed    INTEGER NOT NULL DEFAULT 0,
                fail_count   INTEGER NOT NULL DEFAULT 0,
                completed_at TEXT
            );

            CREATE TABLE IF NOT EXISTS checkins (
                profile TEXT NOT NULL,
                date    TEXT NOT NULL,
                energy  INTEGER NOT NULL DEFAULT 50,
                mood    INTEGER NOT NULL DEFAULT 3,
                notes   TEXT NOT NULL DEFAULT '',
                PRIMARY KEY (profile, date)
            );

            CREATE TABLE IF NOT EXISTS journal (
                id        INTEGER PRIMARY KEY AUTOINCREMENT,
                profile   TEXT NOT NULL,
                step_id   TEXT REFERENCES steps(id) ON DELETE SET NULL,
                outcome   TEXT NOT NULL,
                timestamp TEXT NOT NULL
            );

            -- Create indexes for common query patterns
            CREATE INDEX IF NOT EXISTS idx_goals_profile ON goals(profile);
            CREATE INDEX IF NOT EXISTS idx_steps_goal_position ON steps(goal_id, position);
            CREATE INDEX IF NOT EXISTS idx_journal_profile_timestamp ON journal(profile, timestamp);
            CREATE INDEX IF NOT EXISTS idx_journal_step ON journal(step_id);",
        )?;
        migrations::migrate(&self.conn)
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(())
    }

    // === Profiles ===

    /// Fetch a profile by name.
    pub fn get_profile(&self, name: &str) -> Result<Option<Profile>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT name, motivation_mode, xp, coins, streak, last_active, created_at
             FROM profiles WHERE name = ?1",
        )?;
        Ok(stmt.query_row(params![name], row_to_profile).optional()?)
    }

    /// Fetch a profile, creating a fresh balanced-mode one on first use.
    pub fn get_or_create_profile(
        &self,
        name: &str,
        now: DateTime<Utc>,
    ) -> Result<Profile, DatabaseError> {
        if let Some(profile) = self.get_profile(name)? {
            return Ok(profile);
        }
        let profile = Profile::new(name, MotivationMode::default(), now);
        self.save_profile(&profile)?;
        Ok(profile)
    }

    /// Persist a profile, replacing any existing row.
    pub fn save_profile(&self, profile: &Profile) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO profiles
             (name, motivation_mode, xp, coins, streak, last_active, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                profile.name,
                profile.motivation_mode.as_str(),
                profile.xp,
                profile.coins,
                profile.streak,
                profile.last_active.map(format_date),
                profile.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    // === Goals ===

    /// Insert a new goal.
    pub fn create_goal(&self, goal: &Goal) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT INTO goals (id, profile, title, description, difficulty, status,
                                completed_at, created_at, active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                goal.id,
                goal.profile,
                goal.title,
                goal.description,
                goal.difficulty,
                format_goal_status(goal.status),
                goal.completed_at.map(|dt| dt.to_rfc3339()),
                goal.created_at.to_rfc3339(),
                goal.active,
            ],
        )?;
        Ok(())
    }

    /// Fetch a goal by id.
    pub fn get_goal(&self, id: &str) -> Result<Option<Goal>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {GOAL_COLUMNS} FROM goals WHERE id = ?1"))?;
        Ok(stmt.query_row(params![id], row_to_goal).optional()?)
    }

    /// All of a profile's goals in creation order.
    pub fn list_goals(&self, profile: &str) -> Result<Vec<Goal>, DatabaseError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {GOAL_COLUMNS} FROM goals WHERE profile = ?1 ORDER BY created_at, id"
        ))?;
        let goals = stmt
            .query_map(params![profile], row_to_goal)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(goals)
    }

    /// Goals visible to the recommender, in creation order.
    pub fn active_goals(&self, profile: &str) -> Result<Vec<Goal>, DatabaseError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {GOAL_COLUMNS} FROM goals
             WHERE profile = ?1 AND active = 1 ORDER BY created_at, id"
        ))?;
        let goals = stmt
            .query_map(params![profile], row_to_goal)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(goals)
    }

    /// Persist goal mutations (status, completion, visibility).
    pub fn save_goal(&self, goal: &Goal) -> Result<(), DatabaseError> {
        self.conn.execute(
            "UPDATE goals SET title = ?2, description = ?3, difficulty = ?4, status = ?5,
                              completed_at = ?6, active = ?7
             WHERE id = ?1",
            params![
                goal.id,
                goal.title,
                goal.description,
                goal.difficulty,
                format_goal_status(goal.status),
                goal.completed_at.map(|dt| dt.to_rfc3339()),
                goal.active,
            ],
        )?;
        Ok(())
    }

    /// Delete a goal. Its steps cascade away; journal rows keep their
    /// weak reference nulled.
    pub fn delete_goal(&self, id: &str) -> Result<(), DatabaseError> {
        self.conn
            .execute("DELETE FROM goals WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// All-time count of the profile's completed goals.
    pub fn completed_goal_count(&self, profile: &str) -> Result<u32, DatabaseError> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM goals WHERE profile = ?1 AND status = 'completed'",
            params![profile],
            |row| row.get::<_, u32>(0),
        )?;
        Ok(count)
    }

    // === Steps ===

    /// Insert a new step.
    pub fn add_step(&self, step: &Step) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT INTO steps (id, goal_id, title, difficulty, position, completed,
                                fail_count, completed_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                step.id,
                step.goal_id,
                step.title,
                step.difficulty,
                step.position,
                step.completed,
                step.fail_count,
                step.completed_at.map(|dt| dt.to_rfc3339()),
            ],
        )?;
        Ok(())
    }

    /// Fetch a step by id.
    pub fn get_step(&self, id: &str) -> Result<Option<Step>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {STEP_COLUMNS} FROM steps WHERE id = ?1"))?;
        Ok(stmt.query_row(params![id], row_to_step).optional()?)
    }

    /// A goal's steps in selection order (position, then id).
    pub fn steps_for_goal(&self, goal_id: &str) -> Result<Vec<Step>, DatabaseError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {STEP_COLUMNS} FROM steps WHERE goal_id = ?1 ORDER BY position, id"
        ))?;
        let steps = stmt
            .query_map(params![goal_id], row_to_step)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(steps)
    }

    /// Persist step mutations (completion, fail count).
    pub fn save_step(&self, step: &Step) -> Result<(), DatabaseError> {
        self.conn.execute(
            "UPDATE steps SET title = ?2, difficulty = ?3, position = ?4, completed = ?5,
                              fail_count = ?6, completed_at = ?7
             WHERE id = ?1",
            params![
                step.id,
                step.title,
                step.difficulty,
                step.position,
                step.completed,
                step.fail_count,
                step.completed_at.map(|dt| dt.to_rfc3339()),
            ],
        )?;
        Ok(())
    }

    /// Delete a step. Journal rows referencing it keep counting in
    /// totals with a nulled reference.
    pub fn delete_step(&self, id: &str) -> Result<(), DatabaseError> {
        self.conn
            .execute("DELETE FROM steps WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Count of a goal's steps that are not yet completed.
    pub fn incomplete_step_count(&self, goal_id: &str) -> Result<u32, DatabaseError> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM steps WHERE goal_id = ?1 AND completed = 0",
            params![goal_id],
            |row| row.get::<_, u32>(0),
        )?;
        Ok(count)
    }

    // === Check-ins ===

    /// Fetch the check-in for a day, creating it with defaults on
    /// first access.
    pub fn checkin_for_day(
        &self,
        profile: &str,
        date: NaiveDate,
    ) -> Result<Checkin, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT profile, date, energy, mood, notes FROM checkins
             WHERE profile = ?1 AND date = ?2",
        )?;
        let existing = stmt
            .query_row(params![profile, format_date(date)], |row| {
                let date_str: String = row.get(1)?;
                let mood_score: u8 = row.get(3)?;
                Ok(Checkin {
                    profile: row.get(0)?,
                    date: parse_date(&date_str).unwrap_or(date),
                    energy: row.get(2)?,
                    mood: Mood::from_score(mood_score).unwrap_or_default(),
                    notes: row.get(4)?,
                })
            })
            .optional()?;

        if let Some(checkin) = existing {
            return Ok(checkin);
        }
        let checkin = Checkin::new(profile, date);
        self.save_checkin(&checkin)?;
        Ok(checkin)
    }

    /// Persist a check-in, replacing the day's existing row.
    pub fn save_checkin(&self, checkin: &Checkin) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO checkins (profile, date, energy, mood, notes)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                checkin.profile,
                format_date(checkin.date),
                checkin.energy,
                checkin.mood.score(),
                checkin.notes,
            ],
        )?;
        Ok(())
    }

    // === Journal ===

    /// Append one journal row. Records are never updated or deleted.
    pub fn append_record(
        &self,
        profile: &str,
        step_id: Option<&str>,
        outcome: Outcome,
        timestamp: DateTime<Utc>,
    ) -> Result<i64, DatabaseError> {
        self.conn.execute(
            "INSERT INTO journal (profile, step_id, outcome, timestamp)
             VALUES (?1, ?2, ?3, ?4)",
            params![profile, step_id, outcome.as_str(), timestamp.to_rfc3339()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Journal rows for a profile since a timestamp, oldest first.
    pub fn records_since(
        &self,
        profile: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<ActionRecord>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, profile, step_id, outcome, timestamp FROM journal
             WHERE profile = ?1 AND timestamp >= ?2 ORDER BY id",
        )?;
        let records = stmt
            .query_map(params![profile, since.to_rfc3339()], row_to_record)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Tally journal rows by outcome, optionally bounded to a window.
    pub fn outcome_counts(
        &self,
        profile: &str,
        since: Option<DateTime<Utc>>,
    ) -> Result<OutcomeCounts, DatabaseError> {
        // The empty string sorts before every RFC3339 timestamp, so a
        // missing bound degrades to an unbounded scan.
        let since_str = since.map(|t| t.to_rfc3339()).unwrap_or_default();
        let mut stmt = self.conn.prepare(
            "SELECT outcome, COUNT(*) FROM journal
             WHERE profile = ?1 AND timestamp >= ?2
             GROUP BY outcome",
        )?;

        let mut counts = OutcomeCounts::default();
        let rows = stmt.query_map(params![profile, since_str], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, u32>(1)?))
        })?;
        for row in rows {
            let (outcome, count) = row?;
            counts.total += count;
            match outcome.as_str() {
                "completed" => counts.completed += count,
                "failed" => counts.failed += count,
                "skipped" => counts.skipped += count,
                _ => {}
            }
        }
        Ok(counts)
    }

    /// Journal-derived activity feeding a goal's health score:
    /// actions and completions over the trailing 7 days, failures over
    /// the goal's whole lifetime.
    pub fn goal_activity(
        &self,
        goal_id: &str,
        now: DateTime<Utc>,
    ) -> Result<GoalActivity, DatabaseError> {
        let window_start = (now - Duration::days(7)).to_rfc3339();

        let recent_actions = self.conn.query_row(
            "SELECT COUNT(*) FROM journal j JOIN steps s ON j.step_id = s.id
             WHERE s.goal_id = ?1 AND j.timestamp >= ?2",
            params![goal_id, window_start],
            |row| row.get::<_, u32>(0),
        )?;
        let recent_completions = self.conn.query_row(
            "SELECT COUNT(*) FROM journal j JOIN steps s ON j.step_id = s.id
             WHERE s.goal_id = ?1 AND j.timestamp >= ?2 AND j.outcome = 'completed'",
            params![goal_id, window_start],
            |row| row.get::<_, u32>(0),
        )?;
        let total_failures = self.conn.query_row(
            "SELECT COUNT(*) FROM journal j JOIN steps s ON j.step_id = s.id
             WHERE s.goal_id = ?1 AND j.outcome = 'failed'",
            params![goal_id],
            |row| row.get::<_, u32>(0),
        )?;

        Ok(GoalActivity {
            recent_actions,
            recent_completions,
            total_failures,
        })
    }

    fn completed_step_extreme(
        &self,
        profile: &str,
        since: DateTime<Utc>,
        order: &str,
    ) -> Result<Option<Step>, DatabaseError> {
        let sql = format!(
            "SELECT s.id, s.goal_id, s.title, s.difficulty, s.position, s.completed,
                    s.fail_count, s.completed_at
             FROM journal j JOIN steps s ON j.step_id = s.id
             WHERE j.profile = ?1 AND j.outcome = 'completed' AND j.timestamp >= ?2
             ORDER BY s.difficulty {order}, j.id LIMIT 1"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        Ok(stmt
            .query_row(params![profile, since.to_rfc3339()], row_to_step)
            .optional()?)
    }

    /// Highest-difficulty step completed in the window, first match on
    /// ties. Rows whose step was deleted cannot qualify.
    pub fn hardest_completed_step(
        &self,
        profile: &str,
        since: DateTime<Utc>,
    ) -> Result<Option<Step>, DatabaseError> {
        self.completed_step_extreme(profile, since, "DESC")
    }

    /// Lowest-difficulty step completed in the window, first match on
    /// ties.
    pub fn easiest_completed_step(
        &self,
        profile: &str,
        since: DateTime<Utc>,
    ) -> Result<Option<Step>, DatabaseError> {
        self.completed_step_extreme(profile, since, "ASC")
    }

    /// The goal whose steps collected the most journal rows in the
    /// window; count ties break toward the smallest goal id.
    pub fn most_active_goal(
        &self,
        profile: &str,
        since: DateTime<Utc>,
    ) -> Result<Option<Goal>, DatabaseError> {
        let goal_id: Option<String> = self
            .conn
            .query_row(
                "SELECT s.goal_id FROM journal j JOIN steps s ON j.step_id = s.id
                 WHERE j.profile = ?1 AND j.timestamp >= ?2
                 GROUP BY s.goal_id ORDER BY COUNT(*) DESC, s.goal_id LIMIT 1",
                params![profile, since.to_rfc3339()],
                |row| row.get(0),
            )
            .optional()?;

        match goal_id {
            Some(id) => self.get_goal(&id),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_goal(db: &Database, id: &str, profile: &str) -> Goal {
        let goal = Goal::new(id, profile, format!("Goal {id}"), "", 3, Utc::now()).unwrap();
        db.create_goal(&goal).unwrap();
        goal
    }

    fn seeded_step(db: &Database, id: &str, goal_id: &str, difficulty: u8, position: i32) -> Step {
        let step = Step::new(id, goal_id, format!("Step {id}"), difficulty, position).unwrap();
        db.add_step(&step).unwrap();
        step
    }

    #[test]
    fn profile_lazy_creation_and_roundtrip() {
        let db = Database::open_memory().unwrap();
        let mut profile = db.get_or_create_profile("ada", Utc::now()).unwrap();
        assert_eq!(profile.xp, 0);
        assert_eq!(profile.motivation_mode, MotivationMode::Balanced);

        profile.xp = 120;
        profile.motivation_mode = MotivationMode::Hardcore;
        profile.last_active = NaiveDate::from_ymd_opt(2026, 8, 5);
        db.save_profile(&profile).unwrap();

        let loaded = db.get_profile("ada").unwrap().unwrap();
        assert_eq!(loaded.xp, 120);
        assert_eq!(loaded.motivation_mode, MotivationMode::Hardcore);
        assert_eq!(loaded.last_active, NaiveDate::from_ymd_opt(2026, 8, 5));
    }

    #[test]
    fn steps_come_back_in_position_order() {
        let db = Database::open_memory().unwrap();
        seeded_goal(&db, "g1", "ada");
        seeded_step(&db, "s2", "g1", 2, 1);
        seeded_step(&db, "s1", "g1", 1, 0);
        seeded_step(&db, "s3", "g1", 3, 2);

        let ids: Vec<String> = db
            .steps_for_goal("g1")
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["s1", "s2", "s3"]);
    }

    #[test]
    fn incomplete_count_tracks_completion() {
        let db = Database::open_memory().unwrap();
        seeded_goal(&db, "g1", "ada");
        let mut step = seeded_step(&db, "s1", "g1", 2, 0);
        seeded_step(&db, "s2", "g1", 2, 1);
        assert_eq!(db.incomplete_step_count("g1").unwrap(), 2);

        step.completed = true;
        step.completed_at = Some(Utc::now());
        db.save_step(&step).unwrap();
        assert_eq!(db.incomplete_step_count("g1").unwrap(), 1);
    }

    #[test]
    fn checkin_is_created_once_per_day() {
        let db = Database::open_memory().unwrap();
        let day = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

        let first = db.checkin_for_day("ada", day).unwrap();
        assert_eq!(first.energy, 50);
        assert_eq!(first.mood, Mood::Okay);

        let mut edited = first.clone();
        edited.set_energy(80).unwrap();
        edited.notes = "slept well".to_string();
        db.save_checkin(&edited).unwrap();

        // Re-fetch returns the stored row, not fresh defaults.
        let again = db.checkin_for_day("ada", day).unwrap();
        assert_eq!(again.energy, 80);
        assert_eq!(again.notes, "slept well");
    }

    #[test]
    fn journal_keeps_record_when_step_is_deleted() {
        let db = Database::open_memory().unwrap();
        seeded_goal(&db, "g1", "ada");
        seeded_step(&db, "s1", "g1", 2, 0);
        db.append_record("ada", Some("s1"), Outcome::Completed, Utc::now())
            .unwrap();

        db.delete_step("s1").unwrap();

        let records = db
            .records_since("ada", Utc::now() - Duration::days(1))
            .unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].step_id.is_none());
        assert_eq!(records[0].outcome, Outcome::Completed);
    }

    #[test]
    fn outcome_counts_respect_the_window() {
        let db = Database::open_memory().unwrap();
        let now = Utc::now();
        seeded_goal(&db, "g1", "ada");
        seeded_step(&db, "s1", "g1", 2, 0);

        db.append_record("ada", Some("s1"), Outcome::Completed, now)
            .unwrap();
        db.append_record("ada", Some("s1"), Outcome::Failed, now)
            .unwrap();
        db.append_record("ada", Some("s1"), Outcome::Skipped, now - Duration::days(10))
            .unwrap();

        let windowed = db
            .outcome_counts("ada", Some(now - Duration::days(7)))
            .unwrap();
        assert_eq!(windowed.total, 2);
        assert_eq!(windowed.completed, 1);
        assert_eq!(windowed.failed, 1);
        assert_eq!(windowed.skipped, 0);

        let all_time = db.outcome_counts("ada", None).unwrap();
        assert_eq!(all_time.total, 3);
        assert_eq!(all_time.skipped, 1);
    }

    #[test]
    fn goal_activity_counts_window_and_lifetime_failures() {
        let db = Database::open_memory().unwrap();
        let now = Utc::now();
        seeded_goal(&db, "g1", "ada");
        seeded_step(&db, "s1", "g1", 2, 0);

        db.append_record("ada", Some("s1"), Outcome::Completed, now)
            .unwrap();
        db.append_record("ada", Some("s1"), Outcome::Failed, now)
            .unwrap();
        // Old failure: outside the recency window, still a failure.
        db.append_record("ada", Some("s1"), Outcome::Failed, now - Duration::days(30))
            .unwrap();

        let activity = db.goal_activity("g1", now).unwrap();
        assert_eq!(activity.recent_actions, 2);
        assert_eq!(activity.recent_completions, 1);
        assert_eq!(activity.total_failures, 2);
    }

    #[test]
    fn deleting_a_goal_cascades_to_steps() {
        let db = Database::open_memory().unwrap();
        seeded_goal(&db, "g1", "ada");
        seeded_step(&db, "s1", "g1", 2, 0);
        db.append_record("ada", Some("s1"), Outcome::Completed, Utc::now())
            .unwrap();

        db.delete_goal("g1").unwrap();
        assert!(db.get_step("s1").unwrap().is_none());
        // The journal survives with its reference nulled.
        let counts = db.outcome_counts("ada", None).unwrap();
        assert_eq!(counts.total, 1);
    }

    #[test]
    fn completed_goal_count_only_counts_completed() {
        let db = Database::open_memory().unwrap();
        let mut done = seeded_goal(&db, "g1", "ada");
        seeded_goal(&db, "g2", "ada");
        done.status = GoalStatus::Completed;
        done.completed_at = Some(Utc::now());
        db.save_goal(&done).unwrap();

        assert_eq!(db.completed_goal_count("ada").unwrap(), 1);
    }

    #[test]
    fn active_goals_hide_deactivated_ones() {
        let db = Database::open_memory().unwrap();
        seeded_goal(&db, "g1", "ada");
        let mut hidden = seeded_goal(&db, "g2", "ada");
        hidden.active = false;
        db.save_goal(&hidden).unwrap();

        let ids: Vec<String> = db
            .active_goals("ada")
            .unwrap()
            .into_iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(ids, vec!["g1"]);
    }

    #[test]
    fn reopening_a_database_file_keeps_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questline.db");

        {
            let db = Database::open_path(&path).unwrap();
            seeded_goal(&db, "g1", "ada");
        }
        let db = Database::open_path(&path).unwrap();
        assert!(db.get_goal("g1").unwrap().is_some());
    }
}
