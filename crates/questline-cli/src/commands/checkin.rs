//! Daily check-in commands for CLI.

use chrono::Utc;
use clap::Subcommand;
use questline_core::storage::Database;
use questline_core::Mood;

#[derive(Subcommand)]
pub enum CheckinAction {
    /// Show today's check-in
    Show,
    /// Update today's check-in
    Set {
        /// Energy level 0-100
        #[arg(long)]
        energy: Option<u8>,
        /// Mood 1-5
        #[arg(long)]
        mood: Option<u8>,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
}

pub fn run(profile: &str, action: CheckinAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let today = Utc::now().date_naive();

    match action {
        CheckinAction::Show => {
            let checkin = db.checkin_for_day(profile, today)?;
            println!(
                "{}  energy {}  mood {}",
                checkin.date,
                checkin.energy,
                checkin.mood.emoji()
            );
            if !checkin.notes.is_empty() {
                println!("{}", checkin.notes);
            }
        }
        CheckinAction::Set {
            energy,
            mood,
            notes,
        } => {
            let mut checkin = db.checkin_for_day(profile, today)?;
            if let Some(energy) = energy {
                checkin.set_energy(energy)?;
            }
            if let Some(score) = mood {
                checkin.mood =
                    Mood::from_score(score).ok_or_else(|| format!("mood must be 1-5, got {score}"))?;
            }
            if let Some(notes) = notes {
                checkin.notes = notes;
            }
            db.save_checkin(&checkin)?;
            println!(
                "Check-in saved: energy {}, mood {}",
                checkin.energy,
                checkin.mood.emoji()
            );
        }
    }
    Ok(())
}
