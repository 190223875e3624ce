use chrono::Utc;
use clap::Subcommand;
use questline_core::storage::Database;
use questline_core::weekly_report;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Trailing 7-day summary
    Week,
}

pub fn run(profile: &str, action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        StatsAction::Week => {
            let report = weekly_report(&db, profile, Utc::now())?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
