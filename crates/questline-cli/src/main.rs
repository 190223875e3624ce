use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "questline-cli", version, about = "Questline CLI")]
struct Cli {
    /// Profile to act as (defaults to the configured profile)
    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Goal management
    Goal {
        #[command(subcommand)]
        action: commands::goal::GoalAction,
    },
    /// Step management and outcomes
    Step {
        #[command(subcommand)]
        action: commands::step::StepAction,
    },
    /// Daily check-in
    Checkin {
        #[command(subcommand)]
        action: commands::checkin::CheckinAction,
    },
    /// Recommend the next step
    Next,
    /// Profile, level, and achievements
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Weekly statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Progress overview
    Dashboard,
}

fn main() {
    let cli = Cli::parse();
    let profile = cli
        .profile
        .unwrap_or_else(|| questline_core::Config::load_or_default().profile.name);

    let result = match cli.command {
        Commands::Goal { action } => commands::goal::run(&profile, action),
        Commands::Step { action } => commands::step::run(&profile, action),
        Commands::Checkin { action } => commands::checkin::run(&profile, action),
        Commands::Next => commands::next::run(&profile),
        Commands::Profile { action } => commands::profile::run(&profile, action),
        Commands::Stats { action } => commands::stats::run(&profile, action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Dashboard => commands::dashboard::run(&profile),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
