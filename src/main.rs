/// Main entry point for the habit tracker console
///
/// This file sets up logging, parses command line arguments, opens the habits
/// data file and runs the interactive menu over stdin/stdout.

use clap::Parser;
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing::info;

use habit_tracker::console::{self, ConsoleSession};
use habit_tracker::{parse_iso_date, AppError, Clock, HabitTracker, JsonFileStorage, TrackingMode};

/// Get the default data file path with robust fallback strategy
fn get_default_data_path() -> std::io::Result<PathBuf> {
    // Try various locations in order of preference
    let potential_paths = [
        // 1. User's home directory (preferred)
        dirs::home_dir().map(|mut p| {
            p.push(".habit_tracker");
            p
        }),
        // 2. User's data directory (platform-specific)
        dirs::data_dir().map(|mut p| {
            p.push("habit_tracker");
            p
        }),
        // 3. User's config directory
        dirs::config_dir().map(|mut p| {
            p.push("habit_tracker");
            p
        }),
        // 4. Current working directory (last resort)
        std::env::current_dir().ok().map(|mut p| {
            p.push(".habit_tracker");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        if let Ok(()) = std::fs::create_dir_all(potential_path) {
            // Test if we can write to this directory
            let test_file = potential_path.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file);
                return Ok(potential_path.join("habits.json"));
            }
        }
    }

    // Ultimate fallback: use a temporary directory
    let mut temp_path = std::env::temp_dir();
    temp_path.push("habit_tracker");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("habits.json");

    tracing::warn!("Using temporary directory for habits file: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for the habit tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON habits file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Tracking mode to start in: "daily" or "each-time"
    #[arg(long, default_value = "daily", value_parser = parse_mode)]
    mode: TrackingMode,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, hide = true)]
    today: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

fn parse_mode(s: &str) -> Result<TrackingMode, String> {
    s.parse().map_err(|e: habit_tracker::DomainError| e.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_tracker={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout for the menu
        .init();

    info!("Starting habit tracker");

    run(args).await?;
    info!("Habit tracker shutdown complete");

    // A quit intent can leave a blocking stdin read behind; don't wait on it
    std::process::exit(0);
}

/// Open the habits file and run the console until the user exits
async fn run(args: Args) -> Result<(), AppError> {
    let clock = match args.today.as_deref() {
        Some(date) => Clock::Fixed(parse_iso_date(date)?),
        None => Clock::System,
    };

    // Determine data file path
    let data_path = match args.data_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => get_default_data_path()?,
    };

    info!("Using habits file at: {}", data_path.display());

    let tracker = HabitTracker::open_with_clock(JsonFileStorage::new(data_path), clock).with_mode(args.mode);
    let mut session = ConsoleSession::new(tracker);

    let (sender, receiver) = console::intents::channel();
    let watcher = console::spawn_interrupt_watcher(sender);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    session.run(stdin, &mut stdout, receiver).await?;

    watcher.abort();
    Ok(())
}
