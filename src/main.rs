/// Main entry point for the habit tracker
///
/// This file sets up logging, parses command line arguments, and either
/// starts the interactive session or runs a single command.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use habit_streaks::{HabitId, HabitTracker};

/// Get the default database path with robust fallback strategy
fn get_default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Try various locations in order of preference
    let potential_paths = [
        dirs::home_dir().map(|mut p| {
            p.push(".habit_tracker");
            p
        }),
        dirs::data_dir().map(|mut p| {
            p.push("habit_tracker");
            p
        }),
        dirs::config_dir().map(|mut p| {
            p.push("habit_tracker");
            p
        }),
        std::env::current_dir().ok().map(|mut p| {
            p.push(".habit_tracker");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        if std::fs::create_dir_all(potential_path).is_ok() {
            // Make sure the directory is actually writable
            let test_file = potential_path.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file);
                return Ok(potential_path.join("habits.db"));
            }
        }
    }

    // Ultimate fallback: use a temporary directory
    let mut temp_path = std::env::temp_dir();
    temp_path.push("habit_tracker");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("habits.db");

    tracing::warn!("Using temporary directory for database: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for the habit tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long, env = "HABITS_DB")]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    /// Run one command instead of the interactive session
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print all habits
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Add a new habit
    Add {
        name: String,
    },
    /// Check in on a habit
    Check {
        id: String,
        /// Apply a long gap without asking
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_streaks={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout for the session itself
        .init();

    let db_path = match args.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => get_default_database_path()?,
    };

    info!("Using database at: {}", db_path.display());

    let tracker = HabitTracker::new(db_path)?;

    match args.command {
        None => tracker.run()?,
        Some(Commands::List { json }) => {
            tracker.list(json, std::io::stdout().lock())?;
            tracker.close()?;
        }
        Some(Commands::Add { name }) => {
            tracker.add(&name, std::io::stdout().lock())?;
            tracker.close()?;
        }
        Some(Commands::Check { id, yes }) => {
            let id = HabitId::parse(&id)?;
            tracker.check(id, yes, std::io::stdout().lock())?;
            tracker.close()?;
        }
    }

    info!("Habit tracker shutdown complete");
    Ok(())
}
