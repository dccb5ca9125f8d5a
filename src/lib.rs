/// Public library interface for the habit tracker
///
/// This module exports the tracker itself and the public types that can be
/// used by the binary or by tests.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

// Internal modules
mod domain;
mod storage;
mod store;
mod commands;
mod cli;

// Re-export public modules and types
pub use domain::*;
pub use storage::{SqliteStorage, StorageError, HabitStorage, HabitField};
pub use store::{HabitStore, StoreError};
pub use commands::{Command, CheckinOutcome, HabitSummary};
pub use cli::{Prompter, Session};

/// Errors that can occur while running the tracker
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Database error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Bad input or an unknown id: report it and carry on
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Store(e) if !e.is_fatal())
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::Store(StoreError::Validation(e))
    }
}

/// Habit tracker bound to one SQLite database
///
/// The database is opened in `new` and closed exactly once: by `run` on the
/// way out, or by `close`, or on drop if something failed first.
pub struct HabitTracker {
    store: HabitStore<SqliteStorage>,
}

impl HabitTracker {
    /// Open the tracker on the specified database path
    ///
    /// This will initialize the SQLite database with the required schema
    /// if it doesn't already exist.
    pub fn new(db_path: PathBuf) -> Result<Self, AppError> {
        Self::with_clock(db_path, Box::new(SystemClock))
    }

    /// Open the tracker with a specific clock
    pub fn with_clock(db_path: PathBuf, clock: Box<dyn Clock>) -> Result<Self, AppError> {
        tracing::info!("Initializing habit tracker with database: {:?}", db_path);

        let storage = SqliteStorage::new(db_path)?;

        Ok(Self {
            store: HabitStore::new(storage, clock),
        })
    }

    /// Run the interactive session on stdin/stdout
    pub fn run(self) -> Result<(), AppError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the interactive session on any reader/writer, then close the database
    pub fn run_with<R: BufRead, W: Write>(self, input: R, output: W) -> Result<(), AppError> {
        let habits = self.store.list()?;
        tracing::info!("Session starting with {} existing habits", habits.len());

        let result = Session::new(&self.store, Prompter::new(input, output)).run();
        let closed = self.close();
        result.and(closed)
    }

    /// Print the habit list, as text or JSON
    pub fn list<W: Write>(&self, json: bool, mut output: W) -> Result<(), AppError> {
        if json {
            commands::print_habits_json(&self.store, &mut output)
        } else {
            commands::print_habits(&self.store, &mut output)
        }
    }

    /// Create a habit without going through the interactive loop
    pub fn add<W: Write>(&self, name: &str, output: W) -> Result<HabitId, AppError> {
        let mut prompter = Prompter::non_interactive(io::empty(), output, false);
        commands::add_habit(&self.store, &mut prompter, name)
    }

    /// One-shot check-in; long gaps are only applied with `assume_yes`
    pub fn check<W: Write>(&self, id: HabitId, assume_yes: bool, output: W) -> Result<CheckinOutcome, AppError> {
        let mut prompter = Prompter::non_interactive(io::empty(), output, assume_yes);
        commands::check_in(&self.store, &mut prompter, id)
    }

    /// Get a reference to the store (useful for testing)
    pub fn store(&self) -> &HabitStore<SqliteStorage> {
        &self.store
    }

    /// Close the database
    pub fn close(self) -> Result<(), AppError> {
        self.store.into_storage().close()?;
        Ok(())
    }
}
