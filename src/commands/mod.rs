/// Command handlers for the habit tracker
///
/// Each command reads whatever extra input it needs through a `Prompter`,
/// calls into the store and reports the outcome back to the user.

pub mod create;
pub mod checkin;
pub mod delete;
pub mod edit;
pub mod list;
pub mod record;

// Re-export command functions for easy access
pub use create::*;
pub use checkin::*;
pub use delete::*;
pub use edit::*;
pub use list::*;
pub use record::*;

use std::io::{BufRead, Write};
use crate::cli::Prompter;
use crate::domain::HabitId;
use crate::AppError;

/// One token typed at the main prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A habit id: check in on that habit
    CheckIn(HabitId),
    Add,
    Delete,
    /// Reset a streak to zero
    Zero,
    ClearRecord,
    Edit,
    /// Delete every habit
    Purge,
    Help,
    Done,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(token: &str) -> Self {
        let token = token.trim();

        if let Ok(id) = HabitId::parse(token) {
            return Command::CheckIn(id);
        }

        match token {
            "" => Command::Empty,
            "add" => Command::Add,
            "del" => Command::Delete,
            "null" => Command::Zero,
            "derec" => Command::ClearRecord,
            "edit" => Command::Edit,
            "purge" => Command::Purge,
            "help" => Command::Help,
            "done" => Command::Done,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Ask for a habit id; `None` when the input ran out
pub(crate) fn ask_id<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    question: &str,
) -> Result<Option<HabitId>, AppError> {
    match prompter.ask(question)? {
        Some(answer) => Ok(Some(HabitId::parse(&answer)?)),
        None => Ok(None),
    }
}
