/// Commands for giving up a streak and managing personal records

use std::io::{BufRead, Write};
use crate::cli::Prompter;
use crate::commands::ask_id;
use crate::storage::HabitStorage;
use crate::store::HabitStore;
use crate::AppError;

/// Zero a habit's streak, keeping the best one as its record
pub fn zero_habit<S: HabitStorage, R: BufRead, W: Write>(
    store: &HabitStore<S>,
    prompter: &mut Prompter<R, W>,
) -> Result<(), AppError> {
    let Some(id) = ask_id(prompter, "Write habit id to zero score: ")? else {
        return Ok(());
    };

    store.zero(id)?;
    let habit = store.get(id)?;
    match habit.record {
        Some(record) => prompter.say(format!("'{}' starts over. Record: {}", habit.name, record))?,
        None => prompter.say(format!("'{}' starts over.", habit.name))?,
    }
    Ok(())
}

pub fn clear_record<S: HabitStorage, R: BufRead, W: Write>(
    store: &HabitStore<S>,
    prompter: &mut Prompter<R, W>,
) -> Result<(), AppError> {
    let Some(id) = ask_id(prompter, "Choose habit id to delete record: ")? else {
        return Ok(());
    };

    store.clear_record(id)?;
    prompter.say(format!("Record cleared for habit {}", id))?;
    Ok(())
}
