/// Command for creating new habits

use std::io::{BufRead, Write};
use crate::cli::Prompter;
use crate::domain::HabitId;
use crate::storage::HabitStorage;
use crate::store::HabitStore;
use crate::AppError;

/// Ask for a name and create the habit
///
/// Returns `None` if the input ran out before a name was given.
pub fn create_habit<S: HabitStorage, R: BufRead, W: Write>(
    store: &HabitStore<S>,
    prompter: &mut Prompter<R, W>,
) -> Result<Option<HabitId>, AppError> {
    let Some(name) = prompter.ask("Write habit name: ")? else {
        return Ok(None);
    };

    let id = add_habit(store, prompter, &name)?;
    Ok(Some(id))
}

/// Create a habit with a known name and announce it
pub fn add_habit<S: HabitStorage, R: BufRead, W: Write>(
    store: &HabitStore<S>,
    prompter: &mut Prompter<R, W>,
    name: &str,
) -> Result<HabitId, AppError> {
    let id = store.create(name)?;
    let habit = store.get(id)?;
    prompter.say(format!("Created habit {} '{}'. Day one starts today!", id, habit.name))?;
    Ok(id)
}
