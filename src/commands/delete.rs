/// Commands that remove habits

use std::io::{BufRead, Write};
use crate::cli::Prompter;
use crate::commands::ask_id;
use crate::storage::HabitStorage;
use crate::store::HabitStore;
use crate::AppError;

pub fn delete_habit<S: HabitStorage, R: BufRead, W: Write>(
    store: &HabitStore<S>,
    prompter: &mut Prompter<R, W>,
) -> Result<(), AppError> {
    let Some(id) = ask_id(prompter, "Choose habit id to delete: ")? else {
        return Ok(());
    };

    let habit = store.get(id)?;
    store.delete(id)?;
    prompter.say(format!("Deleted '{}'", habit.name))?;
    Ok(())
}

/// Delete every habit after confirmation
pub fn purge_habits<S: HabitStorage, R: BufRead, W: Write>(
    store: &HabitStore<S>,
    prompter: &mut Prompter<R, W>,
) -> Result<(), AppError> {
    let count = store.list()?.len();
    if count == 0 {
        prompter.say("There are no habits to delete.")?;
        return Ok(());
    }

    if !prompter.confirm(&format!("Delete all {} habits? (y/n): ", count))? {
        prompter.say("Nothing deleted.")?;
        return Ok(());
    }

    store.delete_all()?;
    prompter.say(format!("Deleted {} habits", count))?;
    Ok(())
}
