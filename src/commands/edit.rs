/// Guided edit of an existing habit
///
/// Name, score, last check date and order are each offered in turn and
/// each can be skipped. Every accepted change is saved on its own, so a bad
/// value stops the edit but keeps the changes made before it.

use std::io::{BufRead, Write};
use crate::cli::Prompter;
use crate::commands::ask_id;
use crate::domain::{parse_date, Habit, HabitId};
use crate::storage::HabitStorage;
use crate::store::HabitStore;
use crate::AppError;

pub fn edit_habit<S: HabitStorage, R: BufRead, W: Write>(
    store: &HabitStore<S>,
    prompter: &mut Prompter<R, W>,
) -> Result<(), AppError> {
    let Some(id) = ask_id(prompter, "Choose id to edit: ")? else {
        return Ok(());
    };
    // Fail early on an unknown id instead of after the questions
    store.get(id)?;

    if prompter.confirm("Change name? (y/n): ")? {
        if let Some(name) = prompter.ask("Write new habit name: ")? {
            store.rename(id, &name)?;
        }
    }

    if prompter.confirm("Change score? (y/n): ")? {
        if let Some(score) = prompter.ask("Write your score: ")? {
            store.set_score(id, i64::from(Habit::parse_score(&score)?))?;
        }
    }

    if prompter.confirm("Change last check date? (y/n): ")? {
        if let Some(date) = prompter.ask("Write the date (YYYY-MM-DD or 17 March 2024): ")? {
            store.set_last_check(id, parse_date(&date)?)?;
        }
    }

    if prompter.confirm("Change habit order? (y/n): ")? {
        if let Some(position) = prompter.ask("Write new habit order (id): ")? {
            store.reorder(id, HabitId::parse(&position)?)?;
        }
    }

    prompter.say("Habit updated.")?;
    Ok(())
}
