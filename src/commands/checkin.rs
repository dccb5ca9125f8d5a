/// Check-in command
///
/// Applies the streak rules: same day is a no-op, a short gap adds one day,
/// a long gap adds the whole gap only if the user agrees.

use std::io::{BufRead, Write};
use crate::cli::Prompter;
use crate::domain::{days_word, CheckinDecision, HabitId};
use crate::storage::HabitStorage;
use crate::store::HabitStore;
use crate::AppError;

/// What happened to the habit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckinOutcome {
    AlreadyChecked,
    Advanced(u32),
    Declined(u32),
}

pub fn check_in<S: HabitStorage, R: BufRead, W: Write>(
    store: &HabitStore<S>,
    prompter: &mut Prompter<R, W>,
    id: HabitId,
) -> Result<CheckinOutcome, AppError> {
    let outcome = match store.plan_checkin(id)? {
        CheckinDecision::AlreadyChecked => {
            prompter.say("You already checked today!")?;
            return Ok(CheckinOutcome::AlreadyChecked);
        }
        CheckinDecision::AutoAdvance(days) => {
            store.apply_checkin(id, days)?;
            CheckinOutcome::Advanced(days)
        }
        CheckinDecision::ConfirmRequired(days) => {
            let question = format!(
                "It has been {} days since your last check. Add {} days to the streak? (y/n): ",
                days, days
            );
            if !prompter.confirm(&question)? {
                prompter.say("Streak left unchanged.")?;
                return Ok(CheckinOutcome::Declined(days));
            }
            store.apply_checkin(id, days)?;
            CheckinOutcome::Advanced(days)
        }
    };

    let habit = store.get(id)?;
    prompter.say(format!(
        "{}: {} {} in a row",
        habit.name, habit.streak_days, days_word(habit.streak_days)
    ))?;

    Ok(outcome)
}
