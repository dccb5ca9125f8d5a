/// Listing habits, as text for the terminal or as JSON

use std::io::Write;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::domain::{days_since, days_word, display_label, Habit, HabitId, StreakStatus};
use crate::storage::HabitStorage;
use crate::store::HabitStore;
use crate::AppError;

pub const HELP_TEXT: &str = "\
Hi! Choose id and check your habit:
<id>  - check in (+1 day)
add   - add a new habit
del   - remove a habit
null  - reset a streak to zero (keeps your record)
derec - remove a record
edit  - edit a habit
purge - remove all habits
help  - show this help
done  - exit";

/// Information about a habit in the list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitSummary {
    pub id: HabitId,
    pub name: String,
    pub streak_days: u32,
    pub last_check: NaiveDate,
    pub last_check_label: String,
    pub record: Option<u32>,
    pub status: StreakStatus,
}

impl HabitSummary {
    pub fn new(habit: Habit, today: NaiveDate) -> Self {
        let status = StreakStatus::of(&habit, today);
        let last_check_label = display_label(days_since(habit.last_check, today), habit.last_check);

        Self {
            id: habit.id,
            name: habit.name,
            streak_days: habit.streak_days,
            last_check: habit.last_check,
            last_check_label,
            record: habit.record,
            status,
        }
    }

    /// One line of the terminal listing
    pub fn line(&self) -> String {
        let mut line = format!(
            "{} {} {} {} Last check: {}",
            self.id, self.name, self.streak_days, days_word(self.streak_days), self.last_check_label
        );
        if let Some(record) = self.record {
            line.push_str(&format!(" | Record: {}", record));
        }
        line
    }
}

/// Summaries of all habits in id order
pub fn summaries<S: HabitStorage>(store: &HabitStore<S>) -> Result<Vec<HabitSummary>, AppError> {
    let today = store.today();
    Ok(store
        .list()?
        .into_iter()
        .map(|habit| HabitSummary::new(habit, today))
        .collect())
}

pub fn print_habits<S: HabitStorage, W: Write>(store: &HabitStore<S>, out: &mut W) -> Result<(), AppError> {
    let summaries = summaries(store)?;
    if summaries.is_empty() {
        writeln!(out, "No habits yet. Type 'add' to create one.")?;
    }
    for summary in &summaries {
        writeln!(out, "{}", summary.line())?;
    }
    Ok(())
}

pub fn print_habits_json<S: HabitStorage, W: Write>(store: &HabitStore<S>, out: &mut W) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, &summaries(store)?)?;
    writeln!(out)?;
    Ok(())
}
