/// Streak rules for daily check-ins
///
/// Everything here is pure date arithmetic: given the day a habit was last
/// checked and today's date, decide what a check-in should do and how the
/// last check should be described.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::domain::{format_display_date, Habit};

/// Gaps of at least this many days need explicit confirmation
pub const CONFIRM_THRESHOLD: u32 = 3;

/// What a check-in should do to a habit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckinDecision {
    /// Already checked in today; nothing changes
    AlreadyChecked,
    /// Add this many days without asking (always 1)
    AutoAdvance(u32),
    /// Gap is long enough that the user must confirm adding these days
    ConfirmRequired(u32),
}

impl CheckinDecision {
    /// Days to add when the decision is applied, if any
    pub fn days_to_add(&self) -> Option<u32> {
        match self {
            CheckinDecision::AlreadyChecked => None,
            CheckinDecision::AutoAdvance(days) | CheckinDecision::ConfirmRequired(days) => Some(*days),
        }
    }
}

/// Whole days between the last check and today
///
/// Both sides are calendar dates, so this is plain day subtraction. A last
/// check in the future (set by a manual edit) counts as today.
pub fn days_since(last_check: NaiveDate, today: NaiveDate) -> u32 {
    let days = (today - last_check).num_days();
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// Decide what a check-in does after `days_since` days
///
/// A gap of one or two days still adds exactly one day. Two days is a grace
/// period, not two check-ins.
pub fn decide_checkin(days_since: u32) -> CheckinDecision {
    match days_since {
        0 => CheckinDecision::AlreadyChecked,
        days if days < CONFIRM_THRESHOLD => CheckinDecision::AutoAdvance(1),
        days => CheckinDecision::ConfirmRequired(days),
    }
}

/// Describe the last check for the habit list
pub fn display_label(days_since: u32, last_check: NaiveDate) -> String {
    match days_since {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        _ => format_display_date(last_check),
    }
}

/// Singular or plural "day"
pub fn days_word(count: u32) -> &'static str {
    if count == 1 { "day" } else { "days" }
}

/// Where a habit currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "days", rename_all = "snake_case")]
pub enum StreakStatus {
    /// Checked in today
    Fresh,
    /// One or two days since the last check; a check-in still adds one
    Stale(u32),
    /// Three or more days since the last check
    LapseConfirmable(u32),
    /// Streak was zeroed
    Reset,
}

impl StreakStatus {
    pub fn of(habit: &Habit, today: NaiveDate) -> Self {
        if habit.streak_days == 0 {
            return StreakStatus::Reset;
        }

        let days = days_since(habit.last_check, today);
        match decide_checkin(days) {
            CheckinDecision::AlreadyChecked => StreakStatus::Fresh,
            CheckinDecision::AutoAdvance(_) => StreakStatus::Stale(days),
            CheckinDecision::ConfirmRequired(days) => StreakStatus::LapseConfirmable(days),
        }
    }
}
