/// Habit entity and related functionality
///
/// This module defines the Habit struct that represents one tracked habit,
/// along with the validation rules for user-supplied values.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::domain::{DomainError, HabitId};

/// Longest habit name we accept
pub const MAX_NAME_LEN: usize = 100;

/// Streak a freshly created habit starts with
pub const INITIAL_STREAK: u32 = 1;

/// A habit the user checks in on every day
///
/// Each habit keeps its current streak, the date of the last check-in and
/// the best streak reached before the last reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Position in the list, dense from 1
    pub id: HabitId,
    /// Display name (e.g. "Read", "Morning Run")
    pub name: String,
    /// Consecutive successful check-ins
    pub streak_days: u32,
    /// Day of the most recent check-in (or creation)
    pub last_check: NaiveDate,
    /// Best streak before the current one was zeroed, if it ever was
    pub record: Option<u32>,
}

impl Habit {
    /// Create a habit from existing data (used when loading from database)
    pub fn from_existing(
        id: HabitId,
        name: String,
        streak_days: u32,
        last_check: NaiveDate,
        record: Option<u32>,
    ) -> Self {
        Self {
            id,
            name,
            streak_days,
            last_check,
            record,
        }
    }

    /// Record value after giving up on the current streak
    ///
    /// The outgoing streak only replaces the record when it beats it.
    pub fn record_after_zero(&self) -> u32 {
        match self.record {
            Some(record) if record >= self.streak_days => record,
            _ => self.streak_days,
        }
    }

    /// Validate and normalize a habit name
    pub fn validate_name(name: &str) -> Result<String, DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string()
            ));
        }

        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::InvalidHabitName(
                format!("Habit name cannot be longer than {} characters", MAX_NAME_LEN)
            ));
        }

        Ok(trimmed.to_string())
    }

    /// Validate a streak score entered by hand
    pub fn validate_score(score: i64) -> Result<u32, DomainError> {
        if score < 0 {
            return Err(DomainError::InvalidScore(
                format!("Score cannot be negative, got {}", score)
            ));
        }

        u32::try_from(score).map_err(|_| DomainError::InvalidScore(
            format!("Score {} is too large", score)
        ))
    }

    /// Parse a score typed at the prompt
    pub fn parse_score(input: &str) -> Result<u32, DomainError> {
        let trimmed = input.trim();
        let score = trimmed.parse::<i64>().map_err(|_| DomainError::InvalidScore(
            format!("'{}' is not a number", trimmed)
        ))?;
        Self::validate_score(score)
    }
}
