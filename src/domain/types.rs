/// Core types used throughout the domain layer
///
/// This module defines the habit identifier and the date formats accepted
/// and displayed by the tracker.

use std::fmt;
use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::domain::DomainError;

/// Storage format for dates (ISO 8601 calendar date)
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Human-readable date format used in listings (e.g. "17 March 2024")
pub const DISPLAY_DATE_FORMAT: &str = "%d %B %Y";

/// Position of a habit in the list
///
/// Ids are positive and dense: after any delete or reorder the stored ids
/// are exactly `1..=count`. The id doubles as the habit's display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(pub u32);

impl HabitId {
    /// Parse a user-supplied id token
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.trim();
        match trimmed.parse::<u32>() {
            Ok(0) | Err(_) => Err(DomainError::InvalidId(trimmed.to_string())),
            Ok(value) => Ok(Self(value)),
        }
    }

    /// The id immediately after this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a calendar date entered by the user
///
/// Accepts `2024-03-17` as well as the display form `17 March 2024`.
pub fn parse_date(s: &str) -> Result<NaiveDate, DomainError> {
    let trimmed = s.trim();
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, DISPLAY_DATE_FORMAT))
        .map_err(|_| DomainError::InvalidDate(format!(
            "'{}' is not a date, use YYYY-MM-DD or e.g. 17 March 2024", trimmed
        )))
}

/// Render a date the way habit listings show it
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}
