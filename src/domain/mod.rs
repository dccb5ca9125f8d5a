/// Domain module containing core business logic and data types
///
/// This module defines the Habit entity, the streak rules that decide how a
/// check-in changes a habit, and the clock that tells the tracker what day
/// it is.

pub mod habit;
pub mod streak;
pub mod clock;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use streak::*;
pub use clock::*;
pub use types::*;

use thiserror::Error;

/// Errors raised when user input fails validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid score: {0}")]
    InvalidScore(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid habit id: '{0}' is not a positive number")]
    InvalidId(String),
}
