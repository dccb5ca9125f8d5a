/// Storage layer for persisting habit data
///
/// This module handles all database operations using SQLite. It provides
/// a small record-store interface: insert, select, update, delete, plus
/// explicit transaction control so the store can make every logical change
/// all-or-nothing.

pub mod sqlite;
pub mod migrations;

// Re-export the main storage types
pub use sqlite::*;

use chrono::NaiveDate;
use thiserror::Error;
use crate::domain::{Habit, HabitId};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Migration error: {0}")]
    Migration(String),
}

/// A single column assignment for `update_fields`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitField {
    Id(HabitId),
    Name(String),
    StreakDays(u32),
    LastCheck(NaiveDate),
    Record(Option<u32>),
}

/// Trait defining the storage interface for habits
///
/// Single process, single connection. Nothing here guards against a second
/// process writing the same file.
pub trait HabitStorage {
    /// Insert a new habit and return the id it was given
    fn insert(&self, name: &str, streak_days: u32, last_check: NaiveDate) -> Result<HabitId, StorageError>;

    /// Get a habit by id
    fn select_by_id(&self, id: HabitId) -> Result<Option<Habit>, StorageError>;

    /// All habits ordered by id ascending
    fn select_all(&self) -> Result<Vec<Habit>, StorageError>;

    /// Overwrite the given columns of one habit, returning rows affected
    fn update_fields(&self, id: HabitId, fields: &[HabitField]) -> Result<usize, StorageError>;

    /// Delete one habit, returning rows affected
    fn delete(&self, id: HabitId) -> Result<usize, StorageError>;

    /// Delete every habit
    fn delete_all(&self) -> Result<(), StorageError>;

    /// Highest id in use, if there are any habits
    fn max_id(&self) -> Result<Option<HabitId>, StorageError>;

    /// Start a transaction
    fn begin(&self) -> Result<(), StorageError>;

    /// Durably commit the open transaction
    fn commit(&self) -> Result<(), StorageError>;

    /// Discard the open transaction
    fn rollback(&self) -> Result<(), StorageError>;
}
