/// SQLite implementation of the habit storage interface
///
/// This module provides the concrete SQLite implementation for storing
/// and retrieving habits. It handles all SQL queries and row conversion.

use std::path::Path;
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};
use rusqlite::types::Value;
use chrono::NaiveDate;

use crate::domain::{Habit, HabitId, ISO_DATE_FORMAT};
use crate::storage::{StorageError, HabitStorage, HabitField, migrations};

const HABIT_COLUMNS: &str = "id, name, streak_days, last_check, record";

/// SQLite-based storage implementation
///
/// This struct holds a connection to the SQLite database and implements
/// all the storage operations defined in the HabitStorage trait.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open (or create) the database file and bring its schema up to date
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db_path = db_path.as_ref();
        let conn = Connection::open(db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite storage initialized at: {:?}", db_path);

        Ok(Self { conn })
    }

    /// Open a throwaway database that lives only as long as this value
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open in-memory database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        Ok(Self { conn })
    }

    /// Close the connection, reporting any error SQLite raises on the way out
    pub fn close(self) -> Result<(), StorageError> {
        self.conn.close().map_err(|(_, e)| {
            StorageError::Connection(format!("Failed to close database: {}", e))
        })?;

        tracing::info!("SQLite storage closed");
        Ok(())
    }

    /// Convert a `habits` row into a Habit
    fn habit_from_row(row: &Row<'_>) -> rusqlite::Result<Habit> {
        Ok(Habit::from_existing(
            HabitId(row.get(0)?),
            row.get(1)?,      // name
            row.get(2)?,      // streak_days
            row.get::<_, NaiveDate>(3)?,
            row.get(4)?,      // record
        ))
    }

    /// Column name and bound value for a field assignment
    fn field_binding(field: &HabitField) -> (&'static str, Value) {
        match field {
            HabitField::Id(id) => ("id", Value::Integer(i64::from(id.value()))),
            HabitField::Name(name) => ("name", Value::Text(name.clone())),
            HabitField::StreakDays(days) => ("streak_days", Value::Integer(i64::from(*days))),
            HabitField::LastCheck(date) => ("last_check", Value::Text(date.format(ISO_DATE_FORMAT).to_string())),
            HabitField::Record(Some(record)) => ("record", Value::Integer(i64::from(*record))),
            HabitField::Record(None) => ("record", Value::Null),
        }
    }
}

impl HabitStorage for SqliteStorage {
    fn insert(&self, name: &str, streak_days: u32, last_check: NaiveDate) -> Result<HabitId, StorageError> {
        self.conn.execute(
            "INSERT INTO habits (name, streak_days, last_check) VALUES (?1, ?2, ?3)",
            params![name, streak_days, last_check],
        )?;

        let id = HabitId(u32::try_from(self.conn.last_insert_rowid()).map_err(|_| {
            StorageError::Query(rusqlite::Error::IntegralValueOutOfRange(0, self.conn.last_insert_rowid()))
        })?);

        tracing::debug!("Inserted habit {} ({})", id, name);
        Ok(id)
    }

    fn select_by_id(&self, id: HabitId) -> Result<Option<Habit>, StorageError> {
        let mut stmt = self.conn.prepare(
            &format!("SELECT {} FROM habits WHERE id = ?1", HABIT_COLUMNS)
        )?;

        let habit = stmt
            .query_row(params![id.value()], Self::habit_from_row)
            .optional()?;

        Ok(habit)
    }

    fn select_all(&self) -> Result<Vec<Habit>, StorageError> {
        let mut stmt = self.conn.prepare(
            &format!("SELECT {} FROM habits ORDER BY id ASC", HABIT_COLUMNS)
        )?;

        let habit_iter = stmt.query_map([], Self::habit_from_row)?;

        let mut habits = Vec::new();
        for habit in habit_iter {
            habits.push(habit?);
        }

        Ok(habits)
    }

    /// An empty field list touches nothing and reports zero rows
    fn update_fields(&self, id: HabitId, fields: &[HabitField]) -> Result<usize, StorageError> {
        if fields.is_empty() {
            return Ok(0);
        }

        let mut assignments = Vec::with_capacity(fields.len());
        let mut values = Vec::with_capacity(fields.len() + 1);
        for (index, field) in fields.iter().enumerate() {
            let (column, value) = Self::field_binding(field);
            assignments.push(format!("{} = ?{}", column, index + 1));
            values.push(value);
        }
        values.push(Value::Integer(i64::from(id.value())));

        let sql = format!(
            "UPDATE habits SET {} WHERE id = ?{}",
            assignments.join(", "),
            values.len()
        );

        let rows_affected = self.conn.execute(&sql, params_from_iter(values.iter()))?;

        tracing::debug!("Updated habit {}: {:?} ({} rows)", id, fields, rows_affected);
        Ok(rows_affected)
    }

    fn delete(&self, id: HabitId) -> Result<usize, StorageError> {
        let rows_affected = self.conn.execute(
            "DELETE FROM habits WHERE id = ?1",
            params![id.value()],
        )?;

        tracing::debug!("Deleted habit {} ({} rows)", id, rows_affected);
        Ok(rows_affected)
    }

    fn delete_all(&self) -> Result<(), StorageError> {
        let rows_affected = self.conn.execute("DELETE FROM habits", [])?;

        tracing::debug!("Deleted all habits ({} rows)", rows_affected);
        Ok(())
    }

    fn max_id(&self) -> Result<Option<HabitId>, StorageError> {
        let max: Option<u32> = self.conn.query_row(
            "SELECT MAX(id) FROM habits",
            [],
            |row| row.get(0),
        )?;

        Ok(max.map(HabitId))
    }

    fn begin(&self) -> Result<(), StorageError> {
        self.conn.execute_batch("BEGIN IMMEDIATE")?;
        Ok(())
    }

    fn commit(&self) -> Result<(), StorageError> {
        self.conn.execute_batch("COMMIT")?;
        Ok(())
    }

    fn rollback(&self) -> Result<(), StorageError> {
        self.conn.execute_batch("ROLLBACK")?;
        Ok(())
    }
}
