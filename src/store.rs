/// Habit store: the authoritative operations over the habit collection
///
/// Every mutating call runs inside one storage transaction. Either all of
/// its writes land or none do.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{
    days_since, decide_checkin, CheckinDecision, Clock, DomainError, Habit, HabitId, INITIAL_STREAK,
};
use crate::storage::{HabitField, HabitStorage, StorageError};

/// Errors returned by store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Habit not found: {id}")]
    NotFound { id: HabitId },

    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl StoreError {
    /// Storage failures end the current session; the rest are user mistakes
    pub fn is_fatal(&self) -> bool {
        matches!(self, StoreError::Storage(_))
    }
}

/// Owns the storage handle and the clock
pub struct HabitStore<S: HabitStorage> {
    storage: S,
    clock: Box<dyn Clock>,
}

impl<S: HabitStorage> HabitStore<S> {
    pub fn new(storage: S, clock: Box<dyn Clock>) -> Self {
        Self { storage, clock }
    }

    /// Today's date according to the store's clock
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Borrow the underlying storage (useful for testing)
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage so it can be closed
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Create a habit with a one-day streak checked today
    pub fn create(&self, name: &str) -> Result<HabitId, StoreError> {
        let name = Habit::validate_name(name)?;
        let today = self.today();

        let id = self.transaction(|storage| {
            Ok(storage.insert(&name, INITIAL_STREAK, today)?)
        })?;

        tracing::info!("Created habit {} '{}'", id, name);
        Ok(id)
    }

    pub fn get(&self, id: HabitId) -> Result<Habit, StoreError> {
        self.storage
            .select_by_id(id)?
            .ok_or(StoreError::NotFound { id })
    }

    /// All habits in id order
    pub fn list(&self) -> Result<Vec<Habit>, StoreError> {
        Ok(self.storage.select_all()?)
    }

    pub fn rename(&self, id: HabitId, new_name: &str) -> Result<(), StoreError> {
        let name = Habit::validate_name(new_name)?;
        self.overwrite(id, &[HabitField::Name(name)])
    }

    pub fn set_score(&self, id: HabitId, new_score: i64) -> Result<(), StoreError> {
        let score = Habit::validate_score(new_score)?;
        self.overwrite(id, &[HabitField::StreakDays(score)])
    }

    /// Override the last check date; any date is accepted here
    pub fn set_last_check(&self, id: HabitId, new_date: NaiveDate) -> Result<(), StoreError> {
        self.overwrite(id, &[HabitField::LastCheck(new_date)])
    }

    /// Delete a habit and close the gap it leaves in the ids
    pub fn delete(&self, id: HabitId) -> Result<(), StoreError> {
        self.transaction(|storage| {
            if storage.delete(id)? == 0 {
                return Err(StoreError::NotFound { id });
            }
            Self::compact(storage)
        })?;

        tracing::info!("Deleted habit {}", id);
        Ok(())
    }

    pub fn delete_all(&self) -> Result<(), StoreError> {
        self.transaction(|storage| Ok(storage.delete_all()?))?;

        tracing::info!("Deleted all habits");
        Ok(())
    }

    /// Swap the habits at `id` and `new_position`
    ///
    /// This is a swap, not a move: habits between the two positions keep
    /// their ids.
    pub fn reorder(&self, id: HabitId, new_position: HabitId) -> Result<(), StoreError> {
        self.transaction(|storage| {
            for existing in [id, new_position] {
                if storage.select_by_id(existing)?.is_none() {
                    return Err(StoreError::NotFound { id: existing });
                }
            }

            if id == new_position {
                return Ok(());
            }

            // Both habits exist, so max_id is Some; fall back to the larger of the two anyway
            let temp = storage.max_id()?.unwrap_or(id.max(new_position)).next();
            storage.update_fields(new_position, &[HabitField::Id(temp)])?;
            storage.update_fields(id, &[HabitField::Id(new_position)])?;
            storage.update_fields(temp, &[HabitField::Id(id)])?;
            Ok(())
        })?;

        tracing::info!("Swapped habits {} and {}", id, new_position);
        Ok(())
    }

    /// Look at a habit's last check and decide what checking in would do
    ///
    /// Nothing is written; the caller applies the decision.
    pub fn plan_checkin(&self, id: HabitId) -> Result<CheckinDecision, StoreError> {
        let habit = self.get(id)?;
        Ok(decide_checkin(days_since(habit.last_check, self.today())))
    }

    /// Add days to the streak and mark the habit checked today
    pub fn apply_checkin(&self, id: HabitId, days_to_add: u32) -> Result<(), StoreError> {
        let today = self.today();

        self.transaction(|storage| {
            let habit = storage.select_by_id(id)?.ok_or(StoreError::NotFound { id })?;
            storage.update_fields(id, &[
                HabitField::StreakDays(habit.streak_days.saturating_add(days_to_add)),
                HabitField::LastCheck(today),
            ])?;
            Ok(())
        })?;

        tracing::info!("Checked in habit {} (+{})", id, days_to_add);
        Ok(())
    }

    /// Reset the streak to zero, keeping the best streak as the record
    pub fn zero(&self, id: HabitId) -> Result<(), StoreError> {
        self.transaction(|storage| {
            let habit = storage.select_by_id(id)?.ok_or(StoreError::NotFound { id })?;
            storage.update_fields(id, &[
                HabitField::Record(Some(habit.record_after_zero())),
                HabitField::StreakDays(0),
            ])?;
            Ok(())
        })?;

        tracing::info!("Zeroed habit {}", id);
        Ok(())
    }

    pub fn clear_record(&self, id: HabitId) -> Result<(), StoreError> {
        self.overwrite(id, &[HabitField::Record(None)])
    }

    /// Single-row update that reports a missing id as NotFound
    fn overwrite(&self, id: HabitId, fields: &[HabitField]) -> Result<(), StoreError> {
        self.transaction(|storage| {
            if storage.update_fields(id, fields)? == 0 {
                return Err(StoreError::NotFound { id });
            }
            Ok(())
        })
    }

    /// Renumber habits to 1..=N, keeping their order
    ///
    /// Walking upwards never collides: each new id is at most the old one,
    /// and every smaller id is already settled.
    fn compact(storage: &S) -> Result<(), StoreError> {
        for (index, habit) in storage.select_all()?.into_iter().enumerate() {
            let expected = HabitId(index as u32 + 1);
            if habit.id != expected {
                storage.update_fields(habit.id, &[HabitField::Id(expected)])?;
            }
        }
        Ok(())
    }

    /// Run `f` inside a storage transaction, rolling back on any error
    fn transaction<T>(&self, f: impl FnOnce(&S) -> Result<T, StoreError>) -> Result<T, StoreError> {
        self.storage.begin()?;

        match f(&self.storage) {
            Ok(value) => {
                self.storage.commit()?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = self.storage.rollback() {
                    tracing::warn!("Rollback failed after error '{}': {}", e, rollback_err);
                }
                Err(e)
            }
        }
    }
}
