/// Source of "today" for streak calculations
///
/// Streaks work on whole calendar days, so the clock only ever hands out a
/// `NaiveDate`. Time of day never reaches the streak rules.

use std::cell::Cell;
use chrono::{Duration, Local, NaiveDate};

pub trait Clock {
    /// The current calendar date
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system date
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Manually controlled clock
///
/// Starts at a given date and only moves when told to.
#[derive(Debug, Clone)]
pub struct FixedClock {
    date: Cell<NaiveDate>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date: Cell::new(date) }
    }

    /// Move the clock forward by a number of days
    pub fn advance_days(&self, days: i64) {
        self.date.set(self.date.get() + Duration::days(days));
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date.get()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
