//! Calendar date with year context.

use crate::epoch::{EpochDay, days_before_year};
use crate::error::CalendarError;
use crate::month::{days_in_month, month_name, month_start_doy};
use crate::week::Weekday;

/// A date in the Absalom Reckoning calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl Date {
    /// Creates a new `Date` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the year is below 1, the month is not
    /// in 1..=12, or the day is invalid for the given month and year
    /// (29 Calistril exists only in leap years).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if year < 1 {
            return Err(CalendarError::InvalidYear { year });
        }
        let max_day = days_in_month(month, year)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a `Date` from an epoch day.
    ///
    /// This constructor is infallible because `EpochDay` guarantees a
    /// day count of at least 1, which always lands in a valid date.
    pub fn from_epoch_day(epoch: EpochDay) -> Self {
        let (month, day) = epoch.month_day();
        Self {
            year: epoch.year(),
            month,
            day,
        }
    }

    /// Returns the year (>= 1).
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (u8, u8) {
        (self.month, self.day)
    }

    /// Returns the name of this date's month.
    pub fn month_name(self) -> &'static str {
        // Safety: Date always holds a month in 1..=12, guaranteed by the
        // constructors.
        month_name(self.month).expect("Date always holds a valid month")
    }

    /// Returns the linear day count for this date. 1 Abadius 1 AR is
    /// epoch day 1.
    pub fn epoch_day(self) -> EpochDay {
        let doy = i64::from(month_start_doy(self.year)[self.month as usize])
            + i64::from(self.day)
            - 1;
        EpochDay::from_valid(days_before_year(self.year) + doy)
    }

    /// Returns the day of the week for this date.
    pub fn weekday(self) -> Weekday {
        self.epoch_day().weekday()
    }
}
