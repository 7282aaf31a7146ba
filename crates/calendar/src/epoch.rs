//! Epoch-day newtype and conversions to year, day-of-year, and month/day.

use crate::error::CalendarError;
use crate::month::month_lengths;
use crate::week::Weekday;

/// Length of the mean year in eighths of a day: 365 + 1/8 days.
///
/// The leap cycle adds one day every 8 years, so all year arithmetic is
/// exact in units of one eighth of a day.
const YEAR_EIGHTHS: i64 = 2921;

/// Linear day count since 1 Abadius 1 AR, which is epoch day 1.
///
/// Epoch day 0 does not exist; values below 1 are rejected by [`EpochDay::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EpochDay(i64);

/// Number of days elapsed before the first day of `year`.
///
/// Equals `(year - 1) * 365.125` truncated toward zero, computed exactly
/// in integers.
pub(crate) fn days_before_year(year: i32) -> i64 {
    let y = i64::from(year) - 1;
    365 * y + y / crate::month::LEAP_YEAR_PERIOD as i64
}

impl EpochDay {
    /// Creates a new `EpochDay` from a linear day count.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidEpochDay`] if `epoch_day` is below 1.
    pub fn new(epoch_day: i64) -> Result<Self, CalendarError> {
        if epoch_day < 1 {
            return Err(CalendarError::InvalidEpochDay { epoch_day });
        }
        Ok(Self(epoch_day))
    }

    /// Constructor for epoch days already known to be >= 1, such as values
    /// derived from a validated date.
    pub(crate) fn from_valid(epoch_day: i64) -> Self {
        debug_assert!(epoch_day >= 1);
        Self(epoch_day)
    }

    /// Returns the inner linear day count (>= 1).
    pub fn get(self) -> i64 {
        self.0
    }

    /// Returns the year containing this epoch day.
    ///
    /// Equals `ceil(epoch_day / 365.125)`, computed exactly in eighths.
    pub fn year(self) -> i32 {
        (8 * self.0 as u64).div_ceil(YEAR_EIGHTHS as u64) as i32
    }

    /// Returns the 1-based day-of-year within [`EpochDay::year`].
    ///
    /// Always in `1..=days_in_year(year)`.
    pub fn day_in_year(self) -> u16 {
        (self.0 - days_before_year(self.year())) as u16
    }

    /// Returns the `(month, day)` pair for this epoch day.
    ///
    /// The leap month table is used when the containing year is a leap year.
    pub fn month_day(self) -> (u8, u8) {
        let table = month_lengths(self.year());
        let mut remaining = self.day_in_year();
        for month in 1..=12u8 {
            let len = u16::from(table[month as usize]);
            if remaining <= len {
                return (month, remaining as u8);
            }
            remaining -= len;
        }
        // day_in_year never exceeds the sum of the month lengths
        unreachable!("day-of-year {} exceeds year length", self.day_in_year())
    }

    /// Returns the day of the week, cyclic with period 7 from epoch day 1
    /// (a Moonday).
    pub fn weekday(self) -> Weekday {
        Weekday::ALL[((self.0 - 1) % 7) as usize]
    }
}
