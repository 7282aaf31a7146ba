//! Error types for the absalom-calendar crate.

/// Error type for all fallible operations in the absalom-calendar crate.
///
/// This enum covers validation failures for epoch-day values, years,
/// month numbers, and day-within-month values. Day validation is
/// leap-aware: Calistril (month 2) accepts day 29 only in years
/// divisible by 8.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when an epoch-day value is below 1 (epoch day 0 does not exist).
    #[error("invalid epoch day: {epoch_day} (must be >= 1)")]
    InvalidEpochDay {
        /// The invalid epoch-day value that was provided.
        epoch_day: i64,
    },

    /// Returned when a year is below 1 (Absalom Reckoning starts at year 1).
    #[error("invalid year: {year} (must be >= 1)")]
    InvalidYear {
        /// The invalid year that was provided.
        year: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },
}
