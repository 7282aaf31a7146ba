//! # absalom-calendar
//!
//! Pure date arithmetic for the Absalom Reckoning calendar: twelve months,
//! seven-day weeks, and a leap day in Calistril every 8th year.
//!
//! The linchpin is the epoch day, the linear count of days since
//! 1 Abadius 1 AR (epoch day 1; day 0 does not exist). The mean year is
//! 365 + 1/8 days, so every conversion is exact in units of one eighth
//! of a day.
//!
//! ## Quick Start
//!
//! ```ignore
//! use absalom_calendar::{Date, EpochDay, Weekday};
//!
//! let date = Date::new(1, 1, 1)?;           // 1 Abadius 1 AR
//! assert_eq!(date.epoch_day().get(), 1);
//! assert_eq!(date.weekday(), Weekday::Moonday);
//!
//! let epoch = EpochDay::new(2921)?;         // last day of leap year 8
//! assert_eq!(Date::from_epoch_day(epoch).month_day(), (12, 31));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `epoch` | Epoch-day newtype and conversions |
//! | `date` | Date with year context |
//! | `month` | Month tables and leap-year rules |
//! | `week` | Weekday enum |
//! | `error` | Error types |

mod date;
mod epoch;
mod error;
mod month;
mod week;

pub use date::Date;
pub use epoch::EpochDay;
pub use error::CalendarError;
pub use month::{
    LEAP_YEAR_PERIOD, MONTH_NAMES, days_in_month, days_in_year, is_leap_year, month_name,
};
pub use week::Weekday;
