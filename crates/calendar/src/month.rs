//! Month tables and leap-year rules for the Absalom Reckoning calendar.

use crate::error::CalendarError;

/// Every year divisible by this period gains a leap day in Calistril.
pub const LEAP_YEAR_PERIOD: i32 = 8;

/// Month names in calendar order (index 0 = Abadius, index 11 = Kuthona).
pub const MONTH_NAMES: [&str; 12] = [
    "Abadius",
    "Calistril",
    "Pharast",
    "Gozren",
    "Desnus",
    "Sarenith",
    "Erastus",
    "Arodus",
    "Rova",
    "Lamashan",
    "Neth",
    "Kuthona",
];

/// Number of days in each month of a common year
/// (index 0 unused, index 1 = Abadius, ..., index 12 = Kuthona).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Number of days in each month of a leap year. Calistril gains one day.
pub(crate) const LEAP_DAYS_PER_MONTH: [u8; 13] =
    [0, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year on which each month starts in a common year
/// (index 0 unused, index 1 = Abadius starts at day-of-year 1, ...).
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// Day-of-year on which each month starts in a leap year.
pub(crate) const LEAP_MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 61, 92, 122, 153, 183, 214, 245, 275, 306, 336];

/// Returns `true` when `year` carries a leap day (year divisible by 8).
pub fn is_leap_year(year: i32) -> bool {
    year % LEAP_YEAR_PERIOD == 0
}

/// Returns the number of days in `year`: 365 for a common year, 366 for a leap year.
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns the number of days in the given month of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(month: u8, year: i32) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(month_lengths(year)[month as usize])
}

/// Returns the name of the given month (1 = Abadius, ..., 12 = Kuthona).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn month_name(month: u8) -> Result<&'static str, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(MONTH_NAMES[month as usize - 1])
}

/// Selects the month-length table for `year`.
pub(crate) fn month_lengths(year: i32) -> &'static [u8; 13] {
    if is_leap_year(year) {
        &LEAP_DAYS_PER_MONTH
    } else {
        &DAYS_PER_MONTH
    }
}

/// Selects the month-start table for `year`.
pub(crate) fn month_start_doy(year: i32) -> &'static [u16; 13] {
    if is_leap_year(year) {
        &LEAP_MONTH_START_DOY
    } else {
        &MONTH_START_DOY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(8));
        assert!(is_leap_year(16));
        assert!(is_leap_year(4712));
        assert!(!is_leap_year(1));
        assert!(!is_leap_year(7));
        assert!(!is_leap_year(9));
    }

    #[test]
    fn year_lengths() {
        assert_eq!(days_in_year(1), 365);
        assert_eq!(days_in_year(8), 366);
        assert_eq!(days_in_year(9), 365);
    }

    #[test]
    fn calistril_common_vs_leap() {
        assert_eq!(days_in_month(2, 7).unwrap(), 28);
        assert_eq!(days_in_month(2, 8).unwrap(), 29);
        assert_eq!(days_in_month(2, 9).unwrap(), 28);
    }

    #[test]
    fn days_in_month_invalid() {
        assert_eq!(
            days_in_month(0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            days_in_month(13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn month_names_in_order() {
        assert_eq!(month_name(1).unwrap(), "Abadius");
        assert_eq!(month_name(2).unwrap(), "Calistril");
        assert_eq!(month_name(12).unwrap(), "Kuthona");
    }

    #[test]
    fn month_name_invalid() {
        assert_eq!(
            month_name(0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            month_name(13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn table_integrity_days_per_month() {
        let common: u16 = DAYS_PER_MONTH[1..=12].iter().copied().map(u16::from).sum();
        assert_eq!(common, 365);
        let leap: u16 = LEAP_DAYS_PER_MONTH[1..=12]
            .iter()
            .copied()
            .map(u16::from)
            .sum();
        assert_eq!(leap, 366);
    }

    #[test]
    fn table_integrity_month_start() {
        for m in 1..12usize {
            assert_eq!(
                MONTH_START_DOY[m] + DAYS_PER_MONTH[m] as u16,
                MONTH_START_DOY[m + 1],
                "MONTH_START_DOY mismatch at month {m}"
            );
            assert_eq!(
                LEAP_MONTH_START_DOY[m] + LEAP_DAYS_PER_MONTH[m] as u16,
                LEAP_MONTH_START_DOY[m + 1],
                "LEAP_MONTH_START_DOY mismatch at month {m}"
            );
        }
    }

    #[test]
    fn table_selection() {
        assert_eq!(month_lengths(8)[2], 29);
        assert_eq!(month_lengths(9)[2], 28);
        assert_eq!(month_start_doy(8)[3], 61);
        assert_eq!(month_start_doy(9)[3], 60);
    }
}
