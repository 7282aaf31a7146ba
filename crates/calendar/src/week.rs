//! Days of the seven-day Golarion week.

use std::fmt;

/// A day of the week. Weeks start on Moonday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Moonday,
    Toilday,
    Wealday,
    Oathday,
    Fireday,
    Starday,
    Sunday,
}

impl Weekday {
    /// All weekdays in week order, Moonday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Moonday,
        Weekday::Toilday,
        Weekday::Wealday,
        Weekday::Oathday,
        Weekday::Fireday,
        Weekday::Starday,
        Weekday::Sunday,
    ];

    /// Returns the 1-based weekday number (Moonday = 1, ..., Sunday = 7).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the weekday name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Moonday => "Moonday",
            Weekday::Toilday => "Toilday",
            Weekday::Wealday => "Wealday",
            Weekday::Oathday => "Oathday",
            Weekday::Fireday => "Fireday",
            Weekday::Starday => "Starday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_in_week_order() {
        let names: Vec<&str> = Weekday::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            [
                "Moonday", "Toilday", "Wealday", "Oathday", "Fireday", "Starday", "Sunday"
            ]
        );
    }

    #[test]
    fn numbers_are_1_based() {
        assert_eq!(Weekday::Moonday.number(), 1);
        assert_eq!(Weekday::Oathday.number(), 4);
        assert_eq!(Weekday::Sunday.number(), 7);
    }

    #[test]
    fn display_matches_name() {
        for day in Weekday::ALL {
            assert_eq!(day.to_string(), day.name());
        }
    }

    #[test]
    fn copy_and_ord() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<Weekday>();
        assert!(Weekday::Moonday < Weekday::Sunday);
    }
}
