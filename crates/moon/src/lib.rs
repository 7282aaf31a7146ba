//! # absalom-moon
//!
//! Moon phase lookup over the Absalom Reckoning epoch.
//!
//! The synodic month is approximated as 29.5 days. Each cycle is split
//! into eight named phases with non-uniform segment lengths summing to
//! 29 days; the half day of slack accumulates across cycles through the
//! truncating cycle arithmetic. Epoch day 1 (1 Abadius 1 AR) falls on a
//! full moon.

use std::fmt;

use absalom_calendar::EpochDay;

/// Length of the synodic month in half days: 29.5 days exactly.
const CYCLE_HALF_DAYS: i64 = 59;

/// Days spent in each phase, in cycle order starting at the full moon.
///
/// The bright and dark peaks are short (3 and 2 days); the transitional
/// phases last 4 days each. The lengths sum to 29.
const PHASE_LENGTHS: [i64; 8] = [3, 4, 4, 4, 2, 4, 4, 4];

/// Relative brightness of each phase, 0 (new moon) to 3 (full moon).
const BRIGHTNESS: [u8; 8] = [3, 2, 2, 1, 0, 1, 2, 2];

/// A phase of the moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    FullMoon,
    WaningGibbous,
    ThirdQuarter,
    WaningCrescent,
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
}

impl MoonPhase {
    /// All phases in cycle order, full moon first.
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::FullMoon,
        MoonPhase::WaningGibbous,
        MoonPhase::ThirdQuarter,
        MoonPhase::WaningCrescent,
        MoonPhase::NewMoon,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
    ];

    /// Returns the phase name.
    pub fn name(self) -> &'static str {
        match self {
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::ThirdQuarter => "Third Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
        }
    }

    /// Returns the relative brightness of this phase, 0 (new moon) to
    /// 3 (full moon).
    pub fn brightness(self) -> u8 {
        BRIGHTNESS[self as usize]
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the position of `epoch` within its synodic cycle, 0..=29.
///
/// Equals `epoch_day - trunc(29.5 * trunc(epoch_day / 29.5))`, computed
/// exactly in half days.
pub fn moon_day(epoch: EpochDay) -> i64 {
    let e = epoch.get();
    let cycles = 2 * e / CYCLE_HALF_DAYS;
    e - CYCLE_HALF_DAYS * cycles / 2
}

/// Returns the moon phase on the given epoch day.
pub fn moon_phase(epoch: EpochDay) -> MoonPhase {
    let mut remaining = moon_day(epoch);
    let mut phase = 0;
    // remaining is at most 29 = sum of the segment lengths, so the walk
    // ends within the table
    while remaining > 0 {
        remaining -= PHASE_LENGTHS[phase];
        if remaining > 0 {
            phase += 1;
        }
    }
    MoonPhase::ALL[phase]
}
