//! Day-of-week and time-of-day primitives.
//!
//! The weekly grid is addressed by `(Day, TimeOfDay)` pairs. Both types
//! order naturally (Monday before Tuesday, 08:00 before 09:00) so that
//! slot iteration order — day ascending, then start time ascending — falls
//! out of a plain sort.
//!
//! # Time Model
//! A `TimeOfDay` is minutes since midnight. Lesson intervals are
//! half-open: a slot `[start, end)` includes its start and excludes its end.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A day of the school week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All days in week order.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

/// A time of day in minutes since midnight.
///
/// Displays as `HH:MM`, the form used in conflict and audit messages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct TimeOfDay {
    /// Minutes since midnight (0..1440).
    pub minutes: u16,
}

impl TimeOfDay {
    /// Creates a time of day from hour and minute.
    pub fn new(hour: u16, minute: u16) -> Self {
        Self {
            minutes: hour * 60 + minute,
        }
    }

    /// Creates a time of day from raw minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Self {
        Self { minutes }
    }

    /// Hour component (0..24).
    #[inline]
    pub fn hour(&self) -> u16 {
        self.minutes / 60
    }

    /// Minute component (0..60).
    #[inline]
    pub fn minute(&self) -> u16 {
        self.minutes % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
