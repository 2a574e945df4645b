//! Teacher and availability-window models.
//!
//! Availability is the default: a teacher with no windows is free all
//! week. Windows only ever mark unavailability. A window with no start
//! and no end blocks the whole day; with both, it blocks the half-open
//! range `[start, end)`.

use serde::{Deserialize, Serialize};

use super::{Day, TimeOfDay};

/// A teacher.
///
/// One teacher may appear in subject requirements of several classes;
/// each requirement links back here by `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Periods when this teacher is off duty.
    pub windows: Vec<AvailabilityWindow>,
}

/// A period when a teacher is off duty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    /// Day the window applies to.
    pub day: Day,
    /// Window start. `None` together with `end: None` = whole day.
    pub start: Option<TimeOfDay>,
    /// Window end (exclusive).
    pub end: Option<TimeOfDay>,
}

impl Teacher {
    /// Creates a teacher with no off-duty windows (fully available).
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            windows: Vec::new(),
        }
    }

    /// Sets the teacher name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks the whole of `day` off duty.
    pub fn off_all_day(mut self, day: Day) -> Self {
        self.windows.push(AvailabilityWindow::whole_day(day));
        self
    }

    /// Marks `[start, end)` on `day` off duty.
    pub fn off_between(mut self, day: Day, start: TimeOfDay, end: TimeOfDay) -> Self {
        self.windows.push(AvailabilityWindow::between(day, start, end));
        self
    }
}

impl AvailabilityWindow {
    /// A whole-day off-duty window.
    pub fn whole_day(day: Day) -> Self {
        Self {
            day,
            start: None,
            end: None,
        }
    }

    /// A ranged off-duty window `[start, end)`.
    pub fn between(day: Day, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            day,
            start: Some(start),
            end: Some(end),
        }
    }

    /// Whether this window blocks the entire day.
    #[inline]
    pub fn is_whole_day(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether this window blocks the given time on its day.
    pub fn blocks(&self, time: TimeOfDay) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => time >= start && time < end,
            // Whole day, or a half-specified window treated as whole day
            _ => true,
        }
    }
}
