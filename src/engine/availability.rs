//! Availability index.
//!
//! Compiles every teacher's off-duty windows into a `(teacher, day)`
//! keyed lookup so the allocator can ask "is teacher T blocked at
//! (day, time)?" in O(1) amortized. Absent data means fully available —
//! teachers not in the index, or days without windows, are free.

use std::collections::HashMap;

use crate::models::{Day, Teacher, TimeOfDay};

/// Blocked intervals for one teacher on one day.
#[derive(Debug, Clone, Default)]
struct DayBlocks {
    /// A whole-day window was present; everything on the day is blocked.
    whole_day: bool,
    /// Ranged windows `[start, end)`.
    ranges: Vec<(TimeOfDay, TimeOfDay)>,
}

/// Fast off-duty lookup built from availability windows.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityIndex {
    blocks: HashMap<(String, Day), DayBlocks>,
}

impl AvailabilityIndex {
    /// Builds the index from a set of teachers.
    pub fn build(teachers: &[Teacher]) -> Self {
        let mut blocks: HashMap<(String, Day), DayBlocks> = HashMap::new();

        for teacher in teachers {
            for window in &teacher.windows {
                let entry = blocks
                    .entry((teacher.id.clone(), window.day))
                    .or_default();
                match (window.start, window.end) {
                    (Some(start), Some(end)) => entry.ranges.push((start, end)),
                    // No times (or a half-specified window) blocks the day
                    _ => entry.whole_day = true,
                }
            }
        }

        Self { blocks }
    }

    /// Whether a teacher is off duty at the given day and time.
    pub fn is_blocked(&self, teacher_id: &str, day: Day, time: TimeOfDay) -> bool {
        match self.blocks.get(&(teacher_id.to_string(), day)) {
            None => false,
            Some(day_blocks) => {
                day_blocks.whole_day
                    || day_blocks
                        .ranges
                        .iter()
                        .any(|&(start, end)| time >= start && time < end)
            }
        }
    }

    /// Whether any window exists for a teacher at all.
    pub fn has_windows(&self, teacher_id: &str) -> bool {
        self.blocks.keys().any(|(id, _)| id == teacher_id)
    }
}
