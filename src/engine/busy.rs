//! Teacher-busy map.
//!
//! Transient, caller-owned lookup of which teacher is committed where at
//! each `(day, start, teacher)` triple. Built fresh at the start of a
//! generation run and discarded afterwards; only the slot mutations it
//! produced persist. Not safe for concurrent mutation — one run per
//! institution at a time (see the crate-level concurrency contract).

use std::collections::HashMap;

use crate::models::{Day, TimeOfDay};

/// Who holds a teacher at a given day and start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Occupant {
    /// The teacher is teaching this class.
    Class(String),
    /// The teacher is off duty per an availability window.
    OffDuty,
}

/// Composite-keyed occupancy map: `(day, start, teacher) → occupant`.
#[derive(Debug, Clone, Default)]
pub struct TeacherBusyMap {
    entries: HashMap<(Day, TimeOfDay, String), Occupant>,
}

impl TeacherBusyMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a teacher busy, overwriting any previous occupant.
    pub fn occupy(&mut self, day: Day, start: TimeOfDay, teacher_id: &str, occupant: Occupant) {
        self.entries
            .insert((day, start, teacher_id.to_string()), occupant);
    }

    /// Clears a teacher's occupancy at a time, returning the old occupant.
    pub fn release(&mut self, day: Day, start: TimeOfDay, teacher_id: &str) -> Option<Occupant> {
        self.entries.remove(&(day, start, teacher_id.to_string()))
    }

    /// The occupant holding a teacher at a time, if any.
    pub fn occupant(&self, day: Day, start: TimeOfDay, teacher_id: &str) -> Option<&Occupant> {
        self.entries.get(&(day, start, teacher_id.to_string()))
    }

    /// Whether a teacher is free at a time.
    pub fn is_free(&self, day: Day, start: TimeOfDay, teacher_id: &str) -> bool {
        self.occupant(day, start, teacher_id).is_none()
    }

    /// Number of occupied entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
