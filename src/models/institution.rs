//! Institution snapshot model.
//!
//! The complete input to a generation or audit run: every class with its
//! grid and requirements, and every teacher with their off-duty windows.
//! The engine treats this as a consistent snapshot supplied by the store;
//! it never reads anything else.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Class, Day, Teacher, TimeOfDay};

/// A consistent snapshot of one institution's timetable data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Institution {
    /// All classes with their slots and requirements.
    pub classes: Vec<Class>,
    /// All teachers with their availability windows.
    pub teachers: Vec<Teacher>,
}

impl Institution {
    /// Creates an empty institution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a class.
    pub fn with_class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    /// Adds a teacher.
    pub fn with_teacher(mut self, teacher: Teacher) -> Self {
        self.teachers.push(teacher);
        self
    }

    /// Finds a class by id.
    pub fn class(&self, class_id: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.id == class_id)
    }

    /// Finds a teacher by id.
    pub fn teacher(&self, teacher_id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == teacher_id)
    }

    /// Distinct `(day, start)` pairs across every class's lesson slots.
    ///
    /// This is the institution's weekly capacity grid: the number of
    /// distinct pairs bounds how many periods any one teacher can teach.
    pub fn distinct_lesson_times(&self) -> HashSet<(Day, TimeOfDay)> {
        self.classes
            .iter()
            .flat_map(|c| c.lesson_slots().map(|s| (s.day, s.start)))
            .collect()
    }

    /// Total lesson slot count across all classes.
    pub fn lesson_slot_count(&self) -> usize {
        self.classes.iter().map(|c| c.lesson_slot_count()).sum()
    }
}
