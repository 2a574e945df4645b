//! Class model.
//!
//! A class owns an ordered collection of weekly slots and the subject
//! requirements that must be spread across them.

use serde::{Deserialize, Serialize};

use super::{Day, Slot, SubjectRequirement, TimeOfDay};

/// A class (form/grade group) with its weekly grid and subject demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    /// Unique class identifier.
    pub id: String,
    /// Human-readable name (e.g., "JSS1A").
    pub name: String,
    /// Weekly slots, lessons and breaks.
    pub slots: Vec<Slot>,
    /// Subject requirements for the week.
    pub requirements: Vec<SubjectRequirement>,
}

impl Class {
    /// Creates an empty class.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            slots: Vec::new(),
            requirements: Vec::new(),
        }
    }

    /// Sets the class name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a slot.
    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slots.push(slot);
        self
    }

    /// Adds a subject requirement.
    pub fn with_requirement(mut self, requirement: SubjectRequirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    /// Iterates lesson slots only.
    pub fn lesson_slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(|s| s.is_lesson())
    }

    /// Whether the class has at least one lesson slot.
    pub fn has_lesson_slots(&self) -> bool {
        self.slots.iter().any(|s| s.is_lesson())
    }

    /// Number of lesson slots.
    pub fn lesson_slot_count(&self) -> usize {
        self.lesson_slots().count()
    }

    /// Finds the requirement for a subject, if any.
    pub fn requirement_for(&self, subject_id: &str) -> Option<&SubjectRequirement> {
        self.requirements.iter().find(|r| r.subject_id == subject_id)
    }

    /// The teacher linked to a subject through this class's requirements.
    pub fn teacher_for_subject(&self, subject_id: &str) -> Option<&str> {
        self.requirement_for(subject_id)
            .and_then(|r| r.teacher_id.as_deref())
    }

    /// Finds the lesson slot at a given day and start time, if any.
    pub fn lesson_slot_at(&self, day: Day, start: TimeOfDay) -> Option<&Slot> {
        self.lesson_slots()
            .find(|s| s.day == day && s.start == start)
    }

    /// Total weekly demand: sum of periods per week across requirements.
    pub fn total_demand(&self) -> u32 {
        self.requirements.iter().map(|r| r.periods_per_week).sum()
    }
}
