//! Slot model.
//!
//! A slot is one fixed weekly time box in a class's grid — either a
//! lesson (an allocation target) or a break (never assigned). Slots are
//! created by administrative setup; the engine only ever writes the
//! `subject_id` of lesson slots.

use serde::{Deserialize, Serialize};

use super::{Day, TimeOfDay};

/// What a slot is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotKind {
    /// A teachable period; the only kind the allocator fills.
    Lesson,
    /// A break period; never an allocation target.
    Break,
}

/// A fixed weekly time box belonging to one class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    /// Unique slot identifier.
    pub id: String,
    /// Day of week.
    pub day: Day,
    /// Start time (inclusive).
    pub start: TimeOfDay,
    /// End time (exclusive).
    pub end: TimeOfDay,
    /// Lesson or break.
    pub kind: SlotKind,
    /// Assigned subject, if any.
    pub subject_id: Option<String>,
    /// Whether this slot has been published to students.
    pub published: bool,
}

impl Slot {
    /// Creates an unassigned lesson slot.
    pub fn lesson(id: impl Into<String>, day: Day, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            id: id.into(),
            day,
            start,
            end,
            kind: SlotKind::Lesson,
            subject_id: None,
            published: false,
        }
    }

    /// Creates a break slot.
    pub fn break_period(id: impl Into<String>, day: Day, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            id: id.into(),
            day,
            start,
            end,
            kind: SlotKind::Break,
            subject_id: None,
            published: false,
        }
    }

    /// Sets the assigned subject.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subject_id = Some(subject_id.into());
        self
    }

    /// Sets the published flag.
    pub fn with_published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    /// Whether this is a lesson slot.
    #[inline]
    pub fn is_lesson(&self) -> bool {
        self.kind == SlotKind::Lesson
    }

    /// Whether this slot carries an assignment.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.subject_id.is_some()
    }

    /// Whether this lesson slot is still open for allocation.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.is_lesson() && self.subject_id.is_none()
    }
}
