//! Demand pool.
//!
//! Expands a class's subject requirements into a multiset of placement
//! tickets — one ticket per weekly period still owed. Already-filled
//! slots are subtracted at build time, so re-running generation on a
//! partially filled grid never duplicates demand.
//!
//! Tickets are held in insertion order (requirement declaration order,
//! each requirement expanded contiguously), which is the tie-break order
//! the allocator uses. Removal is by index with `remove-one-matching`
//! semantics for subtraction; the pool is an explicit bag, never spliced
//! while being iterated.

use crate::models::{Class, SubjectRequirement};

/// One unit of placement demand: a single weekly period of a subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// Subject owed to the class.
    pub subject_id: String,
    /// Teacher delivering it, if the requirement has one.
    ///
    /// Teacherless tickets are never placeable (there is no availability
    /// to check); they remain in the pool and surface in conflict reasons.
    pub teacher_id: Option<String>,
}

/// The multiset of unfilled placement obligations for one class.
#[derive(Debug, Clone, Default)]
pub struct DemandPool {
    tickets: Vec<Ticket>,
}

impl DemandPool {
    /// Expands requirements into tickets, one per weekly period.
    ///
    /// Insertion order is requirement declaration order, each requirement
    /// expanded contiguously.
    pub fn from_requirements(requirements: &[SubjectRequirement]) -> Self {
        let mut tickets = Vec::new();

        for requirement in requirements {
            for _ in 0..requirement.periods_per_week {
                tickets.push(Ticket {
                    subject_id: requirement.subject_id.clone(),
                    teacher_id: requirement.teacher_id.clone(),
                });
            }
        }

        Self { tickets }
    }

    /// Builds the pool for a class, subtracting existing placements.
    ///
    /// Each requirement contributes `periods_per_week` tickets. Then one
    /// matching ticket is removed per already-assigned lesson slot. A
    /// filled slot whose subject has no remaining ticket (or no
    /// requirement at all — data drift) is left untouched and does not
    /// draw down the pool.
    pub fn build(class: &Class) -> Self {
        let mut pool = Self::from_requirements(&class.requirements);

        for slot in class.lesson_slots() {
            if let Some(subject_id) = &slot.subject_id {
                pool.remove_first_for(subject_id);
            }
        }

        pool
    }

    /// Iterates tickets in insertion order with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Ticket)> {
        self.tickets.iter().enumerate()
    }

    /// Removes and returns the ticket at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds; indices come from [`Self::iter`]
    /// and must be consumed before the pool is mutated again.
    pub fn take(&mut self, index: usize) -> Ticket {
        self.tickets.remove(index)
    }

    /// Removes the first ticket for a subject, if one exists.
    pub fn remove_first_for(&mut self, subject_id: &str) -> Option<Ticket> {
        let index = self
            .tickets
            .iter()
            .position(|t| t.subject_id == subject_id)?;
        Some(self.tickets.remove(index))
    }

    /// Remaining tickets for a subject.
    pub fn remaining_for(&self, subject_id: &str) -> usize {
        self.tickets
            .iter()
            .filter(|t| t.subject_id == subject_id)
            .count()
    }

    /// Number of tickets left.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Whether the pool is exhausted.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}
