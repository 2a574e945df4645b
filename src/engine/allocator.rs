//! Single-class slot allocation.
//!
//! Fills the empty lesson slots of one class from its demand pool
//! against a caller-supplied teacher-busy map, so the caller can share
//! one map across classes and make cross-class conflicts visible.
//!
//! # Algorithm
//!
//! Per empty slot, in (day, start) ascending order:
//! 1. **Priority 1**: first pool ticket whose teacher is free at the
//!    slot's time *and* whose subject is not yet on this class's grid
//!    that day (day-spread preference). Ties break by pool insertion
//!    order.
//! 2. **Priority 2**: drop the spread preference; any ticket with a free
//!    teacher qualifies.
//! 3. Neither: the slot is handed back unresolved. Swap repair is the
//!    caller's concern, not this component's.
//!
//! Deterministic for a fixed snapshot: slot order and pool order are
//! both pinned.

use std::collections::HashMap;

use log::trace;

use crate::models::{Class, Day, Institution, Slot, TimeOfDay};

use super::{AvailabilityIndex, DemandPool, Occupant, TeacherBusyMap};

/// In-memory overlay of slot assignments for the current run.
///
/// Starts as a copy of the snapshot's assignments and absorbs every
/// placement and swap; the final diff against the snapshot is the
/// mutation batch the caller persists.
#[derive(Debug, Clone, Default)]
pub struct WorkingAssignments {
    map: HashMap<String, String>,
}

impl WorkingAssignments {
    /// Copies all existing lesson-slot assignments out of the snapshot.
    pub fn from_institution(institution: &Institution) -> Self {
        let mut map = HashMap::new();
        for class in &institution.classes {
            for slot in class.lesson_slots() {
                if let Some(subject_id) = &slot.subject_id {
                    map.insert(slot.id.clone(), subject_id.clone());
                }
            }
        }
        Self { map }
    }

    /// The subject currently assigned to a slot, if any.
    pub fn subject_of(&self, slot_id: &str) -> Option<&str> {
        self.map.get(slot_id).map(String::as_str)
    }

    /// Assigns (or reassigns) a subject to a slot.
    pub fn assign(&mut self, slot_id: impl Into<String>, subject_id: impl Into<String>) {
        self.map.insert(slot_id.into(), subject_id.into());
    }
}

/// A placement made by the allocator.
#[derive(Debug, Clone)]
pub struct Placement {
    pub slot_id: String,
    pub day: Day,
    pub start: TimeOfDay,
    pub subject_id: String,
    pub teacher_id: String,
}

/// A pool candidate that could not take a slot, and why.
#[derive(Debug, Clone)]
pub struct BlockedCandidate {
    pub subject_id: String,
    /// `None` when the requirement has no teacher (data drift).
    pub teacher_id: Option<String>,
    /// The class holding the teacher, when blocked by occupancy.
    pub occupying_class: Option<String>,
    /// Blocked by an availability window rather than a booking.
    pub off_duty: bool,
}

/// Outcome of one placement attempt.
#[derive(Debug, Clone)]
pub enum PlacementAttempt {
    /// A ticket was placed; pool, busy map, and overlay are updated.
    Placed(Placement),
    /// Tickets remain but every one is blocked at this slot.
    Blocked(Vec<BlockedCandidate>),
    /// The pool has no tickets left for this class.
    PoolExhausted,
}

/// Allocator state for one class within a run.
pub struct ClassAllocator<'a> {
    class: &'a Class,
    pool: DemandPool,
    /// Per-(day, subject) placement counts backing the spread preference.
    spread: HashMap<(Day, String), u32>,
}

impl<'a> ClassAllocator<'a> {
    /// Builds pool and spread counters from the working overlay.
    ///
    /// The overlay, not the raw snapshot, is authoritative: earlier swap
    /// repairs in the same run may have moved this class's placements.
    pub fn new(class: &'a Class, assignments: &WorkingAssignments) -> Self {
        let mut pool = DemandPool::from_requirements(&class.requirements);
        let mut spread: HashMap<(Day, String), u32> = HashMap::new();

        for slot in class.lesson_slots() {
            if let Some(subject_id) = assignments.subject_of(&slot.id) {
                pool.remove_first_for(subject_id);
                *spread.entry((slot.day, subject_id.to_string())).or_insert(0) += 1;
            }
        }

        Self {
            class,
            pool,
            spread,
        }
    }

    /// Remaining demand pool.
    pub fn pool(&self) -> &DemandPool {
        &self.pool
    }

    /// Recomputes the spread counters from the overlay.
    ///
    /// A swap repair may rearrange this class's own placements across
    /// days, which the incremental counters cannot see. The pool needs no
    /// resync: a two-way swap preserves which subjects are placed.
    pub fn resync_spread(&mut self, assignments: &WorkingAssignments) {
        self.spread.clear();
        for slot in self.class.lesson_slots() {
            if let Some(subject_id) = assignments.subject_of(&slot.id) {
                *self
                    .spread
                    .entry((slot.day, subject_id.to_string()))
                    .or_insert(0) += 1;
            }
        }
    }

    /// The class's empty lesson slots in (day, start) order.
    pub fn open_slots(&self, assignments: &WorkingAssignments) -> Vec<&'a Slot> {
        let mut open: Vec<&Slot> = self
            .class
            .lesson_slots()
            .filter(|s| assignments.subject_of(&s.id).is_none())
            .collect();
        open.sort_by_key(|s| (s.day, s.start));
        open
    }

    /// Attempts to fill one slot from the pool.
    pub fn try_place(
        &mut self,
        slot: &Slot,
        busy: &mut TeacherBusyMap,
        availability: &AvailabilityIndex,
        assignments: &mut WorkingAssignments,
    ) -> PlacementAttempt {
        if self.pool.is_empty() {
            return PlacementAttempt::PoolExhausted;
        }

        // Priority 1: free teacher, subject not yet on this day
        let pick = self.find_candidate(slot, busy, availability, true);
        // Priority 2: free teacher, spread preference relaxed
        let pick = pick.or_else(|| self.find_candidate(slot, busy, availability, false));

        match pick {
            Some(index) => PlacementAttempt::Placed(self.place_ticket(index, slot, busy, assignments)),
            None => PlacementAttempt::Blocked(self.blocked_candidates(slot, busy, availability)),
        }
    }

    /// Consumes ticket `index` into `slot`, updating all shared state.
    ///
    /// Also used by the caller after a swap repair frees the teacher.
    pub fn place_ticket(
        &mut self,
        index: usize,
        slot: &Slot,
        busy: &mut TeacherBusyMap,
        assignments: &mut WorkingAssignments,
    ) -> Placement {
        let ticket = self.pool.take(index);
        // Candidate selection guarantees a teacher is present
        let teacher_id = ticket.teacher_id.unwrap_or_default();

        busy.occupy(
            slot.day,
            slot.start,
            &teacher_id,
            Occupant::Class(self.class.id.clone()),
        );
        assignments.assign(&slot.id, &ticket.subject_id);
        *self
            .spread
            .entry((slot.day, ticket.subject_id.clone()))
            .or_insert(0) += 1;

        trace!(
            "placed {} ({}) into {} for class {} at {} {}",
            ticket.subject_id,
            teacher_id,
            slot.id,
            self.class.id,
            slot.day,
            slot.start
        );

        Placement {
            slot_id: slot.id.clone(),
            day: slot.day,
            start: slot.start,
            subject_id: ticket.subject_id,
            teacher_id,
        }
    }

    fn find_candidate(
        &self,
        slot: &Slot,
        busy: &TeacherBusyMap,
        availability: &AvailabilityIndex,
        spread_check: bool,
    ) -> Option<usize> {
        self.pool
            .iter()
            .find(|(_, ticket)| {
                let Some(teacher_id) = &ticket.teacher_id else {
                    return false;
                };
                if !busy.is_free(slot.day, slot.start, teacher_id)
                    || availability.is_blocked(teacher_id, slot.day, slot.start)
                {
                    return false;
                }
                !spread_check || self.spread_count(slot.day, &ticket.subject_id) == 0
            })
            .map(|(index, _)| index)
    }

    fn spread_count(&self, day: Day, subject_id: &str) -> u32 {
        self.spread
            .get(&(day, subject_id.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Describes why every remaining ticket is unusable for `slot`.
    ///
    /// Deduplicated by (subject, teacher) so surplus tickets of one
    /// requirement report once.
    fn blocked_candidates(
        &self,
        slot: &Slot,
        busy: &TeacherBusyMap,
        availability: &AvailabilityIndex,
    ) -> Vec<BlockedCandidate> {
        let mut seen: Vec<(String, Option<String>)> = Vec::new();
        let mut blocked = Vec::new();

        for (_, ticket) in self.pool.iter() {
            let key = (ticket.subject_id.clone(), ticket.teacher_id.clone());
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);

            match &ticket.teacher_id {
                None => blocked.push(BlockedCandidate {
                    subject_id: ticket.subject_id.clone(),
                    teacher_id: None,
                    occupying_class: None,
                    off_duty: false,
                }),
                Some(teacher_id) => {
                    let off_duty = availability.is_blocked(teacher_id, slot.day, slot.start)
                        || matches!(
                            busy.occupant(slot.day, slot.start, teacher_id),
                            Some(Occupant::OffDuty)
                        );
                    let occupying_class = match busy.occupant(slot.day, slot.start, teacher_id) {
                        Some(Occupant::Class(class_id)) => Some(class_id.clone()),
                        _ => None,
                    };
                    blocked.push(BlockedCandidate {
                        subject_id: ticket.subject_id.clone(),
                        teacher_id: Some(teacher_id.clone()),
                        occupying_class,
                        off_duty,
                    });
                }
            }
        }

        blocked
    }
}
