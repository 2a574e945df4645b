//! Swap resolver.
//!
//! When neither placement priority can fill a contested slot, this pass
//! tries to free one of the blocking teachers by relocating their
//! existing commitment inside the class that holds it. The swap is
//! single-hop and two-way: the blocking subject moves to another slot of
//! the same class, that slot's subject moves back, and both moves must be
//! conflict-free in the current busy map. Chained multi-swap search is
//! out of contract.

use log::trace;

use crate::models::{Day, Institution, TimeOfDay};

use super::{AvailabilityIndex, DemandPool, Occupant, TeacherBusyMap, WorkingAssignments};

/// Attempts to free the contested `(day, start)` for one of the pool's
/// candidates by a single two-way swap in the blocking class.
///
/// On success the busy map and overlay reflect the swap and the returned
/// index names the pool ticket whose teacher is now free at the contested
/// time; the caller places that ticket. On failure nothing is mutated.
pub fn resolve_by_swap(
    institution: &Institution,
    day: Day,
    start: TimeOfDay,
    pool: &DemandPool,
    busy: &mut TeacherBusyMap,
    availability: &AvailabilityIndex,
    assignments: &mut WorkingAssignments,
) -> Option<usize> {
    for (index, ticket) in pool.iter() {
        let Some(teacher_id) = &ticket.teacher_id else {
            continue;
        };
        // An off-duty teacher cannot be freed by rearranging bookings
        if availability.is_blocked(teacher_id, day, start) {
            continue;
        }
        let blocking_class = match busy.occupant(day, start, teacher_id) {
            Some(Occupant::Class(class_id)) => class_id.clone(),
            _ => continue,
        };

        if try_relocate(
            institution,
            &blocking_class,
            teacher_id,
            day,
            start,
            busy,
            availability,
            assignments,
        ) {
            trace!(
                "swap freed {} at {} {} by rearranging class {}",
                teacher_id,
                day,
                start,
                blocking_class
            );
            return Some(index);
        }
    }

    None
}

/// Moves `teacher_id`'s commitment in `class_id` away from `(day, start)`
/// by swapping it with another assigned slot of the same class.
#[allow(clippy::too_many_arguments)]
fn try_relocate(
    institution: &Institution,
    class_id: &str,
    teacher_id: &str,
    day: Day,
    start: TimeOfDay,
    busy: &mut TeacherBusyMap,
    availability: &AvailabilityIndex,
    assignments: &mut WorkingAssignments,
) -> bool {
    let Some(class) = institution.class(class_id) else {
        return false;
    };

    // The slot S the blocking teacher currently holds at the contested time
    let held = class.lesson_slots().find(|s| {
        s.day == day
            && s.start == start
            && assignments
                .subject_of(&s.id)
                .and_then(|subject| class.teacher_for_subject(subject))
                == Some(teacher_id)
    });
    let Some(held) = held else {
        return false;
    };
    let Some(held_subject) = assignments.subject_of(&held.id).map(str::to_string) else {
        return false;
    };

    for alternate in class.lesson_slots() {
        if alternate.id == held.id {
            continue;
        }
        // Two-way swap needs an occupied counterpart with a known teacher
        let Some(alt_subject) = assignments.subject_of(&alternate.id).map(str::to_string) else {
            continue;
        };
        let Some(alt_teacher) = class.teacher_for_subject(&alt_subject).map(str::to_string) else {
            continue;
        };
        if alt_teacher == teacher_id {
            continue;
        }

        // Blocking teacher must be free at the alternate time
        if !busy.is_free(alternate.day, alternate.start, teacher_id)
            || availability.is_blocked(teacher_id, alternate.day, alternate.start)
        {
            continue;
        }
        // And the displaced teacher must, symmetrically, be free at the
        // contested time
        if !busy.is_free(day, start, &alt_teacher)
            || availability.is_blocked(&alt_teacher, day, start)
        {
            continue;
        }

        // Exchange the two assignments and all four busy entries
        assignments.assign(&held.id, &alt_subject);
        assignments.assign(&alternate.id, &held_subject);
        busy.release(day, start, teacher_id);
        busy.release(alternate.day, alternate.start, &alt_teacher);
        busy.occupy(day, start, &alt_teacher, Occupant::Class(class_id.to_string()));
        busy.occupy(
            alternate.day,
            alternate.start,
            teacher_id,
            Occupant::Class(class_id.to_string()),
        );

        trace!(
            "swapped {} and {} within class {} ({} {} <-> {} {})",
            held_subject,
            alt_subject,
            class_id,
            day,
            start,
            alternate.day,
            alternate.start
        );
        return true;
    }

    false
}
