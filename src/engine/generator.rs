//! Whole-institution timetable generation.
//!
//! Runs the single-class allocator for every class against one shared
//! teacher-busy map, so a teacher's commitment in one class is visible
//! when placing any other, and invokes swap repair when direct placement
//! fails. Produces the slot-mutation batch for the caller to persist
//! atomically plus a conflict report for everything left unresolved.
//!
//! Classes are processed in ascending id order and the pool order is
//! pinned, so a run is a pure function of the snapshot.

use std::collections::HashMap;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::models::{Class, Day, Institution, TimeOfDay};
use crate::validation::{validate_class, validate_institution, ValidationError};

use super::{
    resolve_by_swap, AvailabilityIndex, BlockedCandidate, ClassAllocator, Occupant,
    PlacementAttempt, TeacherBusyMap, WorkingAssignments,
};

/// One slot assignment to persist: `slot_id` gets `subject_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotMutation {
    pub class_id: String,
    pub slot_id: String,
    pub subject_id: String,
}

/// A slot the engine could not fill, with the reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conflict {
    pub class_id: String,
    pub day: Day,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub reason: String,
}

/// Result of a generation run.
///
/// `mutations` is the diff against the snapshot (placements plus any
/// swap moves) and is meant to be applied as one atomic batch. A run on
/// an already-full grid yields zero mutations and zero conflicts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Slot assignments to persist.
    pub mutations: Vec<SlotMutation>,
    /// Number of slots newly filled by the allocator.
    pub placed: usize,
    /// Slots left unresolved, with reasons.
    pub conflicts: Vec<Conflict>,
    /// Newly filled slots per class.
    pub placed_by_class: HashMap<String, usize>,
}

impl GenerationReport {
    /// Whether every open slot was resolved.
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Number of unresolved slots.
    pub fn conflict_count(&self) -> usize {
        self.conflicts.len()
    }

    /// Mutations touching one class.
    pub fn mutations_for_class(&self, class_id: &str) -> Vec<&SlotMutation> {
        self.mutations
            .iter()
            .filter(|m| m.class_id == class_id)
            .collect()
    }
}

/// The timetable generator.
///
/// Stateless between runs; every run builds its busy map, availability
/// index, and demand pools fresh from the snapshot. See the crate-level
/// concurrency contract for the single-run-per-institution requirement.
///
/// # Example
///
/// ```
/// use timetable_engine::engine::TimetableGenerator;
/// use timetable_engine::models::{
///     Class, Day, Institution, Slot, SubjectRequirement, Teacher, TimeOfDay,
/// };
///
/// let institution = Institution::new()
///     .with_class(
///         Class::new("jss1a")
///             .with_slot(Slot::lesson(
///                 "s1",
///                 Day::Monday,
///                 TimeOfDay::new(8, 0),
///                 TimeOfDay::new(9, 0),
///             ))
///             .with_requirement(SubjectRequirement::new("MATH", 1).with_teacher("T1")),
///     )
///     .with_teacher(Teacher::new("T1"));
///
/// let report = TimetableGenerator::new().generate(&institution).unwrap();
/// assert_eq!(report.placed, 1);
/// assert!(report.is_clean());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableGenerator;

impl TimetableGenerator {
    /// Creates a generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates for every class in the institution, with swap repair.
    ///
    /// Refuses to run (no partial effects) if the snapshot fails
    /// validation.
    pub fn generate(
        &self,
        institution: &Institution,
    ) -> Result<GenerationReport, Vec<ValidationError>> {
        validate_institution(institution)?;

        info!(
            "generating timetable: {} classes, {} teachers, {} lesson slots",
            institution.classes.len(),
            institution.teachers.len(),
            institution.lesson_slot_count()
        );

        let availability = AvailabilityIndex::build(&institution.teachers);
        let mut assignments = WorkingAssignments::from_institution(institution);
        let mut busy = seed_busy_map(institution, &availability, &assignments);

        let mut classes: Vec<&Class> = institution.classes.iter().collect();
        classes.sort_by(|a, b| a.id.cmp(&b.id));

        let mut report = GenerationReport::default();
        for class in classes {
            self.run_class(
                institution,
                class,
                &availability,
                &mut busy,
                &mut assignments,
                &mut report,
                true,
            );
        }

        report.mutations = diff_mutations(institution, &assignments);
        info!(
            "generation finished: {} placed, {} mutations, {} conflicts",
            report.placed,
            report.mutations.len(),
            report.conflicts.len()
        );
        Ok(report)
    }

    /// Generates for one class against the institution-wide busy map.
    ///
    /// Commitments of every other class are visible but never rearranged:
    /// the single-class run does not attempt swap repair.
    pub fn generate_class(
        &self,
        institution: &Institution,
        class_id: &str,
    ) -> Result<GenerationReport, Vec<ValidationError>> {
        validate_class(institution, class_id)?;
        // validate_class guarantees presence
        let Some(class) = institution.class(class_id) else {
            return Ok(GenerationReport::default());
        };

        debug!("generating timetable for single class {class_id}");

        let availability = AvailabilityIndex::build(&institution.teachers);
        let mut assignments = WorkingAssignments::from_institution(institution);
        let mut busy = seed_busy_map(institution, &availability, &assignments);

        let mut report = GenerationReport::default();
        self.run_class(
            institution,
            class,
            &availability,
            &mut busy,
            &mut assignments,
            &mut report,
            false,
        );

        report.mutations = diff_mutations(institution, &assignments);
        Ok(report)
    }

    #[allow(clippy::too_many_arguments)]
    fn run_class(
        &self,
        institution: &Institution,
        class: &Class,
        availability: &AvailabilityIndex,
        busy: &mut TeacherBusyMap,
        assignments: &mut WorkingAssignments,
        report: &mut GenerationReport,
        with_swaps: bool,
    ) {
        let mut allocator = ClassAllocator::new(class, assignments);
        let open = allocator.open_slots(assignments);
        debug!(
            "class {}: {} open slots, {} pool tickets",
            class.id,
            open.len(),
            allocator.pool().len()
        );

        for slot in open {
            let attempt = allocator.try_place(slot, busy, availability, assignments);
            match attempt {
                PlacementAttempt::Placed(_) => {
                    report.placed += 1;
                    *report.placed_by_class.entry(class.id.clone()).or_insert(0) += 1;
                }
                PlacementAttempt::PoolExhausted => {
                    report.conflicts.push(Conflict {
                        class_id: class.id.clone(),
                        day: slot.day,
                        start: slot.start,
                        end: slot.end,
                        reason: "demand pool exhausted: no subject periods remain to place"
                            .to_string(),
                    });
                }
                PlacementAttempt::Blocked(candidates) => {
                    let mut repaired = false;
                    if with_swaps {
                        let freed = resolve_by_swap(
                            institution,
                            slot.day,
                            slot.start,
                            allocator.pool(),
                            busy,
                            availability,
                            assignments,
                        );
                        if let Some(index) = freed {
                            allocator.place_ticket(index, slot, busy, assignments);
                            // The swap may have moved this class's own
                            // placements across days
                            allocator.resync_spread(assignments);
                            repaired = true;
                        }
                    }

                    if repaired {
                        report.placed += 1;
                        *report.placed_by_class.entry(class.id.clone()).or_insert(0) += 1;
                    } else {
                        report.conflicts.push(Conflict {
                            class_id: class.id.clone(),
                            day: slot.day,
                            start: slot.start,
                            end: slot.end,
                            reason: blocked_reason(&candidates),
                        });
                    }
                }
            }
        }
    }
}

/// Pre-seeds the busy map from availability windows and existing
/// placements.
///
/// Off-duty entries are written first at every distinct lesson time in
/// the institution; existing placements overwrite them where a manual
/// violation exists, so the map reflects actual occupancy. The
/// availability index stays authoritative for off-duty checks either way.
fn seed_busy_map(
    institution: &Institution,
    availability: &AvailabilityIndex,
    assignments: &WorkingAssignments,
) -> TeacherBusyMap {
    let mut busy = TeacherBusyMap::new();

    for (day, start) in institution.distinct_lesson_times() {
        for teacher in &institution.teachers {
            if availability.is_blocked(&teacher.id, day, start) {
                busy.occupy(day, start, &teacher.id, Occupant::OffDuty);
            }
        }
    }

    for class in &institution.classes {
        for slot in class.lesson_slots() {
            let Some(subject_id) = assignments.subject_of(&slot.id) else {
                continue;
            };
            // Drift: a placed subject without a teacher seeds nothing
            let Some(teacher_id) = class.teacher_for_subject(subject_id) else {
                continue;
            };
            busy.occupy(
                slot.day,
                slot.start,
                teacher_id,
                Occupant::Class(class.id.clone()),
            );
        }
    }

    busy
}

/// Collects the overlay-vs-snapshot diff as the mutation batch.
fn diff_mutations(institution: &Institution, assignments: &WorkingAssignments) -> Vec<SlotMutation> {
    let mut mutations = Vec::new();
    for class in &institution.classes {
        for slot in class.lesson_slots() {
            let current = assignments.subject_of(&slot.id);
            if current.is_some() && current != slot.subject_id.as_deref() {
                mutations.push(SlotMutation {
                    class_id: class.id.clone(),
                    slot_id: slot.id.clone(),
                    subject_id: current.unwrap_or_default().to_string(),
                });
            }
        }
    }
    mutations
}

/// Formats the conflict reason naming every blocked candidate.
fn blocked_reason(candidates: &[BlockedCandidate]) -> String {
    let parts: Vec<String> = candidates
        .iter()
        .map(|c| match (&c.teacher_id, &c.occupying_class, c.off_duty) {
            (None, _, _) => format!("'{}' has no teacher assigned", c.subject_id),
            (Some(teacher), Some(class_id), false) => format!(
                "{} ('{}') is busy with class '{}'",
                teacher, c.subject_id, class_id
            ),
            // A candidate with a teacher and no booking can only be
            // blocked by an availability window
            (Some(teacher), _, _) => {
                format!("{} ('{}') is off duty", teacher, c.subject_id)
            }
        })
        .collect();
    format!("all candidates blocked: {}", parts.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Slot, SubjectRequirement, Teacher};
    use std::collections::HashSet;

    fn slot(id: &str, day: Day, hour: u16) -> Slot {
        Slot::lesson(id, day, TimeOfDay::new(hour, 0), TimeOfDay::new(hour + 1, 0))
    }

    fn init_test_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Scenario A: one requirement, two Monday slots. One placement, one
    /// pool-exhausted conflict.
    #[test]
    fn test_scenario_a_pool_exhaustion() {
        init_test_logging();
        let institution = Institution::new()
            .with_class(
                Class::new("jss1a")
                    .with_slot(slot("mon8", Day::Monday, 8))
                    .with_slot(slot("mon9", Day::Monday, 9))
                    .with_requirement(SubjectRequirement::new("MATH", 1).with_teacher("TX")),
            )
            .with_teacher(Teacher::new("TX"));

        let report = TimetableGenerator::new().generate(&institution).unwrap();

        assert_eq!(report.placed, 1);
        assert_eq!(report.conflicts.len(), 1);
        assert!(report.conflicts[0].reason.contains("pool exhausted"));
        assert!(!report.conflicts[0].reason.contains("TX"));
        assert_eq!(report.mutations.len(), 1);
        assert_eq!(report.mutations[0].subject_id, "MATH");
    }

    /// Scenario B: two classes want the same teacher at the same time and
    /// no swap target exists. One wins, the other reports the blocker.
    #[test]
    fn test_scenario_b_shared_teacher_conflict() {
        init_test_logging();
        let institution = Institution::new()
            .with_class(
                Class::new("a")
                    .with_slot(slot("a_mon8", Day::Monday, 8))
                    .with_requirement(SubjectRequirement::new("ENG", 1).with_teacher("TY")),
            )
            .with_class(
                Class::new("b")
                    .with_slot(slot("b_mon8", Day::Monday, 8))
                    .with_requirement(SubjectRequirement::new("ENG", 1).with_teacher("TY")),
            )
            .with_teacher(Teacher::new("TY"));

        let report = TimetableGenerator::new().generate(&institution).unwrap();

        assert_eq!(report.placed, 1);
        assert_eq!(report.conflicts.len(), 1);
        // Class "a" is processed first and wins the slot
        assert_eq!(report.mutations_for_class("a").len(), 1);
        let conflict = &report.conflicts[0];
        assert_eq!(conflict.class_id, "b");
        assert!(conflict.reason.contains("TY"));
        assert!(conflict.reason.contains("'a'"));
    }

    /// Scenario C: a teacher off all day Tuesday is never placed on
    /// Tuesday regardless of pool pressure.
    #[test]
    fn test_scenario_c_off_duty_never_placed() {
        init_test_logging();
        let institution = Institution::new()
            .with_class(
                Class::new("c1")
                    .with_slot(slot("tue8", Day::Tuesday, 8))
                    .with_slot(slot("wed8", Day::Wednesday, 8))
                    .with_requirement(SubjectRequirement::new("SCI", 2).with_teacher("TZ")),
            )
            .with_teacher(Teacher::new("TZ").off_all_day(Day::Tuesday));

        let report = TimetableGenerator::new().generate(&institution).unwrap();

        assert_eq!(report.placed, 1);
        let tuesday_mutation = report
            .mutations
            .iter()
            .find(|m| m.slot_id == "tue8");
        assert!(tuesday_mutation.is_none());
        assert_eq!(report.conflicts.len(), 1);
        assert_eq!(report.conflicts[0].day, Day::Tuesday);
        assert!(report.conflicts[0].reason.contains("off duty"));
    }

    /// Scenario B with a swap escape: the blocking class can move its
    /// commitment, so both classes end up fully placed.
    #[test]
    fn test_swap_repair_resolves_cross_class_conflict() {
        init_test_logging();
        // Class a (processed first) books TY at Mon 08:00 and TB at
        // Mon 09:00. Class b needs TY at Mon 08:00 for its only slot.
        let institution = Institution::new()
            .with_class(
                Class::new("a")
                    .with_slot(slot("a_mon8", Day::Monday, 8))
                    .with_slot(slot("a_mon9", Day::Monday, 9))
                    .with_requirement(SubjectRequirement::new("ENG", 1).with_teacher("TY"))
                    .with_requirement(SubjectRequirement::new("BIO", 1).with_teacher("TB")),
            )
            .with_class(
                Class::new("b")
                    .with_slot(slot("b_mon8", Day::Monday, 8))
                    .with_requirement(SubjectRequirement::new("ENG2", 1).with_teacher("TY")),
            )
            .with_teacher(Teacher::new("TY"))
            .with_teacher(Teacher::new("TB"));

        let report = TimetableGenerator::new().generate(&institution).unwrap();

        assert!(report.is_clean(), "conflicts: {:?}", report.conflicts);
        assert_eq!(report.placed, 3);

        // Class a ends with BIO at 08:00 and ENG at 09:00 after the swap
        let a_mutations: HashMap<&str, &str> = report
            .mutations_for_class("a")
            .into_iter()
            .map(|m| (m.slot_id.as_str(), m.subject_id.as_str()))
            .collect();
        assert_eq!(a_mutations["a_mon8"], "BIO");
        assert_eq!(a_mutations["a_mon9"], "ENG");
        assert_eq!(report.mutations_for_class("b").len(), 1);
    }

    /// A swap that rearranges the class currently being allocated moves a
    /// placement across days; the spread preference must see the moved
    /// placement when filling the remaining slots.
    #[test]
    fn test_day_spread_holds_after_swap_in_own_class() {
        init_test_logging();
        // Two parallel Monday slots force the class to block itself: MATH
        // lands in mon8a, then mon8b finds T1 busy with its own class. The
        // swap trades MATH with the pre-placed Tuesday BIO, so Tuesday
        // already carries MATH when tue9 is filled.
        let institution = Institution::new()
            .with_class(
                Class::new("a")
                    .with_slot(slot("mon8a", Day::Monday, 8))
                    .with_slot(Slot::lesson(
                        "mon8b",
                        Day::Monday,
                        TimeOfDay::new(8, 0),
                        TimeOfDay::new(9, 0),
                    ))
                    .with_slot(slot("tue8", Day::Tuesday, 8).with_subject("BIO"))
                    .with_slot(slot("tue9", Day::Tuesday, 9))
                    .with_slot(slot("wed8", Day::Wednesday, 8))
                    .with_requirement(SubjectRequirement::new("MATH", 3).with_teacher("T1"))
                    .with_requirement(SubjectRequirement::new("ENG", 1).with_teacher("T1"))
                    .with_requirement(SubjectRequirement::new("BIO", 1).with_teacher("TB")),
            )
            .with_teacher(Teacher::new("T1"))
            .with_teacher(Teacher::new("TB"));

        let report = TimetableGenerator::new().generate(&institution).unwrap();

        assert!(report.is_clean(), "conflicts: {:?}", report.conflicts);
        assert_eq!(report.placed, 4);

        let mutations: HashMap<&str, &str> = report
            .mutations
            .iter()
            .map(|m| (m.slot_id.as_str(), m.subject_id.as_str()))
            .collect();
        assert_eq!(mutations["mon8a"], "BIO");
        assert_eq!(mutations["mon8b"], "MATH");
        assert_eq!(mutations["tue8"], "MATH");
        // With MATH already on Tuesday after the swap, tue9 takes ENG and
        // the last MATH ticket goes to Wednesday
        assert_eq!(mutations["tue9"], "ENG");
        assert_eq!(mutations["wed8"], "MATH");
    }

    #[test]
    fn test_blocked_reason_names_each_kind() {
        let candidates = vec![
            BlockedCandidate {
                subject_id: "ART".into(),
                teacher_id: None,
                occupying_class: None,
                off_duty: false,
            },
            BlockedCandidate {
                subject_id: "SCI".into(),
                teacher_id: Some("TZ".into()),
                occupying_class: None,
                off_duty: true,
            },
            BlockedCandidate {
                subject_id: "ENG".into(),
                teacher_id: Some("TY".into()),
                occupying_class: Some("a".into()),
                off_duty: false,
            },
        ];
        let reason = blocked_reason(&candidates);
        assert!(reason.starts_with("all candidates blocked: "));
        assert!(reason.contains("'ART' has no teacher assigned"));
        assert!(reason.contains("TZ ('SCI') is off duty"));
        assert!(reason.contains("TY ('ENG') is busy with class 'a'"));
    }

    /// Property: no (day, start, teacher) triple is used twice across the
    /// institution's final state.
    #[test]
    fn test_no_double_booking() {
        let mut institution = Institution::new()
            .with_teacher(Teacher::new("T1"))
            .with_teacher(Teacher::new("T2"))
            .with_teacher(Teacher::new("T3"));
        for class_id in ["a", "b", "c"] {
            let mut class = Class::new(class_id)
                .with_requirement(SubjectRequirement::new("MATH", 2).with_teacher("T1"))
                .with_requirement(SubjectRequirement::new("ENG", 2).with_teacher("T2"))
                .with_requirement(SubjectRequirement::new("SCI", 1).with_teacher("T3"));
            for (i, day) in [Day::Monday, Day::Tuesday, Day::Wednesday].iter().enumerate() {
                class = class
                    .with_slot(slot(&format!("{class_id}_{i}_8"), *day, 8))
                    .with_slot(slot(&format!("{class_id}_{i}_9"), *day, 9));
            }
            institution = institution.with_class(class);
        }

        let report = TimetableGenerator::new().generate(&institution).unwrap();

        // Rebuild final state and check the invariant
        let mut seen: HashSet<(Day, TimeOfDay, String)> = HashSet::new();
        for class in &institution.classes {
            for s in class.lesson_slots() {
                let subject = report
                    .mutations
                    .iter()
                    .find(|m| m.slot_id == s.id)
                    .map(|m| m.subject_id.clone())
                    .or_else(|| s.subject_id.clone());
                if let Some(subject) = subject {
                    if let Some(teacher) = class.teacher_for_subject(&subject) {
                        assert!(
                            seen.insert((s.day, s.start, teacher.to_string())),
                            "teacher {teacher} double-booked at {} {}",
                            s.day,
                            s.start
                        );
                    }
                }
            }
        }
    }

    /// Property: a full grid produces zero mutations and zero conflicts.
    #[test]
    fn test_idempotent_on_full_grid() {
        let institution = Institution::new()
            .with_class(
                Class::new("c1")
                    .with_slot(slot("mon8", Day::Monday, 8).with_subject("MATH"))
                    .with_slot(slot("mon9", Day::Monday, 9).with_subject("ENG"))
                    .with_requirement(SubjectRequirement::new("MATH", 1).with_teacher("T1"))
                    .with_requirement(SubjectRequirement::new("ENG", 1).with_teacher("T2")),
            )
            .with_teacher(Teacher::new("T1"))
            .with_teacher(Teacher::new("T2"));

        let report = TimetableGenerator::new().generate(&institution).unwrap();
        assert!(report.mutations.is_empty());
        assert!(report.conflicts.is_empty());
        assert_eq!(report.placed, 0);
    }

    /// Property: placements never exceed the class's total weekly demand.
    #[test]
    fn test_pool_conservation() {
        let institution = Institution::new()
            .with_class(
                Class::new("c1")
                    .with_slot(slot("mon8", Day::Monday, 8))
                    .with_slot(slot("mon9", Day::Monday, 9))
                    .with_slot(slot("tue8", Day::Tuesday, 8))
                    .with_slot(slot("tue9", Day::Tuesday, 9))
                    .with_requirement(SubjectRequirement::new("MATH", 2).with_teacher("T1")),
            )
            .with_teacher(Teacher::new("T1"));

        let report = TimetableGenerator::new().generate(&institution).unwrap();
        assert_eq!(report.placed, 2); // never more than total demand
        assert_eq!(report.conflicts.len(), 2); // remaining slots exhausted
    }

    #[test]
    fn test_validation_refuses_broken_snapshot() {
        let institution = Institution::new().with_class(Class::new("empty"));
        let errors = TimetableGenerator::new().generate(&institution).unwrap_err();
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_generate_class_sees_other_classes() {
        // Class b's slot is already taken by T1 through class a's
        // pre-existing placement; single-class run for b must conflict
        let institution = Institution::new()
            .with_class(
                Class::new("a")
                    .with_slot(slot("a_mon8", Day::Monday, 8).with_subject("MATH"))
                    .with_requirement(SubjectRequirement::new("MATH", 1).with_teacher("T1")),
            )
            .with_class(
                Class::new("b")
                    .with_slot(slot("b_mon8", Day::Monday, 8))
                    .with_requirement(SubjectRequirement::new("PHY", 1).with_teacher("T1")),
            )
            .with_teacher(Teacher::new("T1"));

        let report = TimetableGenerator::new()
            .generate_class(&institution, "b")
            .unwrap();

        assert_eq!(report.placed, 0);
        assert_eq!(report.conflicts.len(), 1);
        assert!(report.conflicts[0].reason.contains("T1"));
        // Single-class runs never rearrange other classes
        assert!(report.mutations.is_empty());
    }

    #[test]
    fn test_generate_class_unknown_id() {
        let institution = Institution::new().with_class(
            Class::new("a")
                .with_slot(slot("s1", Day::Monday, 8))
                .with_requirement(SubjectRequirement::new("MATH", 1).with_teacher("T1")),
        );
        assert!(TimetableGenerator::new()
            .generate_class(&institution, "nope")
            .is_err());
    }

    #[test]
    fn test_drifted_assignment_left_untouched() {
        // "GHOST" has no requirement: not un-assigned, not re-counted
        let institution = Institution::new()
            .with_class(
                Class::new("c1")
                    .with_slot(slot("mon8", Day::Monday, 8).with_subject("GHOST"))
                    .with_slot(slot("mon9", Day::Monday, 9))
                    .with_requirement(SubjectRequirement::new("MATH", 1).with_teacher("T1")),
            )
            .with_teacher(Teacher::new("T1"));

        let report = TimetableGenerator::new().generate(&institution).unwrap();

        assert_eq!(report.placed, 1);
        assert!(report.mutations.iter().all(|m| m.slot_id != "mon8"));
        assert!(report.is_clean());
    }

    #[test]
    fn test_determinism() {
        let institution = Institution::new()
            .with_class(
                Class::new("c1")
                    .with_slot(slot("mon8", Day::Monday, 8))
                    .with_slot(slot("mon9", Day::Monday, 9))
                    .with_slot(slot("tue8", Day::Tuesday, 8))
                    .with_requirement(SubjectRequirement::new("MATH", 2).with_teacher("T1"))
                    .with_requirement(SubjectRequirement::new("ENG", 1).with_teacher("T2")),
            )
            .with_teacher(Teacher::new("T1"))
            .with_teacher(Teacher::new("T2"));

        let generator = TimetableGenerator::new();
        let first = generator.generate(&institution).unwrap();
        let second = generator.generate(&institution).unwrap();
        assert_eq!(first.mutations, second.mutations);
        assert_eq!(first.placed, second.placed);
    }

    #[test]
    fn test_report_serde_round_trip() {
        let institution = Institution::new()
            .with_class(
                Class::new("c1")
                    .with_slot(slot("mon8", Day::Monday, 8))
                    .with_requirement(SubjectRequirement::new("MATH", 1).with_teacher("T1")),
            )
            .with_teacher(Teacher::new("T1"));

        let report = TimetableGenerator::new().generate(&institution).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let back: GenerationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.mutations, report.mutations);
        assert_eq!(back.placed, report.placed);
    }
}
