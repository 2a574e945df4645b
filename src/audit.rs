//! Timetable health auditor.
//!
//! Read-only diagnostics over the current persisted state, independent of
//! any generation run. Two checks:
//!
//! - **Overload**: a teacher whose total weekly demand (sum of
//!   `periods_per_week` across every requirement assigned to them)
//!   exceeds the number of distinct lesson times in the institution can
//!   never be fully scheduled, whatever the algorithm does. CRITICAL.
//! - **Off-duty violation**: an already-placed slot whose teacher is
//!   marked off duty at that time. Existing manual violations are
//!   reported, never silently fixed. WARNING.
//!
//! Inconsistent data is the expected *output* of an audit, not an error:
//! this module mutates nothing and never fails.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::engine::AvailabilityIndex;
use crate::models::Institution;

/// Issue classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    /// Teacher demand structurally exceeds institution capacity.
    Overload,
    /// A placed slot falls inside its teacher's off-duty window.
    OffDutyViolation,
}

/// Issue severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Unsatisfiable regardless of scheduling choices.
    Critical,
    /// Inconsistent but repairable data.
    Warning,
}

/// A single audit finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Type of finding.
    pub kind: IssueKind,
    /// Severity level.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl Issue {
    /// Creates an overload issue (always CRITICAL).
    pub fn overload(message: impl Into<String>) -> Self {
        Self {
            kind: IssueKind::Overload,
            severity: Severity::Critical,
            message: message.into(),
        }
    }

    /// Creates an off-duty violation issue (always WARNING).
    pub fn off_duty_violation(message: impl Into<String>) -> Self {
        Self {
            kind: IssueKind::OffDutyViolation,
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// The result of an audit pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditReport {
    /// All findings, overloads first.
    pub issues: Vec<Issue>,
    /// Number of classes inspected.
    pub class_count: usize,
    /// Number of teachers inspected.
    pub teacher_count: usize,
    /// Total lesson slots across all classes.
    pub lesson_slot_count: usize,
}

impl AuditReport {
    /// Whether no issues were found.
    pub fn is_healthy(&self) -> bool {
        self.issues.is_empty()
    }

    /// Whether any CRITICAL issue exists.
    pub fn has_critical(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Critical)
    }

    /// Findings of one kind.
    pub fn issues_of(&self, kind: IssueKind) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.kind == kind).collect()
    }
}

/// Runs both audit checks over a snapshot.
///
/// The verdict is a pure function of the snapshot: teachers are checked
/// in declaration order, placements in class/slot order.
pub fn audit(institution: &Institution) -> AuditReport {
    let availability = AvailabilityIndex::build(&institution.teachers);
    let capacity = institution.distinct_lesson_times().len();

    let mut report = AuditReport {
        class_count: institution.classes.len(),
        teacher_count: institution.teachers.len(),
        lesson_slot_count: institution.lesson_slot_count(),
        ..Default::default()
    };

    // Overload: weekly demand per teacher vs. distinct lesson times
    let mut demand: HashMap<&str, u32> = HashMap::new();
    for class in &institution.classes {
        for requirement in &class.requirements {
            if let Some(teacher_id) = &requirement.teacher_id {
                *demand.entry(teacher_id.as_str()).or_insert(0) += requirement.periods_per_week;
            }
        }
    }
    for teacher in &institution.teachers {
        let total = demand.get(teacher.id.as_str()).copied().unwrap_or(0);
        if total as usize > capacity {
            report.issues.push(Issue::overload(format!(
                "Teacher '{}' is assigned {} weekly periods but only {} distinct lesson times exist",
                teacher.id, total, capacity
            )));
        }
    }

    // Off-duty violations in already-placed slots
    for class in &institution.classes {
        for slot in class.lesson_slots() {
            let Some(subject_id) = &slot.subject_id else {
                continue;
            };
            // Drift (no requirement, or no teacher) leaves nothing to check
            let Some(teacher_id) = class.teacher_for_subject(subject_id) else {
                continue;
            };
            if availability.is_blocked(teacher_id, slot.day, slot.start) {
                report.issues.push(Issue::off_duty_violation(format!(
                    "Teacher '{}' is placed for class '{}' on {} {}-{} while off duty",
                    teacher_id, class.id, slot.day, slot.start, slot.end
                )));
            }
        }
    }

    for issue in &report.issues {
        debug!("audit finding [{:?}/{:?}]: {}", issue.severity, issue.kind, issue.message);
    }

    report
}
