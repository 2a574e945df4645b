//! Subject requirement model.
//!
//! A class-subject link: how many weekly periods of a subject a class
//! must receive, and which teacher (if any) delivers them. A requirement
//! without a teacher is tolerated input — it can never be placed, since
//! there is no availability to check.

use serde::{Deserialize, Serialize};

/// A class's weekly demand for one subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectRequirement {
    /// Subject identifier.
    pub subject_id: String,
    /// Number of weekly lesson slots this subject must occupy.
    pub periods_per_week: u32,
    /// Teacher assigned to deliver this subject, if any.
    pub teacher_id: Option<String>,
}

impl SubjectRequirement {
    /// Creates a requirement with no teacher assigned.
    pub fn new(subject_id: impl Into<String>, periods_per_week: u32) -> Self {
        Self {
            subject_id: subject_id.into(),
            periods_per_week,
            teacher_id: None,
        }
    }

    /// Sets the delivering teacher.
    pub fn with_teacher(mut self, teacher_id: impl Into<String>) -> Self {
        self.teacher_id = Some(teacher_id.into());
        self
    }

    /// Whether a teacher is assigned.
    #[inline]
    pub fn has_teacher(&self) -> bool {
        self.teacher_id.is_some()
    }
}
