//! Input validation for generation runs.
//!
//! Checks structural integrity of the institution snapshot before the
//! allocator touches anything. Detects:
//! - Duplicate class and slot IDs
//! - Classes with no lesson slots
//! - Classes with no subject requirements
//! - Empty institutions and unknown target classes
//!
//! Validation failures refuse the run outright; data drift (a filled slot
//! whose subject has no requirement, a requirement without a teacher) is
//! deliberately *not* validated here — the engine tolerates it and the
//! auditor reports it.

use std::collections::HashSet;

use crate::models::{Class, Institution};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A class has no lesson slots to allocate into.
    NoLessonSlots,
    /// A class has no subject requirements to draw from.
    NoRequirements,
    /// The institution has no classes at all.
    EmptyInstitution,
    /// The requested class does not exist in the snapshot.
    UnknownClass,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a whole-institution snapshot before generation.
///
/// Checks:
/// 1. At least one class exists
/// 2. No duplicate class IDs
/// 3. No duplicate slot IDs (across all classes)
/// 4. Every class has at least one lesson slot
/// 5. Every class has at least one subject requirement
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_institution(institution: &Institution) -> ValidationResult {
    let mut errors = Vec::new();

    if institution.classes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInstitution,
            "Institution has no classes",
        ));
    }

    let mut class_ids = HashSet::new();
    let mut slot_ids = HashSet::new();

    for class in &institution.classes {
        if !class_ids.insert(class.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate class ID: {}", class.id),
            ));
        }

        for slot in &class.slots {
            if !slot_ids.insert(slot.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate slot ID: {}", slot.id),
                ));
            }
        }

        check_class(class, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a single-class run against the snapshot it belongs to.
///
/// The class must exist, have lesson slots, and have requirements.
/// Other classes in the snapshot are only read (for the shared busy map)
/// and are not validated here.
pub fn validate_class(institution: &Institution, class_id: &str) -> ValidationResult {
    let mut errors = Vec::new();

    match institution.class(class_id) {
        None => errors.push(ValidationError::new(
            ValidationErrorKind::UnknownClass,
            format!("Class '{class_id}' not found in snapshot"),
        )),
        Some(class) => check_class(class, &mut errors),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_class(class: &Class, errors: &mut Vec<ValidationError>) {
    if !class.has_lesson_slots() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoLessonSlots,
            format!("Class '{}' has no lesson slots", class.id),
        ));
    }
    if class.requirements.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoRequirements,
            format!("Class '{}' has no subject requirements", class.id),
        ));
    }
}
