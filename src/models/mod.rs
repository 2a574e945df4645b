//! Timetabling domain models.
//!
//! Core data types for the weekly timetable: the grid (`Slot`), the
//! owners of the grid (`Class`), the demand placed on it
//! (`SubjectRequirement`), and the constrained resource (`Teacher` with
//! `AvailabilityWindow`s). An `Institution` bundles everything into the
//! snapshot the engine consumes.
//!
//! All types are plain serde-serializable data; persistence and transport
//! are the caller's concern.

mod class;
mod institution;
mod requirement;
mod slot;
mod teacher;
mod time;

pub use class::Class;
pub use institution::Institution;
pub use requirement::SubjectRequirement;
pub use slot::{Slot, SlotKind};
pub use teacher::{AvailabilityWindow, Teacher};
pub use time::{Day, TimeOfDay};
