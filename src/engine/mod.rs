//! The allocation core.
//!
//! Leaf components first: the availability index and demand pool compile
//! the snapshot into fast lookups, the teacher-busy map carries shared
//! occupancy state, the class allocator fills one grid, the swap resolver
//! repairs contested slots, and the generator drives a whole-institution
//! run and emits the mutation batch plus conflict report.

mod allocator;
mod availability;
mod busy;
mod generator;
mod pool;
mod swap;

pub use allocator::{
    BlockedCandidate, ClassAllocator, Placement, PlacementAttempt, WorkingAssignments,
};
pub use availability::AvailabilityIndex;
pub use busy::{Occupant, TeacherBusyMap};
pub use generator::{Conflict, GenerationReport, SlotMutation, TimetableGenerator};
pub use pool::{DemandPool, Ticket};
pub use swap::resolve_by_swap;
