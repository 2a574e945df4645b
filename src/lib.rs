//! Timetable generation and conflict-resolution engine.
//!
//! Assigns subjects to fixed weekly lesson slots for one class or an
//! entire institution, subject to teacher availability and
//! no-double-booking constraints, and repairs conflicts by swapping
//! already-placed assignments.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Slot`, `Class`, `SubjectRequirement`,
//!   `Teacher`, `AvailabilityWindow`, `Institution`
//! - **`engine`**: The allocation core — availability index, demand pool,
//!   teacher-busy map, single-class allocator, swap resolver, generator
//! - **`audit`**: Read-only health diagnostics (teacher overload,
//!   off-duty violations)
//! - **`validation`**: Input integrity checks run before generation
//!
//! # Concurrency Contract
//!
//! A generation run reads a consistent [`models::Institution`] snapshot,
//! allocates purely in memory on a single thread, and returns the slot
//! mutations as one batch for the caller to persist atomically. Runs for
//! different institutions may execute concurrently; runs for the *same*
//! institution must be serialized by the caller (the busy map and demand
//! pool are not safe for concurrent mutation). There is no mid-run
//! cancellation: a run either completes with a report or fails validation
//! before anything is produced.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod audit;
pub mod engine;
pub mod models;
pub mod validation;
