//! Gym Core - domain model, validation rules, errors and logging
//!
//! This crate holds everything about the gym domain that does not touch
//! storage:
//! - Trainer, Workout, Member and Schedule models
//! - Pure validation functions used before any write
//! - The `GymError` taxonomy and the structured `ExError` facility
//! - The structured logging facility and its macros

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, GymError, Result};
pub use model::{Member, MembershipType, Schedule, ScheduleDetail, Trainer, Workout};
