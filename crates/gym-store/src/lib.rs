//! Gym Store - SQLite persistence for the gym domain
//!
//! Provides:
//! - Connection management (`db`)
//! - Embedded, checksummed schema migrations (`migrations`)
//! - Per-entity repositories with explicit transactional cascades (`repo`)

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::{MemberRepo, ScheduleRepo, TrainerRepo, WorkoutRepo};
