//! Repository layer for the four gym entities
//!
//! Every operation takes the connection explicitly. Writes run inside a
//! single transaction; reads never fail for missing rows.
//!
//! ## Logging Ownership
//!
//! Public `create`/`delete` operations own lifecycle logging
//! (`log_op_start!`, `log_op_end!`, `log_op_error!`). Cascade helpers and
//! reads use `tracing::debug!` only.

pub mod cascade;
pub mod member_repo;
pub mod schedule_repo;
pub mod trainer_repo;
pub mod workout_repo;

pub use cascade::CascadeReport;
pub use member_repo::MemberRepo;
pub use schedule_repo::ScheduleRepo;
pub use trainer_repo::TrainerRepo;
pub use workout_repo::WorkoutRepo;
