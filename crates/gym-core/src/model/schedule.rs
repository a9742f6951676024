use serde::{Deserialize, Serialize};

/// Schedule - books a member onto a workout on a given day
///
/// A join entity with its own identity. Removed whenever its member or its
/// workout is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: i64,
    pub member_id: i64,
    pub workout_id: i64,

    /// Free-form day label, e.g. "Monday"
    pub day_of_week: String,
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Schedule {}: member {} -> workout {} on {}",
            self.id, self.member_id, self.workout_id, self.day_of_week
        )
    }
}

/// Read-only projection of a schedule joined with the names it refers to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDetail {
    pub schedule_id: i64,
    pub member_name: String,
    pub workout_name: String,
    pub trainer_name: String,
    pub day_of_week: String,
}

impl std::fmt::Display for ScheduleDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}. {} -> {} (Trainer: {}) on {}",
            self.schedule_id,
            self.member_name,
            self.workout_name,
            self.trainer_name,
            self.day_of_week
        )
    }
}
