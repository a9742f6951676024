use serde::{Deserialize, Serialize};

/// Workout - a class run by exactly one trainer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    pub id: i64,

    /// Trimmed, non-empty name (unique only in practice, not enforced)
    pub name: String,

    pub description: Option<String>,

    /// Owning trainer
    pub trainer_id: i64,
}

impl std::fmt::Display for Workout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Workout {}: {} (Trainer: {})",
            self.id, self.name, self.trainer_id
        )
    }
}
