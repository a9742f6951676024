use serde::{Deserialize, Serialize};

/// Trainer - a coach who owns a set of workouts
///
/// Names are unique across all trainers. Deleting a trainer removes every
/// workout it owns, and every schedule booked on those workouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainer {
    /// Storage-generated identifier
    pub id: i64,

    /// Trimmed, non-empty, unique name
    pub name: String,

    /// Optional area of expertise
    pub specialty: Option<String>,
}

impl Trainer {
    /// Specialty label for listings ("General" when none was given)
    pub fn specialty_label(&self) -> &str {
        self.specialty.as_deref().unwrap_or("General")
    }
}

impl std::fmt::Display for Trainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Trainer {}: {} ({})",
            self.id,
            self.name,
            self.specialty_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_general_without_specialty() {
        let trainer = Trainer {
            id: 3,
            name: "Dana".to_string(),
            specialty: None,
        };
        assert_eq!(trainer.to_string(), "Trainer 3: Dana (General)");
    }

    #[test]
    fn test_display_with_specialty() {
        let trainer = Trainer {
            id: 1,
            name: "Alex".to_string(),
            specialty: Some("Yoga".to_string()),
        };
        assert_eq!(trainer.to_string(), "Trainer 1: Alex (Yoga)");
    }
}
