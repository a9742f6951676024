use serde::{Deserialize, Serialize};

use crate::errors::GymError;

/// Membership plan a member is signed up for
///
/// Stored as its exact variant name; the storage layer carries a matching
/// CHECK constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MembershipType {
    Monthly,
    Annual,
}

impl MembershipType {
    /// Every plan, in menu order
    pub const ALL: [MembershipType; 2] = [MembershipType::Monthly, MembershipType::Annual];

    /// Stored and displayed name
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipType::Monthly => "Monthly",
            MembershipType::Annual => "Annual",
        }
    }

    /// Plan fee in whole currency units
    pub fn fee(&self) -> u32 {
        match self {
            MembershipType::Monthly => 2000,
            MembershipType::Annual => 22000,
        }
    }
}

impl std::fmt::Display for MembershipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MembershipType {
    type Err = GymError;

    /// Parse a plan name. Surrounding whitespace is ignored, case is not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Monthly" => Ok(MembershipType::Monthly),
            "Annual" => Ok(MembershipType::Annual),
            _ => Err(GymError::validation(
                "membership_type",
                "must be 'Monthly' or 'Annual'",
            )),
        }
    }
}

/// Member - a gym customer who books workouts through schedules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub name: String,

    /// Non-negative when present
    pub age: Option<i64>,

    pub membership_type: MembershipType,
}

impl std::fmt::Display for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Member {}: {} ({})",
            self.id, self.name, self.membership_type
        )
    }
}
