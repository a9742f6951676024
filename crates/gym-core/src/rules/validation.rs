//! Pure field validation
//!
//! Every repository `create` runs its inputs through these functions before
//! touching storage. Each returns the normalized value or a
//! `GymError::Validation` naming the offending field.

use crate::errors::{GymError, Result};
use crate::model::MembershipType;

/// Trim a required string field and reject it if nothing is left
///
/// # Errors
/// * `Validation` - If the value is empty or whitespace-only
pub fn required_text(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GymError::validation(field, "cannot be empty"));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional string field; blank input is treated as absent
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Accept an optional age, rejecting negative values
///
/// Parsing free-form input is the caller's job; an unparseable age should
/// reach this function as `None`.
///
/// # Errors
/// * `Validation` - If the age is negative
pub fn validate_age(age: Option<i64>) -> Result<Option<i64>> {
    match age {
        Some(a) if a < 0 => Err(GymError::validation("age", "cannot be negative")),
        other => Ok(other),
    }
}

/// Parse a membership type ("Monthly" or "Annual", surrounding whitespace ignored)
///
/// # Errors
/// * `Validation` - For any other value
pub fn validate_membership_type(value: &str) -> Result<MembershipType> {
    value.parse()
}

/// Trim a schedule day and reject it if empty
///
/// # Errors
/// * `Validation` - If the day is empty or whitespace-only
pub fn validate_day_of_week(value: &str) -> Result<String> {
    required_text("day_of_week", value)
}

/// Normalize a name used for lookup; `None` means "match nothing"
pub fn lookup_name(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_trims() {
        assert_eq!(required_text("name", "  Alice  ").unwrap(), "Alice");
    }

    #[test]
    fn test_required_text_rejects_blank() {
        let err = required_text("name", "   ").unwrap_err();
        assert_eq!(
            err,
            GymError::Validation {
                field: "name",
                reason: "cannot be empty".to_string()
            }
        );
        assert!(required_text("name", "").is_err());
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(None), None);
        assert_eq!(optional_text(Some("")), None);
        assert_eq!(optional_text(Some("  \t")), None);
        assert_eq!(optional_text(Some(" Strength ")), Some("Strength".to_string()));
    }

    #[test]
    fn test_validate_age() {
        assert_eq!(validate_age(None).unwrap(), None);
        assert_eq!(validate_age(Some(0)).unwrap(), Some(0));
        assert_eq!(validate_age(Some(42)).unwrap(), Some(42));
        assert!(matches!(
            validate_age(Some(-1)),
            Err(GymError::Validation { field: "age", .. })
        ));
    }

    #[test]
    fn test_validate_membership_type() {
        assert_eq!(
            validate_membership_type("Monthly").unwrap(),
            MembershipType::Monthly
        );
        assert!(matches!(
            validate_membership_type("Weekly"),
            Err(GymError::Validation {
                field: "membership_type",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_day_of_week() {
        assert_eq!(validate_day_of_week(" Monday ").unwrap(), "Monday");
        assert!(matches!(
            validate_day_of_week(" "),
            Err(GymError::Validation {
                field: "day_of_week",
                ..
            })
        ));
    }

    #[test]
    fn test_lookup_name() {
        assert_eq!(lookup_name("  Yoga "), Some("Yoga"));
        assert_eq!(lookup_name("   "), None);
        assert_eq!(lookup_name(""), None);
    }
}
