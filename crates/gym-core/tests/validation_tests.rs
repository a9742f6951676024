use gym_core::errors::GymError;
use gym_core::rules::{optional_text, required_text, validate_membership_type};
use gym_core::MembershipType;
use proptest::prelude::*;

proptest! {
    #[test]
    fn required_text_output_is_trimmed_and_non_empty(s in "\\PC*") {
        match required_text("name", &s) {
            Ok(v) => {
                prop_assert!(!v.is_empty());
                prop_assert_eq!(v.trim(), v.as_str());
                prop_assert_eq!(v.as_str(), s.trim());
            }
            Err(GymError::Validation { field, .. }) => {
                prop_assert_eq!(field, "name");
                prop_assert!(s.trim().is_empty());
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn optional_text_never_yields_blank(s in "\\PC*") {
        if let Some(v) = optional_text(Some(&s)) {
            prop_assert!(!v.trim().is_empty());
            prop_assert_eq!(v.trim(), v.as_str());
        }
    }

    #[test]
    fn membership_type_accepts_only_two_plans(s in "[A-Za-z ]{0,12}") {
        let result = validate_membership_type(&s);
        match s.trim() {
            "Monthly" => prop_assert_eq!(result.ok(), Some(MembershipType::Monthly)),
            "Annual" => prop_assert_eq!(result.ok(), Some(MembershipType::Annual)),
            _ => prop_assert!(result.is_err()),
        }
    }
}
