pub mod validation;

pub use validation::{
    lookup_name, optional_text, required_text, validate_age, validate_day_of_week,
    validate_membership_type,
};
