pub mod member;
pub mod schedule;
pub mod trainer;
pub mod workout;

pub use member::{Member, MembershipType};
pub use schedule::{Schedule, ScheduleDetail};
pub use trainer::Trainer;
pub use workout::Workout;
