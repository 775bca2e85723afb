pub mod clock;
pub mod engine;
pub mod policy;

pub use clock::{parse_clock, wrapped_duration};
pub use engine::{MetricsEngine, apply_sandwich_rule};
pub use policy::AttendancePolicy;
