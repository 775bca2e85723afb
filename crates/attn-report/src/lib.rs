pub mod hours;
pub mod summary;

pub use hours::{total_ot_hours, weekend_ot_hours, working_ot_hours};
pub use summary::MetricsRow;
