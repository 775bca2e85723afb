pub mod cell;
pub mod field;
pub mod grid;
pub mod metrics;
pub mod month;
pub mod record;
pub mod result;

pub use cell::Cell;
pub use field::{ESSENTIAL_FIELDS, FieldName};
pub use grid::{GridSource, MemoryWorkbook, Sheet};
pub use metrics::Metrics;
pub use month::MonthContext;
pub use record::EmployeeRecord;
pub use result::MergeResult;
