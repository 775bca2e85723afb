pub mod block;
pub mod compact;
pub mod csv_source;
pub mod error;
pub mod merge;
pub mod month_detect;
pub mod text;

pub use block::BlockParser;
pub use compact::{ColumnMap, compact_sheet};
pub use csv_source::load_csv_workbook;
pub use error::{MergeError, Result};
pub use merge::{merge, merge_with_context};
pub use month_detect::{detect_month_context, detect_with_reference_year};
pub use text::{SUMMARY_PHRASES, is_summary_text};
