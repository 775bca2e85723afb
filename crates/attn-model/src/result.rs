//! The aggregate result handed to reporting collaborators.

use crate::month::MonthContext;
use crate::record::EmployeeRecord;

/// Everything extracted from one workbook.
///
/// Employees appear in the order their banners were encountered, sheet
/// order then row order; reporting layouts rely on that order.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MergeResult {
    pub employees: Vec<EmployeeRecord>,
    pub context: MonthContext,
}
