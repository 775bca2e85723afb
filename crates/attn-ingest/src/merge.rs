//! Workbook-level orchestration.
//!
//! Detects the reporting period once, then runs compaction and block
//! parsing per sheet, aggregating employees in encounter order.

use tracing::{debug, info, info_span};

use attn_model::{GridSource, MergeResult, MonthContext};

use crate::block::BlockParser;
use crate::compact::compact_sheet;
use crate::error::{MergeError, Result};
use crate::month_detect::detect_month_context;

/// Sheets with this name are prior output, not fresh input.
const MASTER_SHEET: &str = "Master";

/// Merges a workbook using the detected reporting period.
pub fn merge(source: &dyn GridSource) -> Result<MergeResult> {
    let context = detect_month_context(source);
    merge_sheets(source, context)
}

/// Merges a workbook under a caller-supplied reporting period.
///
/// A non-positive day count or out-of-range month is a caller-contract
/// violation and fails the whole run.
pub fn merge_with_context(source: &dyn GridSource, context: MonthContext) -> Result<MergeResult> {
    if context.day_count == 0 || !(1..=12).contains(&context.month) {
        return Err(MergeError::InvalidContext {
            month: context.month,
            day_count: context.day_count,
        });
    }
    merge_sheets(source, context)
}

fn merge_sheets(source: &dyn GridSource, context: MonthContext) -> Result<MergeResult> {
    let mut employees = Vec::new();
    for name in source.sheet_names() {
        if name.eq_ignore_ascii_case(MASTER_SHEET) {
            debug!(sheet = %name, "skipping prior-output sheet");
            continue;
        }
        let sheet = source
            .sheet(&name)
            .ok_or_else(|| MergeError::SheetUnavailable { name: name.clone() })?;
        let span = info_span!("sheet", name = %name);
        let _guard = span.enter();
        let (compacted, map) = compact_sheet(sheet.clone());
        if !map.is_identity() {
            debug!("sheet had spurious empty columns");
        }
        let records = BlockParser::parse_sheet(&compacted, context.day_count);
        info!(employees = records.len(), "parsed sheet");
        employees.extend(records);
    }
    Ok(MergeResult { employees, context })
}

#[cfg(test)]
mod tests {
    use super::*;
    use attn_model::{Cell, MemoryWorkbook, Sheet};

    fn block_sheet(name: &str) -> Sheet {
        let rows = vec![
            vec!["Employee:", "17 : R. Iyer"],
            vec!["Status", "P", "P"],
            vec!["InTime", "09:30", "09:30"],
            vec!["OutTime", "18:00", "18:00"],
            vec!["Duration", "08:30", "08:30"],
            vec!["Shift", "GEN", "GEN"],
        ];
        Sheet::new(
            name,
            rows.into_iter()
                .map(|row| row.into_iter().map(Cell::text).collect())
                .collect(),
        )
    }

    #[test]
    fn master_sheets_are_skipped() {
        let source =
            MemoryWorkbook::new(vec![block_sheet("MASTER"), block_sheet("Monthly Report")]);
        let result = merge_with_context(&source, MonthContext::from_calendar(2024, 6)).unwrap();
        assert_eq!(result.employees.len(), 1);
    }

    #[test]
    fn invalid_context_is_fatal() {
        let source = MemoryWorkbook::default();
        let zero_days = MonthContext {
            year: 2024,
            month: 6,
            day_count: 0,
        };
        assert!(matches!(
            merge_with_context(&source, zero_days),
            Err(MergeError::InvalidContext { .. })
        ));
        let bad_month = MonthContext {
            year: 2024,
            month: 13,
            day_count: 30,
        };
        assert!(matches!(
            merge_with_context(&source, bad_month),
            Err(MergeError::InvalidContext { .. })
        ));
    }

    #[test]
    fn unavailable_sheet_is_fatal() {
        struct Lying;
        impl GridSource for Lying {
            fn sheet_names(&self) -> Vec<String> {
                vec!["Ghost".to_string()]
            }
            fn sheet(&self, _name: &str) -> Option<&Sheet> {
                None
            }
        }
        assert!(matches!(
            merge_with_context(&Lying, MonthContext::from_calendar(2024, 6)),
            Err(MergeError::SheetUnavailable { .. })
        ));
    }
}
