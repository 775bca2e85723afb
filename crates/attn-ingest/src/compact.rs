//! Removal of spurious empty data columns.
//!
//! Device exports sometimes carry fully empty columns inserted between day
//! columns. A column (other than column 0, which holds row labels) is
//! spurious when no employee-header row and no field-label row has data in
//! it, after discounting the per-row summary phrases.

use tracing::debug;

use attn_model::Sheet;

use crate::text::{is_employee_header, is_field_label, is_summary_text};

/// Old-to-new column index mapping produced by compaction.
/// Removed columns map to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap(Vec<Option<usize>>);

impl ColumnMap {
    fn identity(width: usize) -> Self {
        Self((0..width).map(Some).collect())
    }

    /// New index for an old column, `None` if the column was removed.
    pub fn map(&self, old: usize) -> Option<usize> {
        self.0.get(old).copied().flatten()
    }

    pub fn is_identity(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .all(|(old, new)| *new == Some(old))
    }

    pub fn width(&self) -> usize {
        self.0.len()
    }
}

/// Compacts a sheet, returning the new sheet and the index map.
///
/// When no column qualifies for removal the input sheet is returned as-is
/// (moved, not rebuilt) with an identity map, so the routine is idempotent
/// on already-compact sheets.
pub fn compact_sheet(sheet: Sheet) -> (Sheet, ColumnMap) {
    let width = sheet.max_cols();
    if width <= 1 {
        return (sheet, ColumnMap::identity(width));
    }

    let mut keep = vec![false; width];
    keep[0] = true;
    for (row_idx, row) in sheet.rows.iter().enumerate() {
        let label = sheet.cell(row_idx, 0).display();
        let label = label.trim();
        if !is_employee_header(label) && !is_field_label(label) {
            continue;
        }
        for (col, cell) in row.iter().enumerate().skip(1) {
            if keep[col] || cell.is_blank() {
                continue;
            }
            if is_summary_text(cell.display().trim()) {
                continue;
            }
            keep[col] = true;
        }
    }

    if keep.iter().all(|flag| *flag) {
        return (sheet, ColumnMap::identity(width));
    }

    let removed = keep.iter().filter(|flag| !**flag).count();
    debug!(sheet = %sheet.name, removed, "dropping empty data columns");

    let mut map = vec![None; width];
    let mut next = 0usize;
    for (old, flag) in keep.iter().enumerate() {
        if *flag {
            map[old] = Some(next);
            next += 1;
        }
    }

    let rows = sheet
        .rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .enumerate()
                .filter(|(col, _)| keep[*col])
                .map(|(_, cell)| cell)
                .collect()
        })
        .collect();

    (Sheet::new(sheet.name, rows), ColumnMap(map))
}
