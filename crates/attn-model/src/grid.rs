//! Sheets and the workbook abstraction supplied by the caller.

use crate::cell::Cell;

static EMPTY: Cell = Cell::Empty;

/// One named 2-D grid of cells.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Cell at `(row, col)`, with an `Empty` sentinel for out-of-range reads.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(&EMPTY)
    }

    /// Width of the widest row.
    pub fn max_cols(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Read-only access to the sheets of one workbook.
///
/// Sheet iteration order is stable; it drives the order employees appear in
/// the merged output.
pub trait GridSource {
    fn sheet_names(&self) -> Vec<String>;

    fn sheet(&self, name: &str) -> Option<&Sheet>;
}

/// In-memory workbook, used by tests and by sources that materialize their
/// sheets before parsing starts.
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkbook {
    sheets: Vec<Sheet>,
}

impl MemoryWorkbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    pub fn push(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }
}

impl GridSource for MemoryWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|sheet| sheet.name.clone()).collect()
    }

    fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_reads_are_empty() {
        let sheet = Sheet::new("June", vec![vec![Cell::text("Status")]]);
        assert_eq!(sheet.cell(0, 0), &Cell::text("Status"));
        assert_eq!(sheet.cell(0, 5), &Cell::Empty);
        assert_eq!(sheet.cell(9, 0), &Cell::Empty);
    }

    #[test]
    fn workbook_preserves_sheet_order() {
        let workbook = MemoryWorkbook::new(vec![
            Sheet::new("B", Vec::new()),
            Sheet::new("A", Vec::new()),
        ]);
        assert_eq!(workbook.sheet_names(), vec!["B", "A"]);
        assert!(workbook.sheet("A").is_some());
        assert!(workbook.sheet("C").is_none());
    }
}
