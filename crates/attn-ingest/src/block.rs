//! Segmentation of a ragged sheet into employee blocks.
//!
//! A sheet is a sequence of rows where free-text banners, "Employee:"
//! headers, and per-field data rows interleave. The parser is an explicit
//! state machine over rows; an open record lives in the parser until a
//! "Shift" row, a new "Employee:" banner, or the end of the sheet
//! finalizes it.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use attn_model::{EmployeeRecord, FieldName, Sheet};

use crate::text::{is_employee_header, is_summary_text};

/// `"<digits> : <name>"`, the preferred identity cell format.
static ID_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*:\s*(.+)$").expect("id-name pattern"));

/// Banner rows that carry a period range, e.g. "Jun 1 2024 to Jun 30 2024".
static BANNER_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\b.*\b\d{4}$")
        .expect("banner date pattern")
});

/// Highest column probed for the identity cell on an "Employee:" row.
const ID_SCAN_LAST_COL: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Seeking,
    InEmployee,
}

/// Walks the rows of one (compacted) sheet and emits finalized records.
pub struct BlockParser {
    day_count: usize,
    state: State,
    open: Option<EmployeeRecord>,
    finalized: Vec<EmployeeRecord>,
}

impl BlockParser {
    pub fn new(day_count: u32) -> Self {
        Self {
            day_count: day_count as usize,
            state: State::Seeking,
            open: None,
            finalized: Vec::new(),
        }
    }

    /// Parses a whole sheet, finalizing any trailing open block.
    pub fn parse_sheet(sheet: &Sheet, day_count: u32) -> Vec<EmployeeRecord> {
        let mut parser = Self::new(day_count);
        for row_idx in 0..sheet.rows.len() {
            parser.consume_row(sheet, row_idx);
        }
        parser.finish()
    }

    fn consume_row(&mut self, sheet: &Sheet, row_idx: usize) {
        let first = sheet.cell(row_idx, 0).display();
        let first = first.trim();
        if first.is_empty() || is_banner(first) {
            return;
        }
        if is_employee_header(first) {
            self.finalize_open();
            self.open = Some(read_identity(sheet, row_idx));
            self.state = State::InEmployee;
            return;
        }
        if self.state == State::InEmployee
            && let Some(field) = FieldName::from_label(first)
        {
            let values = self.read_day_values(sheet, row_idx);
            if let Some(record) = self.open.as_mut() {
                record.set_field(field, values);
            }
            // The Shift row closes the block, which also covers a trailing
            // employee at end of sheet.
            if field == FieldName::Shift {
                self.finalize_open();
            }
        }
    }

    /// Columns 1..=day_count read positionally; summary cells are blanked,
    /// short rows pad with empty strings, long rows truncate.
    fn read_day_values(&self, sheet: &Sheet, row_idx: usize) -> Vec<String> {
        (1..=self.day_count)
            .map(|col| {
                let value = sheet.cell(row_idx, col).display();
                let value = value.trim();
                if is_summary_text(value) {
                    String::new()
                } else {
                    value.to_string()
                }
            })
            .collect()
    }

    fn finalize_open(&mut self) {
        if let Some(record) = self.open.take() {
            if record.is_valid() {
                debug!(emp_id = %record.emp_id, "finalized employee block");
                self.finalized.push(record);
            } else {
                warn!(
                    emp_id = %record.emp_id,
                    fields = record.daily.len(),
                    "dropping employee block missing essential fields"
                );
            }
        }
        self.state = State::Seeking;
    }

    fn finish(mut self) -> Vec<EmployeeRecord> {
        self.finalize_open();
        self.finalized
    }
}

/// True for rows the parser skips regardless of state.
fn is_banner(first_cell: &str) -> bool {
    let folded = first_cell.to_ascii_lowercase();
    folded.starts_with("department:")
        || folded.starts_with("monthly status report")
        || BANNER_DATE.is_match(first_cell)
}

/// Recovers the employee identity from an "Employee:" row.
///
/// Scans columns 1..=10 for the first non-empty, non-summary cell,
/// preferring one in `"<digits> : <name>"` form; otherwise the first
/// candidate serves as both id and name.
fn read_identity(sheet: &Sheet, row_idx: usize) -> EmployeeRecord {
    let mut fallback: Option<String> = None;
    for col in 1..=ID_SCAN_LAST_COL {
        let value = sheet.cell(row_idx, col).display();
        let value = value.trim().to_string();
        if value.is_empty() || is_summary_text(&value) {
            continue;
        }
        if let Some(captures) = ID_NAME.captures(&value) {
            return EmployeeRecord::new(&captures[1], captures[2].trim());
        }
        fallback.get_or_insert(value);
    }
    match fallback {
        Some(value) => EmployeeRecord::new(value.clone(), value),
        None => {
            warn!(row = row_idx, "employee banner without an identity cell");
            EmployeeRecord::new("", "")
        }
    }
}
