//! CSV-backed workbook loading.
//!
//! The surrounding application owns the spreadsheet binary format; what it
//! hands this crate is a directory of per-sheet CSV exports (file stem =
//! sheet name). Files load fully into memory before parsing starts.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::debug;

use attn_model::{Cell, MemoryWorkbook, Sheet};

use crate::error::{MergeError, Result};

/// Loads every `*.csv` file of `dir` (sorted by file name) into an
/// in-memory workbook.
pub fn load_csv_workbook(dir: &Path) -> Result<MemoryWorkbook> {
    let mut workbook = MemoryWorkbook::default();
    for path in list_sheet_files(dir)? {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
            .to_string();
        let sheet = read_sheet(&path, name)?;
        debug!(sheet = %sheet.name, rows = sheet.rows.len(), "loaded sheet");
        workbook.push(sheet);
    }
    Ok(workbook)
}

fn list_sheet_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(MergeError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let entries = std::fs::read_dir(dir).map_err(|source| MergeError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| MergeError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if path.is_file() && is_csv {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn read_sheet(path: &Path, name: String) -> Result<Sheet> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| MergeError::SheetRead {
            path: path.to_path_buf(),
            source,
        })?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| MergeError::SheetRead {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(parse_cell).collect());
    }
    Ok(Sheet::new(name, rows))
}

/// Maps a CSV field onto the typed cell model a spreadsheet reader would
/// produce: blanks, booleans, numbers, then text.
fn parse_cell(raw: &str) -> Cell {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        return Cell::Empty;
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return Cell::Boolean(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Cell::Boolean(false);
    }
    if let Ok(number) = trimmed.parse::<f64>() {
        return Cell::Number(number);
    }
    Cell::text(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use attn_model::GridSource;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn cells_keep_their_semantic_type() {
        assert_eq!(parse_cell(""), Cell::Empty);
        assert_eq!(parse_cell("  "), Cell::Empty);
        assert_eq!(parse_cell("TRUE"), Cell::Boolean(true));
        assert_eq!(parse_cell("12"), Cell::Number(12.0));
        assert_eq!(parse_cell("09:30"), Cell::text("09:30"));
        assert_eq!(parse_cell(" P "), Cell::text("P"));
    }

    #[test]
    fn sheets_load_sorted_by_file_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b_floor.csv"), "Status,P\n").unwrap();
        fs::write(dir.path().join("a_floor.csv"), "Status,A\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        let workbook = load_csv_workbook(dir.path()).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["a_floor", "b_floor"]);
    }

    #[test]
    fn missing_directory_is_fatal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            load_csv_workbook(&missing),
            Err(MergeError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn ragged_rows_survive_loading() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("june.csv"),
            "Employee:,17 : R. Iyer\nStatus,P,A,P\n",
        )
        .unwrap();
        let workbook = load_csv_workbook(dir.path()).unwrap();
        let sheet = workbook.sheet("june").unwrap();
        assert_eq!(sheet.rows[0].len(), 2);
        assert_eq!(sheet.rows[1].len(), 4);
        assert_eq!(sheet.cell(1, 2).display(), "A");
    }
}
