//! Best-effort detection of the reporting month.
//!
//! The export does not carry the period in a fixed cell, so every text cell
//! is scanned for `<Month> <Year>` or `<Month> <Day> <Year>` in sheet order,
//! then row order, then column order. The first match whose year is within
//! one calendar year of "now" wins and stops the scan; matches outside that
//! window are skipped in favor of later candidates.

use std::sync::LazyLock;

use chrono::{Datelike, Local};
use regex::Regex;
use tracing::debug;

use attn_model::{Cell, GridSource, MonthContext};

static MONTH_DAY_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{1,2})[,\s]\s*(\d{4})\b",
    )
    .expect("month-day-year pattern")
});

static MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{4})\b")
        .expect("month-year pattern")
});

/// Detects the reporting period across all sheets, falling back to
/// January of the current year with 31 days when nothing matches.
pub fn detect_month_context(source: &dyn GridSource) -> MonthContext {
    detect_with_reference_year(source, Local::now().year())
}

/// Same as [`detect_month_context`] with an explicit "now" year, so the
/// acceptance window is testable.
pub fn detect_with_reference_year(source: &dyn GridSource, reference_year: i32) -> MonthContext {
    for name in source.sheet_names() {
        let Some(sheet) = source.sheet(&name) else {
            continue;
        };
        for row in &sheet.rows {
            for cell in row {
                let Cell::Text(text) = cell else {
                    continue;
                };
                let Some((month, year)) = parse_period(text) else {
                    continue;
                };
                if (year - reference_year).abs() > 1 {
                    debug!(year, month, "period candidate outside the year window");
                    continue;
                }
                let context = MonthContext::from_calendar(year, month);
                debug!(sheet = %name, year, month, day_count = context.day_count, "detected reporting period");
                return context;
            }
        }
    }
    debug!(reference_year, "no reporting period found, using fallback");
    MonthContext {
        year: reference_year,
        month: 1,
        day_count: 31,
    }
}

/// Extracts `(month, year)` from free text, trying the more specific
/// `<Month> <Day> <Year>` form first.
fn parse_period(text: &str) -> Option<(u32, i32)> {
    if let Some(captures) = MONTH_DAY_YEAR.captures(text) {
        let month = month_number(&captures[1])?;
        let year = captures[3].parse().ok()?;
        return Some((month, year));
    }
    let captures = MONTH_YEAR.captures(text)?;
    let month = month_number(&captures[1])?;
    let year = captures[2].parse().ok()?;
    Some((month, year))
}

fn month_number(abbrev: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];
    let folded = abbrev.to_ascii_lowercase();
    MONTHS
        .iter()
        .position(|name| *name == folded)
        .map(|idx| idx as u32 + 1)
}
