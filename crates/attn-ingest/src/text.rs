//! Shared text classification for device exports.

use attn_model::FieldName;

/// Fixed phrases the device appends to rows as per-row summaries.
/// Cells matching one of these carry no per-day data.
pub const SUMMARY_PHRASES: [&str; 11] = [
    "Total Work Duration",
    "Present:",
    "Absent:",
    "WeeklyOff:",
    "Holidays:",
    "Leaves Taken",
    "Late By Hrs",
    "Early By Hrs",
    "Shift Count",
    "Average Working",
    "Hrs.",
];

const EMPLOYEE_BANNER: &str = "Employee:";

/// Case-insensitive substring match against the summary phrase set.
pub fn is_summary_text(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let folded = text.to_ascii_lowercase();
    SUMMARY_PHRASES
        .iter()
        .any(|phrase| folded.contains(&phrase.to_ascii_lowercase()))
}

/// True when a first-column cell opens an employee block.
pub fn is_employee_header(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case(EMPLOYEE_BANNER)
}

/// True when a first-column cell is a recognized field label.
pub fn is_field_label(text: &str) -> bool {
    FieldName::from_label(text.trim()).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_phrases_match_anywhere_in_the_cell() {
        assert!(is_summary_text("Total Work Duration"));
        assert!(is_summary_text("  total work duration: 180:30"));
        assert!(is_summary_text("8.5 Hrs."));
        assert!(!is_summary_text("09:30"));
        assert!(!is_summary_text(""));
    }

    #[test]
    fn employee_header_is_case_insensitive() {
        assert!(is_employee_header("Employee:"));
        assert!(is_employee_header(" EMPLOYEE: "));
        assert!(!is_employee_header("Employee"));
        assert!(!is_employee_header("Department:"));
    }

    #[test]
    fn field_labels_are_recognized() {
        assert!(is_field_label("Status"));
        assert!(is_field_label("Late By"));
        assert!(!is_field_label("Monthly Status Report"));
    }
}
