//! Per-employee normalized data.

use std::collections::BTreeMap;

use crate::field::{ESSENTIAL_FIELDS, FieldName};

/// One employee block, normalized to `day_count` entries per field.
///
/// The block parser creates a record when it sees an "Employee:" banner,
/// fills fields as data rows arrive (last write wins per field), and
/// finalizes it on the "Shift" row or at end of sheet.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EmployeeRecord {
    pub emp_id: String,
    pub emp_name: String,
    pub daily: BTreeMap<FieldName, Vec<String>>,
}

impl EmployeeRecord {
    pub fn new(emp_id: impl Into<String>, emp_name: impl Into<String>) -> Self {
        Self {
            emp_id: emp_id.into(),
            emp_name: emp_name.into(),
            daily: BTreeMap::new(),
        }
    }

    /// Stores a field sequence, replacing any earlier value for the key.
    pub fn set_field(&mut self, field: FieldName, values: Vec<String>) {
        self.daily.insert(field, values);
    }

    pub fn field(&self, field: FieldName) -> Option<&[String]> {
        self.daily.get(&field).map(Vec::as_slice)
    }

    /// Value for day index `idx` (day `idx + 1`), empty when the field or
    /// the day is missing.
    pub fn day_value(&self, field: FieldName, idx: usize) -> &str {
        self.daily
            .get(&field)
            .and_then(|values| values.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Validity invariant: the four essential fields must be present.
    /// Checked once, at finalization time.
    pub fn is_valid(&self) -> bool {
        ESSENTIAL_FIELDS
            .iter()
            .all(|field| self.daily.contains_key(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_requires_all_essential_fields() {
        let mut record = EmployeeRecord::new("17", "R. Iyer");
        assert!(!record.is_valid());
        record.set_field(FieldName::Status, vec!["P".into()]);
        record.set_field(FieldName::InTime, vec!["09:30".into()]);
        record.set_field(FieldName::OutTime, vec!["18:00".into()]);
        assert!(!record.is_valid());
        record.set_field(FieldName::Duration, vec!["08:30".into()]);
        assert!(record.is_valid());
        // Shift is optional for validity.
        assert!(record.field(FieldName::Shift).is_none());
    }

    #[test]
    fn later_writes_replace_earlier_ones() {
        let mut record = EmployeeRecord::new("17", "R. Iyer");
        record.set_field(FieldName::Status, vec!["A".into()]);
        record.set_field(FieldName::Status, vec!["P".into()]);
        assert_eq!(record.day_value(FieldName::Status, 0), "P");
        assert_eq!(record.day_value(FieldName::Status, 7), "");
        assert_eq!(record.day_value(FieldName::InTime, 0), "");
    }
}
