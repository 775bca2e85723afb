//! The closed set of per-day data fields a device export carries.

/// Row labels recognized inside an employee block.
///
/// The enum order is the canonical field order of the export and of the
/// per-employee ordered map.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum FieldName {
    Status,
    InTime,
    OutTime,
    Duration,
    LateBy,
    EarlyBy,
    Ot,
    Shift,
}

/// Fields a block must carry to be retained.
pub const ESSENTIAL_FIELDS: [FieldName; 4] = [
    FieldName::Status,
    FieldName::InTime,
    FieldName::OutTime,
    FieldName::Duration,
];

impl FieldName {
    /// Parses a row label, ignoring case and internal spaces, so that
    /// "Late By" and "LateBy" resolve to the same field.
    pub fn from_label(label: &str) -> Option<Self> {
        let folded: String = label
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        match folded.as_str() {
            "status" => Some(FieldName::Status),
            "intime" => Some(FieldName::InTime),
            "outtime" => Some(FieldName::OutTime),
            "duration" => Some(FieldName::Duration),
            "lateby" => Some(FieldName::LateBy),
            "earlyby" => Some(FieldName::EarlyBy),
            "ot" => Some(FieldName::Ot),
            "shift" => Some(FieldName::Shift),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldName::Status => "Status",
            FieldName::InTime => "InTime",
            FieldName::OutTime => "OutTime",
            FieldName::Duration => "Duration",
            FieldName::LateBy => "Late By",
            FieldName::EarlyBy => "Early By",
            FieldName::Ot => "OT",
            FieldName::Shift => "Shift",
        }
    }
}
