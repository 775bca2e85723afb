//! Typed grid cells.
//!
//! Every read from a workbook goes through [`Cell`]; the parser never sees
//! the surrounding application's file format.

/// A single cell of a sheet grid.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Boolean(bool),
}

impl Cell {
    /// Convenience constructor for text cells.
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// True for `Empty` and for text cells holding only whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(value) => value.trim().is_empty(),
            Cell::Number(_) | Cell::Boolean(_) => false,
        }
    }

    /// Stringified value used by the parsers.
    ///
    /// Integral numbers render without a trailing `.0` so day numbers read
    /// back the way the device printed them.
    pub fn display(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(value) => value.clone(),
            Cell::Number(value) => {
                if value.fract() == 0.0 && value.abs() < 1e15 {
                    format!("{}", *value as i64)
                } else {
                    format!("{value}")
                }
            }
            Cell::Boolean(value) => format!("{value}"),
        }
    }
}
