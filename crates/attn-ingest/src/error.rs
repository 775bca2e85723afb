use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions for a merge run.
///
/// Recoverable conditions (unparsable cells, invalid employee blocks,
/// month-detection misses) are logged and absorbed instead.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("grid source listed sheet {name:?} but could not supply it")]
    SheetUnavailable { name: String },

    #[error("invalid reporting period: month {month}, day count {day_count}")]
    InvalidContext { month: u32, day_count: u32 },

    #[error("sheet directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to read sheet directory {}", path.display())]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read sheet file {}", path.display())]
    SheetRead { path: PathBuf, source: csv::Error },
}

pub type Result<T> = std::result::Result<T, MergeError>;
