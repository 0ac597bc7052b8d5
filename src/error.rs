use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("Cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Line {line}: expected at least 3 fields, found {found}")]
    MissingFields { line: u64, found: usize },

    #[error("Line {line}: invalid timestamp '{value}' (expected YYYY/MM/DD hh:mm)")]
    InvalidTimestamp { line: u64, value: String },

    #[error("Line {line}: invalid score '{value}': {source}")]
    InvalidScore {
        line: u64,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl RankError {
    /// True for errors caused by the content of a single row
    pub fn is_malformed_row(&self) -> bool {
        matches!(
            self,
            RankError::MissingFields { .. }
                | RankError::InvalidTimestamp { .. }
                | RankError::InvalidScore { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RankError>;
