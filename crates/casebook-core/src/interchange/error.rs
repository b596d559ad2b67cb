use crate::error::ErrorClass;
use thiserror::Error as ThisError;

///
/// CsvError
///
/// Reasons an interchange import or export fails. A failed import is
/// aborted whole; no partial result is produced.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CsvError {
    #[error("invalid CSV header: expected 'id,name,status,type,lastRunAt,expectedResult', found '{found}'")]
    InvalidHeader { found: String },

    #[error("malformed CSV row at line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("CSV read error: {0}")]
    Read(String),

    #[error("CSV write error: {0}")]
    Write(String),
}

impl CsvError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidHeader { .. } | Self::MalformedRow { .. } => ErrorClass::InvalidInput,
            Self::Read(_) | Self::Write(_) => ErrorClass::Io,
        }
    }
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        Self::Read(err.to_string())
    }
}
