//! fk-results: analysis result tables and their text export.

pub mod table;
pub mod types;

pub use table::{ResultTable, TableRow};
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Header mismatch: expected '{expected}', found '{found}'")]
    Header { expected: String, found: String },

    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },
}
