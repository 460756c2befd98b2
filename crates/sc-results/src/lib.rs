//! sc-results: time series output.

pub mod csv;

pub use csv::{CSV_HEADER, DEFAULT_OUTPUT_PATH, format_value, write_csv};

use std::path::PathBuf;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
