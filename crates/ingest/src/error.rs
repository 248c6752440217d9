use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading a dataset.
///
/// Only framing-level problems are errors. Malformed field values are coerced
/// (dates to absent, numbers to zero) and never surface here.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open dataset {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV at row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read CSV header: {0}")]
    Header(#[source] csv::Error),
}

pub type IngestResult<T> = Result<T, IngestError>;
