use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to open launch data at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed launch data")]
    Csv(#[from] csv::Error),
    #[error("launch data is missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("row {row}: payload mass `{value}` is not a non-negative number")]
    InvalidPayload { row: usize, value: String },
    #[error("row {row}: class `{value}` must be 0 or 1")]
    InvalidClass { row: usize, value: String },
    #[error("row {row}: launch site is empty")]
    EmptySite { row: usize },
}
