use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Dataset directory is missing {0}")]
    MissingFile(PathBuf),

    #[error("Invalid input data: {0}")]
    InvalidInput(String),

    #[error("Sales data does not match the expected schema: {0}")]
    Schema(#[from] serde_json::Error),
}
