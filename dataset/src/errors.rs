use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path} as Parquet: {source}")]
    Parquet {
        path: PathBuf,
        #[source]
        source: parquet::errors::ParquetError,
    },

    #[error(transparent)]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("schema mismatch in {path}: expected [{expected}], found [{found}]")]
    SchemaMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },

    #[error("no dataset files found in {0}")]
    EmptyFolder(PathBuf),

    #[error("failed to serialize rows as JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}
