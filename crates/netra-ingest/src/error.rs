use thiserror::Error;

/// Errors emitted while loading a dataset file.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported file extension: '{0}'")]
    UnsupportedFormat(String),
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("frame error: {0}")]
    Core(#[from] netra_core::CoreError),
}

pub type Result<T> = std::result::Result<T, IngestError>;
