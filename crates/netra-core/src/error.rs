use thiserror::Error;

/// Errors emitted by the core frame model.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("column length mismatch: '{column}' has {found} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        found: usize,
        expected: usize,
    },
    #[error("duplicate column name: '{0}'")]
    DuplicateColumn(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
