use thiserror::Error;

/// Errors emitted by the statistical engine.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, ProfileError>;
