//! Error types for piiscan PII

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid classifier configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
