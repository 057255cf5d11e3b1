use thiserror::Error;

/// Domain extractor error types.
///
/// Extraction itself never fails; these only surface when building a
/// custom registry or options.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid suffix entry at line {line}: {entry}")]
    InvalidSuffix { line: usize, entry: String },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
