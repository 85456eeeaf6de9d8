use std::io;
use thiserror::Error;

/// Raised when a single text cannot be turned into a sentiment result.
///
/// Batch aggregation recovers from it by dropping the item.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("text contains a NUL character at byte {0}")]
    UnsupportedInput(usize),

    #[error("lexicon produced a non-finite score (polarity {polarity}, subjectivity {subjectivity})")]
    NonFinite { polarity: f64, subjectivity: f64 },
}

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),

    #[error("no text column found among [{}]", columns.join(", "))]
    NoTextColumnFound { columns: Vec<String> },

    #[error("malformed tabular input: {0}")]
    MalformedTabularInput(String),

    #[error("input text is empty")]
    EmptyInput,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),
}

impl From<serde_json::Error> for SentimentError {
    fn from(err: serde_json::Error) -> Self {
        SentimentError::Serialization(format!("JSON error: {}", err))
    }
}

impl From<rayon::ThreadPoolBuildError> for SentimentError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        SentimentError::ThreadPool(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SentimentError>;
