use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all rankfuse operations.
#[derive(Debug, Error, Diagnostic)]
pub enum RankfuseError {
    /// I/O operation failed (e.g. reading a ranking file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed encoded ranking.
    #[error("Invalid ranking: {message}")]
    #[diagnostic(help(
        "A ranking is a JSON array whose elements are object identifiers \
         (numbers or strings) or non-empty arrays of tied identifiers"
    ))]
    InvalidRanking { message: String },

    /// JSON encoding of a ranking failed.
    #[error("Encoding error: {message}")]
    Encode { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type RankfuseResult<T> = miette::Result<T>;
