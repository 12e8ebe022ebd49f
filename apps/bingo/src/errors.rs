use std::path::PathBuf;

use thiserror::Error;

/// Application-level error type.
/// Every fallible step of card generation returns `Result<T, BingoError>`;
/// `main` wraps it into `anyhow` for reporting.
#[derive(Debug, Error)]
pub enum BingoError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Question file {0} contains no questions")]
    EmptyQuestions(PathBuf),

    #[error("Font error for {path}: {reason}")]
    Font { path: PathBuf, reason: String },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl BingoError {
    /// Wraps an `io::Error` with the path that produced it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BingoError::Io {
            path: path.into(),
            source,
        }
    }
}
