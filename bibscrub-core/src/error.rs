//! Library error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the sanitization and filtering components
#[derive(Error, Debug)]
pub enum Error {
    /// A start marker was found with no matching end marker before text end
    #[error("unterminated span: {start:?} opened at byte {position} has no closing {end:?}")]
    UnterminatedSpan {
        /// The start marker that opened the span
        start: String,
        /// The end marker that was never found
        end: String,
        /// Byte offset of the start marker in the input
        position: usize,
    },

    /// Stop-word list could not be opened or read
    #[error("stop-word list {path}: {source}")]
    StopList {
        /// Path of the list that failed to load
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Stop-word list was read but yielded no tokens
    #[error("stop-word list {path} contains no tokens")]
    EmptyStopList {
        /// Path of the empty list
        path: PathBuf,
    },

    /// I/O failure while writing exported counts
    #[error("export failed: {0}")]
    Export(#[from] std::io::Error),
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, Error>;
