//! Custom error types for the wordpack-codec crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum WordpackError {
    /// An error originating from I/O operations (e.g. reading a word-list file).
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A dictionary store access failure. Distinct from a lookup miss:
    /// missing words and ids degrade to placeholders, this does not.
    #[error("Dictionary store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// A language code outside the registry, or one that does not fit
    /// the one-byte language field of a frame.
    #[error("Invalid language code: {0:#x}")]
    InvalidLanguage(u16),

    /// The frame is structurally invalid and cannot be decoded.
    #[error("Invalid frame: {0}")]
    InvalidFrame(String),
}

/// A convenience `Result` type alias using the crate's `WordpackError` type.
pub type Result<T> = std::result::Result<T, WordpackError>;
