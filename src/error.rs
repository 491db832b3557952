//! Error types for the notepress library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for notepress operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the notepress library.
///
/// Font and image problems are recovered inside the rendering engine (fallback
/// font family, skipped image) and normally never cross the public API. Only
/// artifact-level failures — an unwritable output path or a PDF backend
/// failure — are surfaced to callers.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A required font resource is missing or corrupt.
    #[error("Font unavailable: {0}")]
    FontUnavailable(String),

    /// The image file is missing, malformed, or has zero area.
    #[error("Image unreadable: {path}: {message}")]
    ImageUnreadable { path: PathBuf, message: String },

    /// The PDF backend rejected an operation.
    #[error("PDF backend error: {0}")]
    PdfBackend(String),

    /// The finished artifact could not be persisted.
    #[error("Failed to write artifact {path}: {message}")]
    ArtifactWrite { path: PathBuf, message: String },

    /// The input document contains no renderable content.
    #[error("Empty document: {0}")]
    EmptyDocument(String),
}

impl Error {
    /// Creates an image error for the given path.
    pub(crate) fn image_unreadable(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::ImageUnreadable {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates an artifact write error for the given path.
    pub(crate) fn artifact_write(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::ArtifactWrite {
            path: path.into(),
            message: message.into(),
        }
    }
}
