//! Error types for the summary renderer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rendering or writing the summary document.
///
/// Missing display fonts are deliberately not represented here; font lookup
/// is best-effort and falls back to a built-in font instead of failing.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The PDF backend rejected a document operation.
    #[error("PDF backend error: {0}")]
    Pdf(#[from] printpdf::Error),

    /// An output path could not be created or written.
    #[error("cannot write {}: {}", path.display(), source)]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}
