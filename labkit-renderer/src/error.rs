//! Error types for labkit-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from notebook rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error (syntax, undefined variable, context shape).
    #[error("template engine error: {0}")]
    Template(#[from] tera::Error),

    /// Filesystem error while discovering, reading, or writing notebooks.
    #[error("render I/O error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
}

/// Convenience constructor for [`RenderError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io {
        path: path.into(),
        source,
    }
}
