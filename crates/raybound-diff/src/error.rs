//! Differ session errors.

/// Errors that can occur while running a diff session.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// Reading the listings or writing the report failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
