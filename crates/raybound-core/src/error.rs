//! Error types for the core crate.

/// An output format name that [`Format`](crate::Format) does not recognize.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output format \"{found}\", expected one of: braces, cpp, rust")]
pub struct ParseFormatError {
    /// The rejected name.
    pub found: String,
}
