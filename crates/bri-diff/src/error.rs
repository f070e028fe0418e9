//! Error types for the diff crate.

/// Errors that can occur while post-processing rendered reports.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// An image segment does not hold valid base64.
    #[error("image payload is not valid base64: {0}")]
    ImageDecode(#[from] base64::DecodeError),

    /// A text segment was asked for image bytes.
    #[error("segment is text, not an image")]
    NotAnImage,
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
