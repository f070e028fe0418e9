//! Error types for the curve crate.

/// Errors that can occur while decoding or rendering a curve.
#[derive(Debug, thiserror::Error)]
pub enum CurveError {
    /// The curve text is not a valid curve JSON document.
    #[error("invalid curve JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The curve has no control points.
    #[error("curve has no control points")]
    NoPoints,

    /// The renderer could not produce an image.
    #[error("curve rendering failed: {0}")]
    Render(String),
}

/// Convenience alias for curve results.
pub type CurveResult<T> = Result<T, CurveError>;
