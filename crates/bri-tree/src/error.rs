//! Error types for the classifier crate.

use bri_curve::CurveError;
use bri_types::TypeError;

/// Errors that can occur while building a parameter tree.
///
/// Payload errors never escape [`Classifier::classify`](crate::Classifier::classify);
/// they are folded into an unknown node. Only [`TreeError::NoParameters`]
/// reaches callers of [`ParameterTree::from_entries`](crate::ParameterTree::from_entries).
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The metadata reader supplied no entries for the preset.
    #[error("no parameters")]
    NoParameters,

    /// Text that looks like JSON failed to parse.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON parsed, but is not the expected container.
    #[error("expected a JSON {expected}, found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },

    /// A curve descriptor could not be decoded or rendered.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// A node violated a tree invariant.
    #[error(transparent)]
    Type(#[from] TypeError),
}

/// Convenience alias for classifier results.
pub type TreeResult<T> = Result<T, TreeError>;
