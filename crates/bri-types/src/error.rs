use thiserror::Error;

use crate::param::ParamKind;

/// Errors produced when assembling parameter nodes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("a {0} parameter must be built with children")]
    MissingChildren(ParamKind),

    #[error("a {0} parameter cannot hold children")]
    UnexpectedChildren(ParamKind),

    #[error("child {name:?} has level {actual}, expected {expected}")]
    LevelMismatch {
        name: String,
        expected: u32,
        actual: u32,
    },
}

/// Convenience alias for type-level results.
pub type TypeResult<T> = Result<T, TypeError>;
