//! Foundation types for brush preset inspection.
//!
//! Brush presets carry their settings as text chunks embedded in a PNG file.
//! This crate defines the raw entries handed over by a metadata reader and the
//! typed, recursive parameter tree those entries are classified into.
//!
//! # Key Types
//!
//! - [`ChunkKind`] / [`RawEntry`] -- One `(chunk, key, text)` triple from a metadata reader
//! - [`Parameter`] -- One node of the typed parameter tree
//! - [`ParamKind`] -- The classified payload kind of a node
//! - [`SourceKind`] -- Whether a node came from a chunk or from nested JSON

pub mod chunk;
pub mod error;
pub mod param;

pub use chunk::{ChunkKind, RawEntry};
pub use error::{TypeError, TypeResult};
pub use param::{indented, ParamKind, Parameter, SourceKind, IMAGE_DELIMITER, NL};
