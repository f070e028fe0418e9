//! Parameter classification for brush presets.
//!
//! Turns the raw `(chunk, key, text)` entries of a preset into a
//! [`ParameterTree`]: every entry is classified into a typed
//! [`Parameter`](bri_types::Parameter), and embedded JSON objects, arrays and
//! curve descriptors are decomposed recursively.
//!
//! # Key Types
//!
//! - [`Classifier`] -- Kind inference and recursive decomposition
//! - [`ClassifierConfig`] -- Thresholds and markers used by the inference rules
//! - [`ParameterTree`] -- The sorted root parameters of one preset

pub mod classify;
pub mod config;
pub mod error;
pub mod tree;

pub use classify::Classifier;
pub use config::ClassifierConfig;
pub use error::{TreeError, TreeResult};
pub use tree::ParameterTree;
