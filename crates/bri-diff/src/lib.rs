//! Diff engine for brush presets.
//!
//! Folds the parameter trees of two presets into one keyed, two-sided
//! structure and renders it as text, either in full or restricted to the keys
//! that differ.
//!
//! # Key Types
//!
//! - [`CompareMap`] / [`CompareEntry`] -- The merged two-sided tree
//! - [`Verdict`] / [`DiffSummary`] -- Per-key outcome and its recursive tally
//! - [`DiffMode`] / [`ReportConfig`] -- Report verbosity and layout
//! - [`Segment`] -- Text and image pieces of a rendered report

pub mod compare;
pub mod config;
pub mod error;
pub mod report;
pub mod segments;
pub mod summary;

pub use compare::{CompareEntry, CompareMap, Side};
pub use config::ReportConfig;
pub use error::{DiffError, DiffResult};
pub use report::{has_errors, render_diff, render_tree, DiffMode};
pub use segments::{split_segments, Segment};
pub use summary::{DiffSummary, Verdict};
