//! Curve descriptors embedded in brush presets.
//!
//! A brush parameter whose name contains `_curve` holds a JSON description of
//! a response curve: a handful of scalar fields plus a list of control
//! points. This crate decodes that JSON, formats it for display, and composes
//! the display string that carries the rendered curve image inline.
//!
//! Drawing the curve is left to a [`CurveRenderer`] supplied by the caller.

pub mod descriptor;
pub mod error;
pub mod render;

pub use descriptor::{CurveDescriptor, CurvePoint};
pub use error::{CurveError, CurveResult};
pub use render::{compose_display, CurveRenderer, PlaceholderRenderer};
