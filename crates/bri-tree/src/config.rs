use serde::{Deserialize, Serialize};

/// Tunables for the kind-inference rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Longest compressed-text value (in characters) still treated as plain
    /// text. Longer non-JSON values are taken to be base64 images.
    pub text_threshold: usize,
    /// Substring of a nested member name that marks a curve descriptor.
    pub curve_marker: String,
    /// Indent placed before every line of a formatted curve.
    pub curve_tab: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            text_threshold: 128,
            curve_marker: "_curve".into(),
            curve_tab: "    ".into(),
        }
    }
}
