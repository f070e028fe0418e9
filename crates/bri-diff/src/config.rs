use serde::{Deserialize, Serialize};

use crate::compare::Side;

/// Layout of rendered reports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Indent unit for single-preset listings.
    pub tree_tab: String,
    /// Indent unit for diff reports.
    pub diff_tab: String,
    /// Label placed before lines describing the first preset.
    pub left_label: String,
    /// Label placed before lines describing the second preset.
    pub right_label: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            tree_tab: "   ".into(),
            diff_tab: "    ".into(),
            left_label: "  1 ".into(),
            right_label: "  2 ".into(),
        }
    }
}

impl ReportConfig {
    /// The label for lines describing `side`.
    pub fn label(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left_label,
            Side::Right => &self.right_label,
        }
    }
}
