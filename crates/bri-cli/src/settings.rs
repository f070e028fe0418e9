use std::path::Path;

use anyhow::Context;
use bri_diff::ReportConfig;
use bri_tree::ClassifierConfig;
use serde::{Deserialize, Serialize};

/// Settings for one run: classifier tunables and report layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub classifier: ClassifierConfig,
    pub report: ReportConfig,
}

impl Settings {
    /// Load settings from a TOML file, or use the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing settings in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn no_file_means_defaults() {
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[classifier]\ntext_threshold = 64\n\n[report]\ndiff_tab = \"\\t\"").unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.classifier.text_threshold, 64);
        assert_eq!(settings.classifier.curve_marker, "_curve");
        assert_eq!(settings.report.diff_tab, "\t");
        assert_eq!(settings.report.left_label, "  1 ");
    }

    #[test]
    fn invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[classifier\n").unwrap();
        assert!(Settings::load(Some(file.path())).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Settings::load(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
