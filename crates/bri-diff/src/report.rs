//! Text reports for single presets and preset comparisons.
//!
//! Reports are plain text with base64 images framed inline; see
//! [`split_segments`](crate::segments::split_segments) for taking them apart.

use bri_types::{indented, ParamKind, Parameter};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compare::{texts_differ, CompareMap, Side};
use crate::config::ReportConfig;

/// Marker contained in every diagnostic line a report can carry.
pub const ERROR_MARKER: &str = "Error ";

/// Which keys a comparison report lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffMode {
    /// Only keys whose two sides differ.
    #[default]
    DifferencesOnly,
    /// Every key, with both sides.
    All,
}

/// Render the parameters of one preset, children included.
pub fn render_tree(roots: &[Parameter], config: &ReportConfig) -> String {
    roots
        .iter()
        .map(|param| param.describe("", true, &config.tree_tab))
        .collect()
}

/// Render a comparison of two presets.
///
/// For every key (in natural order, recursively) the report shows the key
/// followed by the single-level rendering of each side. In
/// [`DiffMode::DifferencesOnly`] a key is listed only when those renderings
/// differ; an object whose own line matches but whose nested content does
/// not is listed by key alone.
pub fn render_diff(map: &CompareMap<'_>, mode: DiffMode, config: &ReportConfig) -> String {
    let mut out = String::new();
    render_entries(map, mode, config, 0, &mut out);
    out
}

fn render_entries(
    map: &CompareMap<'_>,
    mode: DiffMode,
    config: &ReportConfig,
    parent_level: u32,
    out: &mut String,
) {
    for (key, entry) in map.iter() {
        let Some(anchor) = entry.anchor() else {
            let level = parent_level + 1;
            for side in [Side::Left, Side::Right] {
                let line = format!("{}{ERROR_MARKER}resolving {key}", config.label(side));
                out.push_str(&indented(&line, level, &config.diff_tab));
            }
            continue;
        };
        if let (Some(left), Some(right)) = (entry.left(), entry.right()) {
            if left.level() != right.level() {
                debug!(key, left = left.level(), right = right.level(), "sides disagree on level");
            }
        }

        let level = anchor.level();
        let left = entry.side_text(Side::Left, config);
        let right = entry.side_text(Side::Right, config);
        let heading = indented(key, level, &config.diff_tab);

        match mode {
            DiffMode::All => {
                out.push_str(&heading);
                out.push_str(&left);
                out.push_str(&right);
            }
            DiffMode::DifferencesOnly => {
                if texts_differ(&left, &right, config) {
                    out.push_str(&heading);
                    out.push_str(&left);
                    out.push_str(&right);
                } else if anchor.kind() == ParamKind::Object && !entry.is_deep_equal() {
                    out.push_str(&heading);
                }
            }
        }

        if !entry.children().is_empty() {
            render_entries(entry.children(), mode, config, level, out);
        }
    }
}

/// Returns `true` if rendered text carries a diagnostic line.
pub fn has_errors(text: &str) -> bool {
    text.contains(ERROR_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::split_segments;
    use bri_tree::{Classifier, ParameterTree};
    use bri_types::{ChunkKind, RawEntry, SourceKind};
    use proptest::prelude::*;

    fn tree(entries: &[(&str, &str)]) -> ParameterTree {
        let entries: Vec<_> = entries
            .iter()
            .map(|(k, v)| RawEntry::new(ChunkKind::CompressedText, *k, *v))
            .collect();
        ParameterTree::from_entries(&Classifier::default(), &entries).unwrap()
    }

    fn diff(a: &ParameterTree, b: &ParameterTree, mode: DiffMode) -> String {
        let map = CompareMap::build(a.roots(), b.roots());
        render_diff(&map, mode, &ReportConfig::default())
    }

    #[test]
    fn equal_values_are_omitted() {
        let a = tree(&[("size", "10")]);
        let b = tree(&[("size", "10")]);
        assert_eq!(diff(&a, &b, DiffMode::DifferencesOnly), "");
    }

    #[test]
    fn differing_values_show_both_sides() {
        let a = tree(&[("size", "10")]);
        let b = tree(&[("size", "12")]);
        assert_eq!(
            diff(&a, &b, DiffMode::DifferencesOnly),
            "size\n  1 size: 10\n  2 size: 12\n"
        );
    }

    #[test]
    fn one_sided_key_shows_marker() {
        let a = tree(&[("opacity", "0.5"), ("size", "10")]);
        let b = tree(&[("size", "10")]);
        assert_eq!(
            diff(&a, &b, DiffMode::DifferencesOnly),
            "opacity\n  1 opacity: 0.5\n  2 opacity: <Not in 2>\n"
        );
        assert_eq!(
            diff(&b, &a, DiffMode::DifferencesOnly),
            "opacity\n  1 opacity: <Not in 1>\n  2 opacity: 0.5\n"
        );
    }

    #[test]
    fn nested_one_sided_key_is_indented_by_level() {
        let a = tree(&[("brush", r#"{"opacity": 0.5}"#)]);
        let b = tree(&[("brush", "{}")]);
        assert_eq!(
            diff(&a, &b, DiffMode::DifferencesOnly),
            "brush\n    opacity\n      1 opacity: 0.5\n      2 opacity: <Not in 2>\n"
        );
    }

    #[test]
    fn object_with_equal_line_but_nested_difference_is_listed() {
        let a = tree(&[("curve_2", r#"{"a": 1}"#)]);
        let b = tree(&[("curve_2", r#"{"a": 1, "b": 2}"#)]);
        assert_eq!(
            diff(&a, &b, DiffMode::DifferencesOnly),
            "curve_2\n    b\n      1 b: <Not in 1>\n      2 b: 2\n"
        );
    }

    #[test]
    fn deep_inequality_alone_lists_the_key() {
        let child = |v: &str| Parameter::leaf(2, SourceKind::NestedJson, "x", v, ParamKind::Text).unwrap();
        let object = |children| {
            Parameter::composite(1, SourceKind::NestedJson, "curve_2", "{}", ParamKind::Object, children)
                .unwrap()
        };
        let left = [object(vec![child("1")])];
        let right = [object(vec![child("1"), Parameter::leaf(2, SourceKind::NestedJson, "y", "", ParamKind::Text).unwrap()])];
        let map = CompareMap::build(&left, &right);
        let config = ReportConfig::default();
        assert!(!map.get("curve_2").unwrap().single_level_differs(&config));
        assert_eq!(
            render_diff(&map, DiffMode::DifferencesOnly, &config),
            "curve_2\n    y\n      1 y: <Not in 1>\n      2 y: \n"
        );
    }

    #[test]
    fn all_mode_lists_every_key() {
        let a = tree(&[("brush", r#"{"size": 10}"#)]);
        let b = tree(&[("brush", r#"{"size": 10}"#)]);
        assert_eq!(
            diff(&a, &b, DiffMode::All),
            "brush\n  1 brush: \n  2 brush: \n    size\n      1 size: 10\n      2 size: 10\n"
        );
        assert_eq!(diff(&a, &b, DiffMode::DifferencesOnly), "");
    }

    #[test]
    fn tree_rendering_nests_indentation() {
        let t = tree(&[("brush", r#"{"shape": {"size": 3}, "name": "Pencil"}"#)]);
        assert_eq!(
            render_tree(t.roots(), &ReportConfig::default()),
            "brush: \n   name: Pencil\n   shape: \n         size: 3\n"
        );
    }

    #[test]
    fn defects_surface_as_errors() {
        let a = tree(&[("brush", "{broken")]);
        let text = render_tree(a.roots(), &ReportConfig::default());
        assert!(has_errors(&text));
        assert!(!has_errors("size: 10\n"));
    }

    proptest! {
        #[test]
        fn image_segments_match_image_nodes(images in 0usize..4, curves in 0usize..4, texts in 0usize..4) {
            let mut entries = Vec::new();
            for i in 0..images {
                entries.push(RawEntry::new(ChunkKind::CompressedText, format!("thumb{i}"), "QUFB".repeat(40)));
            }
            for i in 0..texts {
                entries.push(RawEntry::new(ChunkKind::PlainText, format!("note{i}"), "plain"));
            }
            let members: Vec<String> = (0..curves)
                .map(|i| format!(r#""c{i}_curve": {{"points": [{{"x": 0, "y": 1}}]}}"#))
                .collect();
            entries.push(RawEntry::new(
                ChunkKind::CompressedText,
                "brush",
                format!("{{{}}}", members.join(", ")),
            ));

            let tree = ParameterTree::from_entries(&Classifier::default(), &entries).unwrap();
            let text = render_tree(tree.roots(), &ReportConfig::default());
            let found = split_segments(&text).iter().filter(|s| s.is_image()).count();
            prop_assert_eq!(found, images + curves);
            prop_assert_eq!(found, tree.image_count());
        }
    }
}
