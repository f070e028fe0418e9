//! The parameter tree of one brush preset.

use bri_types::{Parameter, RawEntry, SourceKind};
use serde::Serialize;
use tracing::debug;

use crate::classify::Classifier;
use crate::error::{TreeError, TreeResult};

/// The root parameters of one preset, sorted by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParameterTree {
    roots: Vec<Parameter>,
}

impl ParameterTree {
    /// Classify every raw entry of a preset at level 1.
    ///
    /// Returns [`TreeError::NoParameters`] when the reader supplied nothing,
    /// so an absent preset is never mistaken for an empty one.
    pub fn from_entries(classifier: &Classifier<'_>, entries: &[RawEntry]) -> TreeResult<Self> {
        if entries.is_empty() {
            return Err(TreeError::NoParameters);
        }
        let roots = entries
            .iter()
            .map(|entry| {
                classifier.classify(
                    1,
                    SourceKind::FlatText(entry.chunk.clone()),
                    &entry.key,
                    &entry.text,
                )
            })
            .collect();
        let tree = Self::from_roots(roots);
        debug!(roots = tree.len(), nodes = tree.node_count(), "built parameter tree");
        Ok(tree)
    }

    /// Wrap already classified root parameters, sorting them by name.
    pub fn from_roots(mut roots: Vec<Parameter>) -> Self {
        roots.sort_by(|a, b| a.name().cmp(b.name()));
        Self { roots }
    }

    pub fn roots(&self) -> &[Parameter] {
        &self.roots
    }

    /// Number of root parameters.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Find a root parameter by name.
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.roots.iter().find(|p| p.name() == name)
    }

    /// Total number of nodes across all roots.
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(Parameter::node_count).sum()
    }

    /// Total number of image and curve nodes across all roots.
    pub fn image_count(&self) -> usize {
        self.roots.iter().map(Parameter::image_count).sum()
    }

    /// Number of nodes whose payload could not be decoded.
    pub fn defect_count(&self) -> usize {
        fn count(param: &Parameter) -> usize {
            usize::from(param.defect().is_some())
                + param.children().unwrap_or_default().iter().map(count).sum::<usize>()
        }
        self.roots.iter().map(count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bri_types::{ChunkKind, ParamKind};

    fn entries() -> Vec<RawEntry> {
        vec![
            RawEntry::new(ChunkKind::PlainText, "Software", "Rebelle 5"),
            RawEntry::new(
                ChunkKind::CompressedText,
                "brush",
                r#"{"size": 10, "opacity": 0.8, "shape": {"round": true}}"#,
            ),
            RawEntry::new(ChunkKind::CompressedText, "asset_id", "abc-123"),
        ]
    }

    #[test]
    fn empty_entries_report_no_parameters() {
        let err = ParameterTree::from_entries(&Classifier::default(), &[]).unwrap_err();
        assert!(matches!(err, TreeError::NoParameters));
    }

    #[test]
    fn roots_are_sorted_by_name() {
        let tree = ParameterTree::from_entries(&Classifier::default(), &entries()).unwrap();
        let names: Vec<_> = tree.roots().iter().map(Parameter::name).collect();
        assert_eq!(names, vec!["Software", "asset_id", "brush"]);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.get("brush").unwrap().kind(), ParamKind::Object);
        assert_eq!(tree.node_count(), 7);
        assert_eq!(tree.defect_count(), 0);
    }

    #[test]
    fn reordered_input_builds_equal_trees() {
        let mut reversed = entries();
        reversed.reverse();
        let classifier = Classifier::default();
        let a = ParameterTree::from_entries(&classifier, &entries()).unwrap();
        let b = ParameterTree::from_entries(&classifier, &reversed).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn reordered_json_members_build_equal_children() {
        let classifier = Classifier::default();
        let a = ParameterTree::from_entries(
            &classifier,
            &[RawEntry::new(ChunkKind::CompressedText, "brush", r#"{"a": 1, "b": {"x": 1, "y": 2}}"#)],
        )
        .unwrap();
        let b = ParameterTree::from_entries(
            &classifier,
            &[RawEntry::new(ChunkKind::CompressedText, "brush", r#"{"b": {"y": 2, "x": 1}, "a": 1}"#)],
        )
        .unwrap();
        let brush_a = a.get("brush").unwrap();
        let brush_b = b.get("brush").unwrap();
        assert_ne!(brush_a.raw_value(), brush_b.raw_value());
        assert_eq!(brush_a.children(), brush_b.children());
    }

    #[test]
    fn defects_are_counted() {
        let tree = ParameterTree::from_entries(
            &Classifier::default(),
            &[RawEntry::new(ChunkKind::CompressedText, "brush", r#"{"broken": "[1, "}"#)],
        )
        .unwrap();
        assert_eq!(tree.defect_count(), 1);
    }
}
